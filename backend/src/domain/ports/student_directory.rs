//! Driving port for student registration and lookup.

use async_trait::async_trait;

use crate::domain::{Error, Student};

/// Domain use-case port for the student directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// Register a student under a client-chosen id.
    ///
    /// Fails with `invalid_request` for malformed ids and `conflict` when the
    /// id is already registered.
    async fn sign_up(&self, id: String) -> Result<Student, Error>;

    /// Fetch one student; `not_found` when absent.
    async fn get_student(&self, id: &str) -> Result<Student, Error>;

    /// Remove every student. Used for test isolation only.
    async fn delete_all(&self) -> Result<(), Error>;
}

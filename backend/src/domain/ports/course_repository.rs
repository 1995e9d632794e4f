//! Port abstraction for course persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Course, CourseCode};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by course repository adapters.
    pub enum CourseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "course repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "course repository query failed: {message}",
        /// A course with the same code is already stored.
        Duplicate { code: String } => "course {code} already exists",
    }
}

/// Storage for course records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a new course; fails with `Duplicate` when the code is taken.
    async fn insert(&self, course: &Course) -> Result<(), CourseRepositoryError>;

    /// Fetch a course by code.
    async fn find_by_code(&self, code: &CourseCode)
    -> Result<Option<Course>, CourseRepositoryError>;

    /// Every stored course ordered by code.
    async fn list(&self) -> Result<Vec<Course>, CourseRepositoryError>;

    /// Remove every course.
    async fn delete_all(&self) -> Result<(), CourseRepositoryError>;
}

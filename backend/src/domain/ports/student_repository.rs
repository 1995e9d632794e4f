//! Port abstraction for student persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Student, StudentId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "student repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "student repository query failed: {message}",
        /// A student with the same id is already registered.
        Duplicate { id: String } => "student {id} already exists",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a new student; fails with `Duplicate` when the id is taken.
    async fn insert(&self, student: &Student) -> Result<(), StudentRepositoryError>;

    /// Fetch a student by identifier.
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Remove every student.
    async fn delete_all(&self) -> Result<(), StudentRepositoryError>;
}

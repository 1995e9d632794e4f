//! Port for exam result persistence.

use async_trait::async_trait;

use crate::domain::{CourseCode, ExamResult, StudentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by exam result repository adapters.
    pub enum ExamResultRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "exam result repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "exam result repository query failed: {message}",
    }
}

/// Storage for exam results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamResultRepository: Send + Sync {
    /// Persist a new result.
    async fn save(&self, result: &ExamResult) -> Result<(), ExamResultRepositoryError>;

    /// Replace the grade and timestamp of an existing result, matched by id.
    async fn replace(&self, result: &ExamResult) -> Result<(), ExamResultRepositoryError>;

    /// Most recent result for the student and course pair.
    async fn find_latest(
        &self,
        student_id: &StudentId,
        course_code: &CourseCode,
    ) -> Result<Option<ExamResult>, ExamResultRepositoryError>;

    /// Every result for a student ordered by submission time.
    async fn list_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<ExamResult>, ExamResultRepositoryError>;

    /// Remove every result.
    async fn delete_all(&self) -> Result<(), ExamResultRepositoryError>;
}

//! Driving port for exam submission and result reads.

use async_trait::async_trait;

use crate::domain::{Error, ExamResult};

/// Domain use-case port for exams.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamService: Send + Sync {
    /// Grade and record an exam attempt.
    ///
    /// Fails with `not_found` when the student or course is unknown and with
    /// `conflict` when the re-submission policy refuses a repeat attempt.
    async fn submit_exam(&self, student_id: &str, course_code: &str) -> Result<ExamResult, Error>;

    /// Results recorded for one student, oldest first.
    async fn list_results(&self, student_id: &str) -> Result<Vec<ExamResult>, Error>;

    /// Remove every exam result. Used for test isolation only.
    async fn delete_all(&self) -> Result<(), Error>;
}

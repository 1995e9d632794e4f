//! In-memory `ExamResultRepository`.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{ExamResultRepository, ExamResultRepositoryError};
use crate::domain::{CourseCode, ExamResult, StudentId};

use super::POISONED;

/// Results kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryExamResultRepository {
    store: Mutex<Vec<ExamResult>>,
}

#[async_trait]
impl ExamResultRepository for InMemoryExamResultRepository {
    async fn save(&self, result: &ExamResult) -> Result<(), ExamResultRepositoryError> {
        self.store
            .lock()
            .map_err(|_| ExamResultRepositoryError::query(POISONED))?
            .push(result.clone());
        Ok(())
    }

    async fn replace(&self, result: &ExamResult) -> Result<(), ExamResultRepositoryError> {
        let mut guard = self
            .store
            .lock()
            .map_err(|_| ExamResultRepositoryError::query(POISONED))?;
        let slot = guard
            .iter_mut()
            .find(|stored| stored.id() == result.id())
            .ok_or_else(|| {
                ExamResultRepositoryError::query(format!("exam result {} not found", result.id()))
            })?;
        *slot = result.clone();
        Ok(())
    }

    async fn find_latest(
        &self,
        student_id: &StudentId,
        course_code: &CourseCode,
    ) -> Result<Option<ExamResult>, ExamResultRepositoryError> {
        let guard = self
            .store
            .lock()
            .map_err(|_| ExamResultRepositoryError::query(POISONED))?;
        Ok(guard
            .iter()
            .filter(|r| r.student_id() == student_id && r.course_code() == course_code)
            .max_by_key(|r| r.submitted_at())
            .cloned())
    }

    async fn list_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<ExamResult>, ExamResultRepositoryError> {
        let guard = self
            .store
            .lock()
            .map_err(|_| ExamResultRepositoryError::query(POISONED))?;
        let mut results: Vec<ExamResult> = guard
            .iter()
            .filter(|r| r.student_id() == student_id)
            .cloned()
            .collect();
        results.sort_by_key(ExamResult::submitted_at);
        Ok(results)
    }

    async fn delete_all(&self) -> Result<(), ExamResultRepositoryError> {
        self.store
            .lock()
            .map_err(|_| ExamResultRepositoryError::query(POISONED))?
            .clear();
        Ok(())
    }
}

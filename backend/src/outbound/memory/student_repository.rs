//! In-memory `StudentRepository`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{Student, StudentId};

use super::POISONED;

#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    store: Mutex<HashMap<StudentId, Student>>,
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn insert(&self, student: &Student) -> Result<(), StudentRepositoryError> {
        let mut guard = self
            .store
            .lock()
            .map_err(|_| StudentRepositoryError::query(POISONED))?;
        if guard.contains_key(student.id()) {
            return Err(StudentRepositoryError::duplicate(student.id().as_ref()));
        }
        guard.insert(student.id().clone(), student.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        let guard = self
            .store
            .lock()
            .map_err(|_| StudentRepositoryError::query(POISONED))?;
        Ok(guard.get(id).cloned())
    }

    async fn delete_all(&self) -> Result<(), StudentRepositoryError> {
        self.store
            .lock()
            .map_err(|_| StudentRepositoryError::query(POISONED))?
            .clear();
        Ok(())
    }
}

//! In-memory `CourseRepository`.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseCode};

use super::POISONED;

/// Courses keyed by code; iteration order doubles as list order.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    store: Mutex<BTreeMap<CourseCode, Course>>,
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn insert(&self, course: &Course) -> Result<(), CourseRepositoryError> {
        let mut guard = self
            .store
            .lock()
            .map_err(|_| CourseRepositoryError::query(POISONED))?;
        match guard.entry(course.code().clone()) {
            Entry::Occupied(_) => Err(CourseRepositoryError::duplicate(course.code().as_ref())),
            Entry::Vacant(slot) => {
                slot.insert(course.clone());
                Ok(())
            }
        }
    }

    async fn find_by_code(
        &self,
        code: &CourseCode,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        let guard = self
            .store
            .lock()
            .map_err(|_| CourseRepositoryError::query(POISONED))?;
        Ok(guard.get(code).cloned())
    }

    async fn list(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        let guard = self
            .store
            .lock()
            .map_err(|_| CourseRepositoryError::query(POISONED))?;
        Ok(guard.values().cloned().collect())
    }

    async fn delete_all(&self) -> Result<(), CourseRepositoryError> {
        self.store
            .lock()
            .map_err(|_| CourseRepositoryError::query(POISONED))?
            .clear();
        Ok(())
    }
}

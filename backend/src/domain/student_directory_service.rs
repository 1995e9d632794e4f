//! Student directory domain service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{StudentDirectory, StudentRepository, StudentRepositoryError};
use crate::domain::{Error, Student, StudentId};

fn map_repository_error(error: StudentRepositoryError) -> Error {
    match error {
        StudentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("student repository unavailable: {message}"))
        }
        StudentRepositoryError::Query { message } => {
            Error::internal(format!("student repository error: {message}"))
        }
        StudentRepositoryError::Duplicate { id } => {
            Error::conflict(format!("student {id} already exists"))
                .with_details(json!({ "field": "id", "code": "duplicate" }))
        }
    }
}

/// Student directory backed by a [`StudentRepository`].
#[derive(Clone)]
pub struct StudentDirectoryService<R> {
    student_repo: Arc<R>,
}

impl<R> StudentDirectoryService<R> {
    /// Create a new directory over the student repository.
    pub fn new(student_repo: Arc<R>) -> Self {
        Self { student_repo }
    }
}

#[async_trait]
impl<R> StudentDirectory for StudentDirectoryService<R>
where
    R: StudentRepository,
{
    async fn sign_up(&self, id: String) -> Result<Student, Error> {
        let student_id = StudentId::new(id).map_err(|err| {
            Error::invalid_request(err.to_string())
                .with_details(json!({ "field": "id", "code": err.code() }))
        })?;
        let student = Student::new(student_id);

        self.student_repo
            .insert(&student)
            .await
            .map_err(map_repository_error)?;

        info!(student_id = %student.id(), "student signed up");
        Ok(student)
    }

    async fn get_student(&self, id: &str) -> Result<Student, Error> {
        let not_found = || Error::not_found(format!("student {id} not found"));
        let Ok(student_id) = StudentId::new(id) else {
            return Err(not_found());
        };

        self.student_repo
            .find_by_id(&student_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)
    }

    async fn delete_all(&self) -> Result<(), Error> {
        self.student_repo
            .delete_all()
            .await
            .map_err(map_repository_error)
    }
}

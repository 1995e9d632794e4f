//! Course directory domain service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    CourseDirectory, CourseRepository, CourseRepositoryError, CreateCourseRequest,
};
use crate::domain::{Course, CourseCode, CourseValidationError, Error};

fn map_repository_error(error: CourseRepositoryError) -> Error {
    match error {
        CourseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("course repository unavailable: {message}"))
        }
        CourseRepositoryError::Query { message } => {
            Error::internal(format!("course repository error: {message}"))
        }
        CourseRepositoryError::Duplicate { code } => {
            Error::conflict(format!("course {code} already exists"))
                .with_details(json!({ "field": "code", "code": "duplicate" }))
        }
    }
}

fn map_validation_error(error: &CourseValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": error.code(),
    }))
}

/// Course directory backed by a [`CourseRepository`].
#[derive(Clone)]
pub struct CourseDirectoryService<R> {
    course_repo: Arc<R>,
}

impl<R> CourseDirectoryService<R> {
    /// Create a new directory over the course repository.
    pub fn new(course_repo: Arc<R>) -> Self {
        Self { course_repo }
    }
}

#[async_trait]
impl<R> CourseDirectory for CourseDirectoryService<R>
where
    R: CourseRepository,
{
    async fn create_course(&self, request: CreateCourseRequest) -> Result<Course, Error> {
        let course = Course::try_from_strings(request.code, request.name)
            .map_err(|err| map_validation_error(&err))?;

        self.course_repo
            .insert(&course)
            .await
            .map_err(map_repository_error)?;

        info!(course_code = %course.code(), "course created");
        Ok(course)
    }

    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        self.course_repo.list().await.map_err(map_repository_error)
    }

    async fn get_course(&self, code: &str) -> Result<Course, Error> {
        let not_found = || Error::not_found(format!("course {code} not found"));
        // A code that fails validation cannot name a stored course.
        let Ok(parsed) = CourseCode::new(code) else {
            return Err(not_found());
        };

        self.course_repo
            .find_by_code(&parsed)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)
    }

    async fn delete_all(&self) -> Result<(), Error> {
        self.course_repo
            .delete_all()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "course_directory_service_tests.rs"]
mod tests;

//! Driving port for course management.
//!
//! Inbound adapters create and read courses through this port; the exam
//! service also resolves course codes through it.

use async_trait::async_trait;

use crate::domain::{Course, Error};

/// Raw course creation input, validated by the implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
}

/// Domain use-case port for the course directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseDirectory: Send + Sync {
    /// Validate and store a new course.
    ///
    /// Fails with `invalid_request` for malformed input and `conflict` when
    /// the code is already taken.
    async fn create_course(&self, request: CreateCourseRequest) -> Result<Course, Error>;

    /// Every course, ordered by code.
    async fn list_courses(&self) -> Result<Vec<Course>, Error>;

    /// Fetch one course; `not_found` when absent.
    async fn get_course(&self, code: &str) -> Result<Course, Error>;

    /// Remove every course. Used for test isolation only.
    async fn delete_all(&self) -> Result<(), Error>;
}

//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CourseDirectory, ExamService, StudentDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub courses: Arc<dyn CourseDirectory>,
    pub students: Arc<dyn StudentDirectory>,
    pub exams: Arc<dyn ExamService>,
}

impl HttpState {
    pub fn new(
        courses: Arc<dyn CourseDirectory>,
        students: Arc<dyn StudentDirectory>,
        exams: Arc<dyn ExamService>,
    ) -> Self {
        Self {
            courses,
            students,
            exams,
        }
    }
}

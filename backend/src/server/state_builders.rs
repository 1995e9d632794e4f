//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use exam_backend::domain::ports::{CourseRepository, ExamResultRepository, StudentRepository};
use exam_backend::domain::{
    CourseDirectoryService, ExamServiceDeps, ExamServiceImpl, GradingMode, ResubmissionPolicy,
    StudentDirectoryService,
};
use exam_backend::inbound::http::state::HttpState;
use exam_backend::outbound::memory::{
    InMemoryCourseRepository, InMemoryExamResultRepository, InMemoryStudentRepository,
};
use exam_backend::outbound::persistence::{
    DieselCourseRepository, DieselExamResultRepository, DieselStudentRepository,
};

use super::ServerConfig;

/// Repositories backing one store.
struct Repositories<C, S, E> {
    courses: Arc<C>,
    students: Arc<S>,
    results: Arc<E>,
}

fn wire_services<C, S, E>(
    repos: Repositories<C, S, E>,
    grading: GradingMode,
    policy: ResubmissionPolicy,
) -> HttpState
where
    C: CourseRepository + 'static,
    S: StudentRepository + 'static,
    E: ExamResultRepository + 'static,
{
    let courses = Arc::new(CourseDirectoryService::new(repos.courses));
    let students = Arc::new(StudentDirectoryService::new(repos.students));
    let exams = Arc::new(ExamServiceImpl::new(
        ExamServiceDeps {
            courses: courses.clone(),
            students: students.clone(),
            results: repos.results,
            grading: grading.into_strategy(),
            clock: Arc::new(DefaultClock),
        },
        policy,
    ));
    HttpState::new(courses, students, exams)
}

/// Build HTTP state backed by PostgreSQL when a pool is configured,
/// otherwise by the in-memory store.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "wiring exam registry repositories");
            wire_services(
                Repositories {
                    courses: Arc::new(DieselCourseRepository::new(pool.clone())),
                    students: Arc::new(DieselStudentRepository::new(pool.clone())),
                    results: Arc::new(DieselExamResultRepository::new(pool.clone())),
                },
                config.grading,
                config.policy,
            )
        }
        None => {
            info!(store = "memory", "wiring exam registry repositories");
            wire_services(
                Repositories {
                    courses: Arc::new(InMemoryCourseRepository::default()),
                    students: Arc::new(InMemoryStudentRepository::default()),
                    results: Arc::new(InMemoryExamResultRepository::default()),
                },
                config.grading,
                config.policy,
            )
        }
    };
    web::Data::new(state)
}

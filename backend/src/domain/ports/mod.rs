//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`CourseDirectory`, `StudentDirectory`, `ExamService`) are
//! consumed by inbound adapters. Driven ports (the repositories) are
//! implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod course_directory;
mod course_repository;
mod exam_result_repository;
mod exam_service;
mod student_directory;
mod student_repository;

#[cfg(test)]
pub use course_directory::MockCourseDirectory;
pub use course_directory::{CourseDirectory, CreateCourseRequest};
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError};
#[cfg(test)]
pub use exam_result_repository::MockExamResultRepository;
pub use exam_result_repository::{ExamResultRepository, ExamResultRepositoryError};
#[cfg(test)]
pub use exam_service::MockExamService;
pub use exam_service::ExamService;
#[cfg(test)]
pub use student_directory::MockStudentDirectory;
pub use student_directory::StudentDirectory;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};

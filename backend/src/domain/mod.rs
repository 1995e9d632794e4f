//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed entities used by the API and persistence
//! layers and the services that implement the driving ports. Types are
//! immutable; invariants are documented on each type.
//!
//! Public surface:
//! - `Course`, `Student`, `ExamResult`, `Grade`: records and their parts.
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `CourseDirectoryService`, `StudentDirectoryService`, `ExamServiceImpl`:
//!   driving port implementations.
//! - `GradingStrategy` and `ResubmissionPolicy`: exam submission knobs.

pub mod course;
mod course_directory_service;
pub mod error;
pub mod exam;
mod exam_service;
pub mod grading;
pub mod ports;
pub mod student;
mod student_directory_service;
pub mod trace_id;

pub use self::course::{Course, CourseCode, CourseName, CourseValidationError};
pub use self::course_directory_service::CourseDirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::exam::{ExamResult, Grade, ParseGradeError, ParsePolicyError, ResubmissionPolicy};
pub use self::exam_service::{ExamServiceDeps, ExamServiceImpl};
#[cfg(test)]
pub use self::grading::MockGradingStrategy;
pub use self::grading::{FixedGrading, GradingMode, GradingStrategy, RandomGrading};
pub use self::student::{Student, StudentId, StudentValidationError};
pub use self::student_directory_service::StudentDirectoryService;
pub use self::trace_id::TraceId;

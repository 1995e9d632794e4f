//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the repository ports backed by PostgreSQL via
//! `diesel-async` with `bb8` connection pooling.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module; adapters translate rows through the validated domain
//! constructors and map every driver failure onto the port error types.
//!
//! # Example
//!
//! ```no_run
//! use exam_backend::outbound::persistence::{DbPool, DieselCourseRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), exam_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/exams")).await?;
//! let courses = DieselCourseRepository::new(pool);
//! # let _ = courses;
//! # Ok(())
//! # }
//! ```

mod diesel_course_repository;
mod diesel_exam_result_repository;
mod diesel_student_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_course_repository::DieselCourseRepository;
pub use diesel_exam_result_repository::DieselExamResultRepository;
pub use diesel_student_repository::DieselStudentRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

//! In-process repositories guarded by `std::sync::Mutex`.
//!
//! Used when no database URL is configured and by HTTP tests. Uniqueness is
//! checked under the lock, so concurrent inserts of the same key still yield
//! exactly one `Duplicate` error.

mod course_repository;
mod exam_result_repository;
mod student_repository;

pub use course_repository::InMemoryCourseRepository;
pub use exam_result_repository::InMemoryExamResultRepository;
pub use student_repository::InMemoryStudentRepository;

const POISONED: &str = "in-memory store lock poisoned";

//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Courses keyed by their client-supplied code.
    courses (code) {
        code -> Varchar,
        name -> Varchar,
    }
}

diesel::table! {
    /// Registered students keyed by their client-chosen id.
    students (id) {
        id -> Varchar,
    }
}

diesel::table! {
    /// Graded exam attempts.
    ///
    /// `student_id` and `course_code` are plain identifiers without foreign
    /// keys; the service checks existence before writing.
    exam_results (id) {
        id -> Uuid,
        student_id -> Varchar,
        course_code -> Varchar,
        /// Single letter from A to F.
        grade -> Varchar,
        submitted_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(courses, exam_results, students);

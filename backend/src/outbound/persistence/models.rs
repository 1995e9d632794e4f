//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{courses, exam_results};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseRow {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = exam_results)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExamResultRow {
    pub id: Uuid,
    pub student_id: String,
    pub course_code: String,
    pub grade: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = exam_results)]
pub(crate) struct NewExamResultRow<'a> {
    pub id: Uuid,
    pub student_id: &'a str,
    pub course_code: &'a str,
    pub grade: &'a str,
    pub submitted_at: DateTime<Utc>,
}

/// Changeset applied when a result is regraded.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = exam_results)]
pub(crate) struct ExamResultRegrade<'a> {
    pub grade: &'a str,
    pub submitted_at: DateTime<Utc>,
}

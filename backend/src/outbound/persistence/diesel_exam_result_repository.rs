//! PostgreSQL-backed `ExamResultRepository` implementation using Diesel ORM.
//!
//! Grades are stored as their single-letter form and parsed back through
//! [`Grade`]'s `FromStr` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ExamResultRepository, ExamResultRepositoryError};
use crate::domain::{CourseCode, ExamResult, Grade, StudentId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ExamResultRegrade, ExamResultRow, NewExamResultRow};
use super::pool::{DbPool, PoolError};
use super::schema::exam_results;

/// Diesel-backed implementation of the exam result repository port.
#[derive(Clone)]
pub struct DieselExamResultRepository {
    pool: DbPool,
}

impl DieselExamResultRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ExamResultRepositoryError {
    map_pool_error(error, |message| ExamResultRepositoryError::connection(message))
}

fn diesel_error(error: &diesel::result::Error) -> ExamResultRepositoryError {
    map_diesel_error(
        error,
        |message| ExamResultRepositoryError::query(message),
        |message| ExamResultRepositoryError::connection(message),
    )
}

/// Convert a database row into a validated domain result.
fn row_to_result(row: ExamResultRow) -> Result<ExamResult, ExamResultRepositoryError> {
    let ExamResultRow {
        id,
        student_id,
        course_code,
        grade,
        submitted_at,
    } = row;

    let invalid = |what: &str, err: &dyn std::fmt::Display| {
        ExamResultRepositoryError::query(format!("stored exam result {id} has invalid {what}: {err}"))
    };

    let student_id = StudentId::new(student_id).map_err(|err| invalid("student id", &err))?;
    let course_code = CourseCode::new(course_code).map_err(|err| invalid("course code", &err))?;
    let grade: Grade = grade.parse().map_err(|err| invalid("grade", &err))?;

    Ok(ExamResult::from_parts(
        id,
        student_id,
        course_code,
        grade,
        submitted_at,
    ))
}

#[async_trait]
impl ExamResultRepository for DieselExamResultRepository {
    async fn save(&self, result: &ExamResult) -> Result<(), ExamResultRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = NewExamResultRow {
            id: result.id(),
            student_id: result.student_id().as_ref(),
            course_code: result.course_code().as_ref(),
            grade: result.grade().as_str(),
            submitted_at: result.submitted_at(),
        };

        diesel::insert_into(exam_results::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| diesel_error(&err))
    }

    async fn replace(&self, result: &ExamResult) -> Result<(), ExamResultRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let changes = ExamResultRegrade {
            grade: result.grade().as_str(),
            submitted_at: result.submitted_at(),
        };

        let updated = diesel::update(exam_results::table.find(result.id()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;

        if updated == 0 {
            return Err(ExamResultRepositoryError::query(format!(
                "exam result {} not found",
                result.id()
            )));
        }
        Ok(())
    }

    async fn find_latest(
        &self,
        student_id: &StudentId,
        course_code: &CourseCode,
    ) -> Result<Option<ExamResult>, ExamResultRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = exam_results::table
            .filter(exam_results::student_id.eq(student_id.as_ref()))
            .filter(exam_results::course_code.eq(course_code.as_ref()))
            .order(exam_results::submitted_at.desc())
            .select(ExamResultRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| diesel_error(&err))?;

        row.map(row_to_result).transpose()
    }

    async fn list_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<ExamResult>, ExamResultRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<ExamResultRow> = exam_results::table
            .filter(exam_results::student_id.eq(student_id.as_ref()))
            .order(exam_results::submitted_at.asc())
            .select(ExamResultRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;

        rows.into_iter().map(row_to_result).collect()
    }

    async fn delete_all(&self) -> Result<(), ExamResultRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(exam_results::table)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| diesel_error(&err))
    }
}

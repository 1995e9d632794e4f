//! PostgreSQL-backed `CourseRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseCode};

use super::error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{CourseRow, NewCourseRow};
use super::pool::{DbPool, PoolError};
use super::schema::courses;

/// Diesel-backed implementation of the course repository port.
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CourseRepositoryError {
    map_pool_error(error, |message| CourseRepositoryError::connection(message))
}

fn diesel_error(error: &diesel::result::Error) -> CourseRepositoryError {
    map_diesel_error(
        error,
        |message| CourseRepositoryError::query(message),
        |message| CourseRepositoryError::connection(message),
    )
}

fn row_to_course(row: CourseRow) -> Result<Course, CourseRepositoryError> {
    Course::try_from_strings(row.code, row.name)
        .map_err(|err| CourseRepositoryError::query(format!("stored course is invalid: {err}")))
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn insert(&self, course: &Course) -> Result<(), CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = NewCourseRow {
            code: course.code().as_ref(),
            name: course.name().as_ref(),
        };

        diesel::insert_into(courses::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                if is_unique_violation(&err) {
                    CourseRepositoryError::duplicate(course.code().as_ref())
                } else {
                    diesel_error(&err)
                }
            })
    }

    async fn find_by_code(
        &self,
        code: &CourseCode,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = courses::table
            .find(code.as_ref())
            .select(CourseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| diesel_error(&err))?;

        row.map(row_to_course).transpose()
    }

    async fn list(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<CourseRow> = courses::table
            .select(CourseRow::as_select())
            // `code` uses the "C" collation, so this is byte order.
            .order(courses::code.asc())
            .load(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;

        rows.into_iter().map(row_to_course).collect()
    }

    async fn delete_all(&self) -> Result<(), CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(courses::table)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| diesel_error(&err))
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; database round trips live in
    //! `tests/diesel_repositories.rs`.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn valid_rows_become_courses() {
        let course = row_to_course(CourseRow {
            code: "6003".into(),
            name: "Introduction to Rust".into(),
        })
        .expect("valid row");

        assert_eq!(course.code().as_ref(), "6003");
        assert_eq!(course.name().as_ref(), "Introduction to Rust");
    }

    #[rstest]
    fn corrupt_rows_surface_as_query_errors() {
        let err = row_to_course(CourseRow {
            code: String::new(),
            name: "Orphan".into(),
        })
        .expect_err("empty code is rejected");

        assert!(matches!(err, CourseRepositoryError::Query { .. }));
    }
}

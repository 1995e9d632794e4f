//! PostgreSQL-backed `StudentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{Student, StudentId};

use super::error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::students;

/// Diesel-backed implementation of the student repository port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> StudentRepositoryError {
    map_pool_error(error, |message| StudentRepositoryError::connection(message))
}

fn diesel_error(error: &diesel::result::Error) -> StudentRepositoryError {
    map_diesel_error(
        error,
        |message| StudentRepositoryError::query(message),
        |message| StudentRepositoryError::connection(message),
    )
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn insert(&self, student: &Student) -> Result<(), StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::insert_into(students::table)
            .values(students::id.eq(student.id().as_ref()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                if is_unique_violation(&err) {
                    StudentRepositoryError::duplicate(student.id().as_ref())
                } else {
                    diesel_error(&err)
                }
            })
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let stored: Option<String> = students::table
            .find(id.as_ref())
            .select(students::id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| diesel_error(&err))?;

        stored
            .map(|raw| {
                StudentId::new(raw).map(Student::new).map_err(|err| {
                    StudentRepositoryError::query(format!("stored student is invalid: {err}"))
                })
            })
            .transpose()
    }

    async fn delete_all(&self) -> Result<(), StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(students::table)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| diesel_error(&err))
    }
}

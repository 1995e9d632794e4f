//! Exam domain service.
//!
//! Resolves the student and course through their directories, applies the
//! configured [`ResubmissionPolicy`], grades the attempt with the injected
//! [`GradingStrategy`], and persists the outcome.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    CourseDirectory, ExamResultRepository, ExamResultRepositoryError, ExamService,
    StudentDirectory,
};
use crate::domain::{Error, ExamResult, GradingStrategy, ResubmissionPolicy};

fn map_repository_error(error: ExamResultRepositoryError) -> Error {
    match error {
        ExamResultRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("exam result repository unavailable: {message}"))
        }
        ExamResultRepositoryError::Query { message } => {
            Error::internal(format!("exam result repository error: {message}"))
        }
    }
}

/// Collaborators required by [`ExamServiceImpl`].
#[derive(Clone)]
pub struct ExamServiceDeps<R> {
    pub courses: Arc<dyn CourseDirectory>,
    pub students: Arc<dyn StudentDirectory>,
    pub results: Arc<R>,
    pub grading: Arc<dyn GradingStrategy>,
    pub clock: Arc<dyn Clock>,
}

/// Exam service implementing the [`ExamService`] driving port.
#[derive(Clone)]
pub struct ExamServiceImpl<R> {
    courses: Arc<dyn CourseDirectory>,
    students: Arc<dyn StudentDirectory>,
    results: Arc<R>,
    grading: Arc<dyn GradingStrategy>,
    clock: Arc<dyn Clock>,
    policy: ResubmissionPolicy,
}

impl<R> ExamServiceImpl<R> {
    /// Create a new exam service.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use exam_backend::domain::{
    /// #     CourseDirectoryService, ExamServiceDeps, ExamServiceImpl, RandomGrading,
    /// #     ResubmissionPolicy, StudentDirectoryService,
    /// # };
    /// # use exam_backend::outbound::memory::{
    /// #     InMemoryCourseRepository, InMemoryExamResultRepository, InMemoryStudentRepository,
    /// # };
    /// # use mockable::DefaultClock;
    /// let service = ExamServiceImpl::new(
    ///     ExamServiceDeps {
    ///         courses: Arc::new(CourseDirectoryService::new(Arc::new(InMemoryCourseRepository::default()))),
    ///         students: Arc::new(StudentDirectoryService::new(Arc::new(InMemoryStudentRepository::default()))),
    ///         results: Arc::new(InMemoryExamResultRepository::default()),
    ///         grading: Arc::new(RandomGrading),
    ///         clock: Arc::new(DefaultClock),
    ///     },
    ///     ResubmissionPolicy::Reject,
    /// );
    /// ```
    pub fn new(deps: ExamServiceDeps<R>, policy: ResubmissionPolicy) -> Self {
        let ExamServiceDeps {
            courses,
            students,
            results,
            grading,
            clock,
        } = deps;
        Self {
            courses,
            students,
            results,
            grading,
            clock,
            policy,
        }
    }
}

#[async_trait]
impl<R> ExamService for ExamServiceImpl<R>
where
    R: ExamResultRepository,
{
    async fn submit_exam(&self, student_id: &str, course_code: &str) -> Result<ExamResult, Error> {
        let student = self.students.get_student(student_id).await?;
        let course = self.courses.get_course(course_code).await?;

        // Check-then-write: concurrent first attempts under `reject` or
        // `overwrite` can each see no previous result and both save.
        let previous = match self.policy {
            ResubmissionPolicy::Allow => None,
            ResubmissionPolicy::Reject | ResubmissionPolicy::Overwrite => self
                .results
                .find_latest(student.id(), course.code())
                .await
                .map_err(map_repository_error)?,
        };

        if let (ResubmissionPolicy::Reject, Some(_)) = (self.policy, &previous) {
            return Err(Error::conflict(format!(
                "student {} already has a result for course {}",
                student.id(),
                course.code()
            )));
        }

        let grade = self.grading.grade(student.id(), course.code());
        let submitted_at = self.clock.utc();

        let result = if let Some(existing) = previous {
            let updated = existing.regraded(grade, submitted_at);
            self.results
                .replace(&updated)
                .await
                .map_err(map_repository_error)?;
            debug!(exam_result_id = %updated.id(), "exam result overwritten");
            updated
        } else {
            let recorded = ExamResult::record(
                student.id().clone(),
                course.code().clone(),
                grade,
                submitted_at,
            );
            self.results
                .save(&recorded)
                .await
                .map_err(map_repository_error)?;
            recorded
        };

        info!(
            student_id = %result.student_id(),
            course_code = %result.course_code(),
            grade = %result.grade(),
            "exam submitted"
        );
        Ok(result)
    }

    async fn list_results(&self, student_id: &str) -> Result<Vec<ExamResult>, Error> {
        let student = self.students.get_student(student_id).await?;
        self.results
            .list_for_student(student.id())
            .await
            .map_err(map_repository_error)
    }

    async fn delete_all(&self) -> Result<(), Error> {
        self.results.delete_all().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "exam_service_tests.rs"]
mod tests;

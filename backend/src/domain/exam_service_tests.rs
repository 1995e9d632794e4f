//! Tests for the exam service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockCourseDirectory, MockExamResultRepository, MockStudentDirectory};
use crate::domain::{
    Course, CourseCode, ErrorCode, FixedGrading, Grade, MockGradingStrategy, Student, StudentId,
};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[fixture]
fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 10, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn bob() -> Student {
    Student::new(StudentId::new("Bob").expect("valid id"))
}

fn rust_course() -> Course {
    Course::try_from_strings("6003", "Introduction to Rust").expect("valid course")
}

fn known_students() -> MockStudentDirectory {
    let mut students = MockStudentDirectory::new();
    students
        .expect_get_student()
        .returning(|id| match id {
            "Bob" => Ok(bob()),
            other => Err(Error::not_found(format!("student {other} not found"))),
        });
    students
}

fn known_courses() -> MockCourseDirectory {
    let mut courses = MockCourseDirectory::new();
    courses.expect_get_course().returning(|code| match code {
        "6003" => Ok(rust_course()),
        other => Err(Error::not_found(format!("course {other} not found"))),
    });
    courses
}

fn build_service(
    results: MockExamResultRepository,
    policy: ResubmissionPolicy,
    submitted_at: DateTime<Utc>,
) -> ExamServiceImpl<MockExamResultRepository> {
    ExamServiceImpl::new(
        ExamServiceDeps {
            courses: Arc::new(known_courses()),
            students: Arc::new(known_students()),
            results: Arc::new(results),
            grading: Arc::new(FixedGrading(Grade::B)),
            clock: Arc::new(FixtureClock {
                utc_now: submitted_at,
            }),
        },
        policy,
    )
}

fn previous_result() -> ExamResult {
    let earlier = Utc
        .with_ymd_and_hms(2026, 5, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp");
    ExamResult::record(
        StudentId::new("Bob").expect("valid id"),
        CourseCode::new("6003").expect("valid code"),
        Grade::E,
        earlier,
    )
}

#[rstest]
#[tokio::test]
async fn submit_exam_records_graded_result(submitted_at: DateTime<Utc>) {
    let mut results = MockExamResultRepository::new();
    results.expect_find_latest().times(1).return_once(|_, _| Ok(None));
    results
        .expect_save()
        .withf(|result| result.grade() == Grade::B && result.course_code().as_ref() == "6003")
        .times(1)
        .return_once(|_| Ok(()));

    let service = build_service(results, ResubmissionPolicy::Reject, submitted_at);
    let result = service.submit_exam("Bob", "6003").await.expect("exam submitted");

    assert_eq!(result.student_id().as_ref(), "Bob");
    assert_eq!(result.course_code().as_ref(), "6003");
    assert_eq!(result.grade(), Grade::B);
    assert_eq!(result.submitted_at(), submitted_at);
}

#[rstest]
#[case::unknown_student("Mallory", "6003", "student Mallory not found")]
#[case::unknown_course("Bob", "9999", "course 9999 not found")]
#[tokio::test]
async fn submit_exam_requires_known_references(
    #[case] student: &str,
    #[case] course: &str,
    #[case] message: &str,
    submitted_at: DateTime<Utc>,
) {
    let mut results = MockExamResultRepository::new();
    results.expect_find_latest().times(0);
    results.expect_save().times(0);

    let service = build_service(results, ResubmissionPolicy::Allow, submitted_at);
    let error = service
        .submit_exam(student, course)
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), message);
}

#[rstest]
#[tokio::test]
async fn reject_policy_refuses_second_attempt(submitted_at: DateTime<Utc>) {
    let mut results = MockExamResultRepository::new();
    results
        .expect_find_latest()
        .times(1)
        .return_once(|_, _| Ok(Some(previous_result())));
    results.expect_save().times(0);
    results.expect_replace().times(0);

    let service = build_service(results, ResubmissionPolicy::Reject, submitted_at);
    let error = service.submit_exam("Bob", "6003").await.expect_err("conflict");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn overwrite_policy_regrades_existing_record(submitted_at: DateTime<Utc>) {
    let previous = previous_result();
    let previous_id = previous.id();
    let mut results = MockExamResultRepository::new();
    results
        .expect_find_latest()
        .times(1)
        .return_once(move |_, _| Ok(Some(previous)));
    results
        .expect_replace()
        .withf(move |result| result.id() == previous_id && result.grade() == Grade::B)
        .times(1)
        .return_once(|_| Ok(()));
    results.expect_save().times(0);

    let service = build_service(results, ResubmissionPolicy::Overwrite, submitted_at);
    let result = service.submit_exam("Bob", "6003").await.expect("exam regraded");

    assert_eq!(result.id(), previous_id);
    assert_eq!(result.submitted_at(), submitted_at);
}

#[rstest]
#[tokio::test]
async fn overwrite_policy_saves_first_attempt_as_new_record(submitted_at: DateTime<Utc>) {
    let mut results = MockExamResultRepository::new();
    results.expect_find_latest().times(1).return_once(|_, _| Ok(None));
    results.expect_replace().times(0);
    results
        .expect_save()
        .withf(move |result| result.submitted_at() == submitted_at)
        .times(1)
        .return_once(|_| Ok(()));

    let service = build_service(results, ResubmissionPolicy::Overwrite, submitted_at);
    let result = service.submit_exam("Bob", "6003").await.expect("exam submitted");

    assert_eq!(result.grade(), Grade::B);
}

#[rstest]
#[tokio::test]
async fn allow_policy_skips_lookup_and_saves(submitted_at: DateTime<Utc>) {
    let mut results = MockExamResultRepository::new();
    results.expect_find_latest().times(0);
    results.expect_save().times(1).return_once(|_| Ok(()));

    let service = build_service(results, ResubmissionPolicy::Allow, submitted_at);
    service.submit_exam("Bob", "6003").await.expect("exam submitted");
}

#[rstest]
#[tokio::test]
async fn grading_strategy_sees_resolved_identifiers(submitted_at: DateTime<Utc>) {
    let mut grading = MockGradingStrategy::new();
    grading
        .expect_grade()
        .withf(|student, course| student.as_ref() == "Bob" && course.as_ref() == "6003")
        .times(1)
        .return_const(Grade::A);
    let mut results = MockExamResultRepository::new();
    results.expect_save().times(1).return_once(|_| Ok(()));

    let service = ExamServiceImpl::new(
        ExamServiceDeps {
            courses: Arc::new(known_courses()),
            students: Arc::new(known_students()),
            results: Arc::new(results),
            grading: Arc::new(grading),
            clock: Arc::new(FixtureClock {
                utc_now: submitted_at,
            }),
        },
        ResubmissionPolicy::Allow,
    );

    let result = service.submit_exam("Bob", "6003").await.expect("exam submitted");
    assert_eq!(result.grade(), Grade::A);
}

#[rstest]
#[tokio::test]
async fn save_connection_failure_is_service_unavailable(submitted_at: DateTime<Utc>) {
    let mut results = MockExamResultRepository::new();
    results.expect_find_latest().times(1).return_once(|_, _| Ok(None));
    results
        .expect_save()
        .times(1)
        .return_once(|_| Err(ExamResultRepositoryError::connection("pool closed")));

    let service = build_service(results, ResubmissionPolicy::Reject, submitted_at);
    let error = service.submit_exam("Bob", "6003").await.expect_err("unavailable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn list_results_requires_known_student(submitted_at: DateTime<Utc>) {
    let mut results = MockExamResultRepository::new();
    results.expect_list_for_student().times(0);

    let service = build_service(results, ResubmissionPolicy::Reject, submitted_at);
    let error = service.list_results("Mallory").await.expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn list_results_returns_repository_rows(submitted_at: DateTime<Utc>) {
    let mut results = MockExamResultRepository::new();
    results
        .expect_list_for_student()
        .times(1)
        .return_once(|_| Ok(vec![previous_result()]));

    let service = build_service(results, ResubmissionPolicy::Reject, submitted_at);
    let listed = service.list_results("Bob").await.expect("results listed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(ExamResult::grade), Some(Grade::E));
}

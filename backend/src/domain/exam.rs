//! Exam results, letter grades, and the re-submission policy.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CourseCode, StudentId};

/// Letter grade on the A (best) to F (fail) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Excellent.
    A,
    /// Good.
    B,
    /// Satisfactory.
    C,
    /// Sufficient.
    D,
    /// Lowest pass.
    E,
    /// Fail.
    F,
}

impl Grade {
    /// Every grade, best first.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// One-letter representation used on the wire and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `A` to `F`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grade `{0}`; expected a letter from A to F")]
pub struct ParseGradeError(pub String);

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseGradeError(s.to_owned()))
    }
}

/// A student's graded exam for one course.
///
/// Holds the student and course by identifier only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamResult {
    id: Uuid,
    student_id: StudentId,
    course_code: CourseCode,
    grade: Grade,
    submitted_at: DateTime<Utc>,
}

impl ExamResult {
    /// Record a fresh result with a generated identifier.
    #[must_use]
    pub fn record(
        student_id: StudentId,
        course_code: CourseCode,
        grade: Grade,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self::from_parts(Uuid::new_v4(), student_id, course_code, grade, submitted_at)
    }

    /// Rebuild a stored result.
    #[must_use]
    pub fn from_parts(
        id: Uuid,
        student_id: StudentId,
        course_code: CourseCode,
        grade: Grade,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            student_id,
            course_code,
            grade,
            submitted_at,
        }
    }

    /// Same record with a new grade and submission time.
    #[must_use]
    pub fn regraded(self, grade: Grade, submitted_at: DateTime<Utc>) -> Self {
        Self {
            grade,
            submitted_at,
            ..self
        }
    }

    /// Record identifier, kept across overwrites.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Student who sat the exam.
    #[must_use]
    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    /// Course the exam belongs to.
    #[must_use]
    pub fn course_code(&self) -> &CourseCode {
        &self.course_code
    }

    /// Awarded grade.
    #[must_use]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// When the attempt was graded.
    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// What happens when a student submits a second exam for the same course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResubmissionPolicy {
    /// Refuse the new submission with a conflict.
    #[default]
    Reject,
    /// Keep the existing record id and replace its grade and timestamp.
    Overwrite,
    /// Store every submission as a separate record.
    Allow,
}

/// Returned when a policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown re-submission policy `{0}`; expected reject, overwrite, or allow")]
pub struct ParsePolicyError(pub String);

impl FromStr for ResubmissionPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "overwrite" => Ok(Self::Overwrite),
            "allow" => Ok(Self::Allow),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}

//! Pluggable grade computation.

use std::str::FromStr;
use std::sync::Arc;

use rand::seq::SliceRandom;

use super::{CourseCode, Grade, ParseGradeError, StudentId};

/// Computes the grade for an exam submission.
#[cfg_attr(test, mockall::automock)]
pub trait GradingStrategy: Send + Sync {
    /// Grade one attempt by `student` at `course`.
    fn grade(&self, student: &StudentId, course: &CourseCode) -> Grade;
}

/// Uniform draw over every letter grade.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomGrading;

impl GradingStrategy for RandomGrading {
    fn grade(&self, _student: &StudentId, _course: &CourseCode) -> Grade {
        Grade::ALL
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(Grade::F)
    }
}

/// Always returns the same grade.
#[derive(Debug, Clone, Copy)]
pub struct FixedGrading(pub Grade);

impl GradingStrategy for FixedGrading {
    fn grade(&self, _student: &StudentId, _course: &CourseCode) -> Grade {
        self.0
    }
}

/// Configured grading behaviour, parsed from `random` or a single letter.
///
/// # Examples
/// ```
/// use exam_backend::domain::{Grade, GradingMode};
///
/// assert_eq!("random".parse::<GradingMode>(), Ok(GradingMode::Random));
/// assert_eq!("B".parse::<GradingMode>(), Ok(GradingMode::Fixed(Grade::B)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradingMode {
    /// Draw a uniformly random grade per attempt.
    #[default]
    Random,
    /// Award the same grade to every attempt.
    Fixed(Grade),
}

impl GradingMode {
    /// Build the strategy this mode describes.
    #[must_use]
    pub fn into_strategy(self) -> Arc<dyn GradingStrategy> {
        match self {
            Self::Random => Arc::new(RandomGrading),
            Self::Fixed(grade) => Arc::new(FixedGrading(grade)),
        }
    }
}

impl FromStr for GradingMode {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(Self::Random);
        }
        s.parse().map(Self::Fixed)
    }
}

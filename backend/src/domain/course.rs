//! Course data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum allowed length for a course code.
pub const COURSE_CODE_MAX: usize = 32;
/// Maximum allowed length for a course name.
pub const COURSE_NAME_MAX: usize = 128;

/// Validation errors returned by the course constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseValidationError {
    #[error("course code must not be empty")]
    EmptyCode,
    #[error("course code must not have leading or trailing whitespace")]
    PaddedCode,
    #[error("course code must be at most {max} characters")]
    CodeTooLong { max: usize },
    #[error("course name must not be empty")]
    EmptyName,
    #[error("course name must be at most {max} characters")]
    NameTooLong { max: usize },
}

impl CourseValidationError {
    /// Request field the failure relates to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyCode | Self::PaddedCode | Self::CodeTooLong { .. } => "code",
            Self::EmptyName | Self::NameTooLong { .. } => "name",
        }
    }

    /// Machine-readable failure code for error details.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyCode | Self::EmptyName => "empty",
            Self::PaddedCode => "padded",
            Self::CodeTooLong { .. } | Self::NameTooLong { .. } => "too_long",
        }
    }
}

/// Unique course identifier such as `6003` or `PGR301`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Validate and construct a [`CourseCode`].
    ///
    /// # Errors
    /// Fails when the code is empty, padded with whitespace, or longer than
    /// [`COURSE_CODE_MAX`] characters.
    pub fn new(code: impl Into<String>) -> Result<Self, CourseValidationError> {
        Self::from_owned(code.into())
    }

    fn from_owned(code: String) -> Result<Self, CourseValidationError> {
        if code.trim().is_empty() {
            return Err(CourseValidationError::EmptyCode);
        }
        if code.trim() != code {
            return Err(CourseValidationError::PaddedCode);
        }
        if code.chars().count() > COURSE_CODE_MAX {
            return Err(CourseValidationError::CodeTooLong {
                max: COURSE_CODE_MAX,
            });
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CourseCode> for String {
    fn from(value: CourseCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseCode {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Human readable course title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseName(String);

impl CourseName {
    /// Validate and construct a [`CourseName`].
    ///
    /// # Errors
    /// Fails when the name is blank or longer than [`COURSE_NAME_MAX`]
    /// characters.
    pub fn new(name: impl Into<String>) -> Result<Self, CourseValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, CourseValidationError> {
        if name.trim().is_empty() {
            return Err(CourseValidationError::EmptyName);
        }
        if name.chars().count() > COURSE_NAME_MAX {
            return Err(CourseValidationError::NameTooLong {
                max: COURSE_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CourseName> for String {
    fn from(value: CourseName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseName {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Enrollable course.
///
/// ## Invariants
/// - `code` is unique across courses; uniqueness is enforced by the store.
/// - Courses are immutable once created.
///
/// # Examples
/// ```
/// use exam_backend::domain::Course;
///
/// let course = Course::try_from_strings("6003", "Introduction to Rust").expect("valid course");
/// assert_eq!(course.code().as_ref(), "6003");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: CourseCode,
    name: CourseName,
}

impl Course {
    /// Build a course from validated components.
    #[must_use]
    pub fn new(code: CourseCode, name: CourseName) -> Self {
        Self { code, name }
    }

    /// Validate raw strings and build a course.
    ///
    /// # Errors
    /// Returns the first [`CourseValidationError`] found, checking the code
    /// before the name.
    pub fn try_from_strings(
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, CourseValidationError> {
        Ok(Self::new(CourseCode::new(code)?, CourseName::new(name)?))
    }

    /// Unique course code.
    #[must_use]
    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &CourseName {
        &self.name
    }
}

//! Student data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum allowed length for a student identifier.
pub const STUDENT_ID_MAX: usize = 64;

/// Validation errors returned by [`StudentId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudentValidationError {
    #[error("student id must not be empty")]
    EmptyId,
    #[error("student id must not have leading or trailing whitespace")]
    PaddedId,
    #[error("student id must be at most {max} characters")]
    IdTooLong { max: usize },
}

impl StudentValidationError {
    /// Machine-readable failure code for error details.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyId => "empty",
            Self::PaddedId => "padded",
            Self::IdTooLong { .. } => "too_long",
        }
    }
}

/// Client-chosen student identifier.
///
/// Free text such as `Alice` is allowed; identifiers are never generated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    /// Validate and construct a [`StudentId`].
    ///
    /// # Errors
    /// Fails when the identifier is empty, padded with whitespace, or longer
    /// than [`STUDENT_ID_MAX`] characters.
    pub fn new(id: impl Into<String>) -> Result<Self, StudentValidationError> {
        Self::from_owned(id.into())
    }

    fn from_owned(id: String) -> Result<Self, StudentValidationError> {
        if id.trim().is_empty() {
            return Err(StudentValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(StudentValidationError::PaddedId);
        }
        if id.chars().count() > STUDENT_ID_MAX {
            return Err(StudentValidationError::IdTooLong {
                max: STUDENT_ID_MAX,
            });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<StudentId> for String {
    fn from(value: StudentId) -> Self {
        value.0
    }
}

impl TryFrom<String> for StudentId {
    type Error = StudentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Registered student.
///
/// ## Invariants
/// - `id` is unique across students; uniqueness is enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
}

impl Student {
    /// Build a student from a validated identifier.
    #[must_use]
    pub fn new(id: StudentId) -> Self {
        Self { id }
    }

    /// Student identifier.
    #[must_use]
    pub fn id(&self) -> &StudentId {
        &self.id
    }
}

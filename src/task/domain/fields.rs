//! Validated text fields of a task.

use crate::validation::{MAX_TITLE_LENGTH, ValidationError, char_count};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed task title of 1 to 64 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when the value is blank or
    /// [`ValidationError::TitleTooLong`] when it exceeds 64 characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if char_count(trimmed) > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed, non-empty task description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDescription`] when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//! Identifier type for tasks.

use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned, strictly positive task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveTaskId`] when the value is zero
    /// or negative.
    pub const fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NonPositiveTaskId);
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Validated status name type.

use crate::validation::{MAX_STATUS_NAME_LENGTH, ValidationError, char_count};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed, lowercased status name of 1 to 36 characters.
///
/// Lowercasing makes name uniqueness and lookups case-insensitive. A
/// character whose lowercase form spans several code points (such as `İ`)
/// is kept as written, so normalising never changes the length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusName(String);

impl StatusName {
    /// Creates a validated status name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyStatusName`] when the value is blank or
    /// [`ValidationError::TooLongStatusName`] when the trimmed value exceeds
    /// 36 characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyStatusName);
        }

        if char_count(trimmed) > MAX_STATUS_NAME_LENGTH {
            return Err(ValidationError::TooLongStatusName);
        }

        Ok(Self(trimmed.chars().map(fold_case).collect()))
    }

    /// Returns the status name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for StatusName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

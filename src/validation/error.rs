//! Validation error kinds reported verbatim to callers.

use thiserror::Error;

/// Maximum task title length in Unicode scalar values.
pub const MAX_TITLE_LENGTH: usize = 64;

/// Maximum status name length in Unicode scalar values.
pub const MAX_STATUS_NAME_LENGTH: usize = 36;

/// Errors raised while validating or normalising raw input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The status name is empty after trimming.
    #[error("status name cannot be empty")]
    EmptyStatusName,

    /// The status name exceeds the storage limit.
    #[error("max status name length is {}", MAX_STATUS_NAME_LENGTH)]
    TooLongStatusName,

    /// The task title is empty after trimming.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The task title exceeds the storage limit.
    #[error("max task title length is {}", MAX_TITLE_LENGTH)]
    TitleTooLong,

    /// The task description is empty after trimming.
    #[error("description cannot be empty")]
    EmptyDescription,

    /// A required date is empty after trimming.
    #[error("date cannot be empty")]
    EmptyDate,

    /// A date is not a valid RFC 3339 timestamp.
    #[error("date must be in RFC3339 format")]
    InvalidDateFormat,

    /// A due date lies before the current instant.
    #[error("task date cannot be in the past")]
    OutdatedDate,

    /// The task identifier is empty.
    #[error("task id cannot be empty")]
    EmptyTaskId,

    /// The task identifier is not an integer.
    #[error("task id must be an integer")]
    InvalidTaskId,

    /// The task identifier is zero or negative.
    #[error("task id must be positive")]
    NonPositiveTaskId,

    /// The page limit is not an integer.
    #[error("limit must be an integer")]
    InvalidLimit,

    /// The page limit is negative.
    #[error("limit cannot be negative")]
    NegativeLimit,

    /// The pagination cursor is not an integer.
    #[error("last task id must be an integer")]
    InvalidLastTaskId,

    /// The pagination cursor is negative.
    #[error("last task id cannot be negative")]
    NegativeLastTaskId,
}

//! Parsing of task identifiers and listing cursors.

use super::{ValidationError, non_blank};
use crate::task::domain::TaskId;

/// Parses a path-style task identifier.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyTaskId`], [`ValidationError::InvalidTaskId`]
/// or [`ValidationError::NonPositiveTaskId`].
pub fn parse_task_id(raw: &str) -> Result<TaskId, ValidationError> {
    let trimmed = non_blank(raw).ok_or(ValidationError::EmptyTaskId)?;
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidTaskId)?;
    TaskId::new(value)
}

/// Parses the page size. Blank input and `0` both mean "no limit".
///
/// # Errors
///
/// Returns [`ValidationError::InvalidLimit`] or
/// [`ValidationError::NegativeLimit`].
pub fn parse_limit(raw: &str) -> Result<Option<i64>, ValidationError> {
    let Some(trimmed) = non_blank(raw) else {
        return Ok(None);
    };
    let limit = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidLimit)?;
    if limit < 0 {
        return Err(ValidationError::NegativeLimit);
    }
    Ok((limit > 0).then_some(limit))
}

/// Parses the "last seen id" cursor. Blank input starts from the beginning.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidLastTaskId`] or
/// [`ValidationError::NegativeLastTaskId`].
pub fn parse_last_id(raw: &str) -> Result<i64, ValidationError> {
    let Some(trimmed) = non_blank(raw) else {
        return Ok(0);
    };
    let last_id = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidLastTaskId)?;
    if last_id < 0 {
        return Err(ValidationError::NegativeLastTaskId);
    }
    Ok(last_id)
}

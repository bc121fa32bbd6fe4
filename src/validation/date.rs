//! RFC 3339 date parsing for due dates and listing filters.

use super::{ValidationError, non_blank};
use chrono::{DateTime, Utc};

fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| {
            tracing::debug!(error = %err, input = raw, "rejected malformed date");
            ValidationError::InvalidDateFormat
        })
}

/// Parses a required due date and rejects instants before `now`.
///
/// The result is normalised to UTC. An instant equal to `now` is accepted.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyDate`] for blank input,
/// [`ValidationError::InvalidDateFormat`] when the value is not RFC 3339, or
/// [`ValidationError::OutdatedDate`] when it lies strictly before `now`.
pub fn parse_due_date(raw: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = non_blank(raw).ok_or(ValidationError::EmptyDate)?;
    let due = parse_rfc3339(trimmed)?;
    if due < now {
        return Err(ValidationError::OutdatedDate);
    }
    Ok(due)
}

/// Parses an optional due date; blank input yields `None`.
///
/// # Errors
///
/// Returns the same errors as [`parse_due_date`] for non-blank input.
pub fn parse_optional_due_date(
    raw: &str,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    non_blank(raw)
        .map(|value| parse_due_date(value, now))
        .transpose()
}

/// Parses the optional calendar-day filter used by task listing.
///
/// Past dates are allowed here; only the format is checked.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDateFormat`] when the value is not
/// RFC 3339.
pub fn parse_day_filter(raw: &str) -> Result<Option<DateTime<Utc>>, ValidationError> {
    non_blank(raw).map(parse_rfc3339).transpose()
}

//! Input validation and normalisation for raw request values.
//!
//! Every string that reaches the engine passes through this module before a
//! store is touched. Text is trimmed, identifiers and pagination values are
//! parsed, and due dates are checked against the caller's clock. Validated
//! domain newtypes (`StatusName`, `TaskTitle`, `TaskDescription`) build on the
//! helpers here and report the same [`ValidationError`] variants.

mod date;
mod error;
mod pagination;
mod text;

pub use date::{parse_day_filter, parse_due_date, parse_optional_due_date};
pub use error::{MAX_STATUS_NAME_LENGTH, MAX_TITLE_LENGTH, ValidationError};
pub use pagination::{parse_last_id, parse_limit, parse_task_id};
pub use text::{char_count, non_blank};

#[cfg(test)]
mod tests;

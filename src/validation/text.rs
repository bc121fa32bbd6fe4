//! Text normalisation helpers.

/// Trims surrounding whitespace, returning `None` when nothing remains.
///
/// Optional update fields use this to treat blank input as "leave the stored
/// value unchanged".
#[must_use]
pub fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Returns the length of `value` in Unicode scalar values.
#[must_use]
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

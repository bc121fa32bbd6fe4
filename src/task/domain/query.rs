//! Listing criteria for active tasks.

use crate::status::domain::StatusId;
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

/// Inclusive UTC calendar-day window `[00:00:00.000000000, 23:59:59.999999999]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayRange {
    /// Returns the UTC calendar day containing `instant`.
    #[must_use]
    pub fn containing(instant: DateTime<Utc>) -> Self {
        let start = instant.date_naive().and_time(NaiveTime::MIN).and_utc();
        let end = start
            .checked_add_signed(TimeDelta::days(1) - TimeDelta::nanoseconds(1))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { start, end }
    }

    /// Returns the first instant of the day.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the last representable instant of the day.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when `instant` falls within the day.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Filters, cursor and page size for listing active tasks.
///
/// Results are always ordered by id ascending and start strictly after
/// [`TaskQuery::after_id`]; `0` means "from the beginning".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskQuery {
    status_id: Option<StatusId>,
    due_on: Option<DayRange>,
    after_id: i64,
    limit: Option<i64>,
}

impl TaskQuery {
    /// Creates an unfiltered, unlimited query starting from the beginning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one status.
    #[must_use]
    pub const fn with_status_id(mut self, status_id: StatusId) -> Self {
        self.status_id = Some(status_id);
        self
    }

    /// Restricts results to tasks due on the given UTC day.
    #[must_use]
    pub const fn due_on(mut self, day: DayRange) -> Self {
        self.due_on = Some(day);
        self
    }

    /// Starts the page after the given task id.
    #[must_use]
    pub const fn after(mut self, last_id: i64) -> Self {
        self.after_id = last_id;
        self
    }

    /// Caps the page size; `None` means unlimited.
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<i64>) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the status filter, if any.
    #[must_use]
    pub const fn status_id(&self) -> Option<StatusId> {
        self.status_id
    }

    /// Returns the due-day filter, if any.
    #[must_use]
    pub const fn due_day(&self) -> Option<DayRange> {
        self.due_on
    }

    /// Returns the pagination cursor.
    #[must_use]
    pub const fn after_id(&self) -> i64 {
        self.after_id
    }

    /// Returns the page size, if capped.
    #[must_use]
    pub const fn limit(&self) -> Option<i64> {
        self.limit
    }
}

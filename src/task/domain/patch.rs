//! Partial task updates.

use super::{TaskDescription, TaskTitle};
use crate::status::domain::StatusId;
use chrono::{DateTime, Utc};

/// Fields to overwrite on an active task; absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    description: Option<TaskDescription>,
    status_id: Option<StatusId>,
    due_date: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status_id(mut self, status_id: StatusId) -> Self {
        self.status_id = Some(status_id);
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the replacement status, if any.
    #[must_use]
    pub const fn status_id(&self) -> Option<StatusId> {
        self.status_id
    }

    /// Returns the replacement due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns `true` when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status_id.is_none()
            && self.due_date.is_none()
    }
}

//! Raw request payloads accepted by the task service.
//!
//! Every field is an unvalidated string exactly as a transport received it.
//! Blank optional fields mean "not provided".

use serde::Deserialize;

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    pub(super) title: String,
    pub(super) description: String,
    pub(super) status_name: String,
    pub(super) date: String,
}

impl CreateTaskRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status_name: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status_name: status_name.into(),
            date: date.into(),
        }
    }
}

/// Request payload for a partial task update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    pub(super) title: Option<String>,
    pub(super) description: Option<String>,
    pub(super) status_name: Option<String>,
    pub(super) date: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status by name.
    #[must_use]
    pub fn with_status_name(mut self, status_name: impl Into<String>) -> Self {
        self.status_name = Some(status_name.into());
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Query parameters for listing tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListTasksRequest {
    pub(super) limit: String,
    #[serde(alias = "last-id")]
    pub(super) last_id: String,
    pub(super) status_name: String,
    pub(super) date: String,
}

impl ListTasksRequest {
    /// Creates a request listing every active task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw page size.
    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = limit.into();
        self
    }

    /// Sets the raw "last seen id" cursor.
    #[must_use]
    pub fn with_last_id(mut self, last_id: impl Into<String>) -> Self {
        self.last_id = last_id.into();
        self
    }

    /// Restricts the listing to one status name.
    #[must_use]
    pub fn with_status_name(mut self, status_name: impl Into<String>) -> Self {
        self.status_name = status_name.into();
        self
    }

    /// Restricts the listing to one due day.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

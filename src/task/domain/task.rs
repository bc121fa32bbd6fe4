//! Task entity and its unpersisted draft.

use super::{TaskDescription, TaskId, TaskPatch, TaskTitle};
use crate::status::domain::StatusId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated task awaiting its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: TaskDescription,
    status_id: StatusId,
    due_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Builds a draft stamped with the clock's current instant.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: TaskDescription,
        status_id: StatusId,
        due_date: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            title,
            description,
            status_id,
            due_date,
            created_at: clock.utc(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the referenced status.
    #[must_use]
    pub const fn status_id(&self) -> StatusId {
        self.status_id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status_id: StatusId,
    due_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted status reference.
    pub status_id: StatusId,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Soft-deletion timestamp, if the task has been deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Promotes a draft to a persisted task under the given identifier.
    #[must_use]
    pub fn from_new(id: TaskId, task: NewTask) -> Self {
        let NewTask {
            title,
            description,
            status_id,
            due_date,
            created_at,
        } = task;
        Self {
            id,
            title,
            description,
            status_id,
            due_date,
            created_at,
            deleted_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status_id: data.status_id,
            due_date: data.due_date,
            created_at: data.created_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the referenced status.
    #[must_use]
    pub const fn status_id(&self) -> StatusId {
        self.status_id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the soft-deletion timestamp, if any.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns `true` once the task has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Overwrites the fields present in `patch`, keeping the others.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = patch.title() {
            self.title = title.clone();
        }
        if let Some(description) = patch.description() {
            self.description = description.clone();
        }
        if let Some(status_id) = patch.status_id() {
            self.status_id = status_id;
        }
        if let Some(due_date) = patch.due_date() {
            self.due_date = due_date;
        }
    }

    /// Marks the task deleted at `at`.
    ///
    /// Returns `false` without changes when the task is already deleted, so
    /// the deletion timestamp is only ever set once.
    pub fn mark_deleted(&mut self, at: DateTime<Utc>) -> bool {
        if self.is_deleted() {
            return false;
        }
        self.deleted_at = Some(at);
        true
    }
}

//! Response views produced by the task service.

use crate::task::domain::{Task, TaskId};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Response returned after a task is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatedTask {
    /// Identifier assigned by the store.
    pub id: TaskId,
}

/// Task joined with its status name, timestamps rendered as RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Name of the task's status.
    pub status_name: String,
    /// Due date.
    pub date: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Deletion timestamp; omitted for active tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl TaskView {
    /// Builds a view of `task` labelled with `status_name`.
    #[must_use]
    pub fn new(task: &Task, status_name: impl Into<String>) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status_name: status_name.into(),
            date: format_timestamp(task.due_date()),
            created_at: format_timestamp(task.created_at()),
            deleted_at: task.deleted_at().map(format_timestamp),
        }
    }
}

/// One page of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListView {
    /// Number of tasks in this page.
    pub total: usize,
    /// Tasks ordered by identifier.
    pub tasks: Vec<TaskView>,
}

impl From<Vec<TaskView>> for TaskListView {
    fn from(tasks: Vec<TaskView>) -> Self {
        Self {
            total: tasks.len(),
            tasks,
        }
    }
}

fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

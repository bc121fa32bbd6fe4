//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records, in table column order.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Referenced status.
    pub status_id: i64,
    /// Due date.
    pub date: DateTime<Utc>,
    /// Soft-deletion flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Referenced status.
    pub status_id: i64,
    /// Due date.
    pub date: DateTime<Utc>,
    /// Soft-deletion flag, always `false` on insert.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

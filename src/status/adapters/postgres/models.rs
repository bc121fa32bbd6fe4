//! Diesel row models for status persistence.

use super::schema::statuses;
use diesel::prelude::*;

/// Query result row for status records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StatusRow {
    /// Status identifier.
    pub id: i64,
    /// Normalised status name.
    pub name: String,
}

/// Insert model for status records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = statuses)]
pub struct NewStatusRow {
    /// Normalised status name.
    pub name: String,
}

//! Listing query construction for active tasks.

use super::schema::tasks;
use crate::task::domain::TaskQuery;
use diesel::pg::Pg;
use diesel::prelude::*;

/// Builds the listing statement for `query`.
///
/// Clauses are appended in a fixed order (deleted flag, status, due day,
/// cursor) so the rendered SQL and its bind positions are stable.
pub(crate) fn active_tasks_query(query: &TaskQuery) -> tasks::BoxedQuery<'static, Pg> {
    let mut statement = tasks::table.into_boxed().filter(tasks::deleted.eq(false));

    if let Some(status_id) = query.status_id() {
        statement = statement.filter(tasks::status_id.eq(status_id.value()));
    }
    if let Some(day) = query.due_day() {
        statement = statement.filter(tasks::date.between(day.start(), day.end()));
    }

    statement = statement
        .filter(tasks::id.gt(query.after_id()))
        .order(tasks::id.asc());

    if let Some(limit) = query.limit() {
        statement = statement.limit(limit);
    }
    statement
}

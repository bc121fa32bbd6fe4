//! `PostgreSQL` adapters for task persistence.

mod models;
mod query;
mod repository;
mod schema;

#[cfg(test)]
pub(crate) use query::active_tasks_query;
pub use repository::PostgresTaskRepository;

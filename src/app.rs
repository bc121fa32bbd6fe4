//! Wiring of the PostgreSQL-backed services.

use crate::db::{PgPool, build_pool};
use crate::settings::Settings;
use crate::status::{adapters::postgres::PostgresStatusRepository, services::StatusService};
use crate::task::{adapters::postgres::PostgresTaskRepository, services::TaskService};
use diesel::r2d2::PoolError;
use mockable::DefaultClock;
use std::sync::Arc;

/// Task service over `PostgreSQL` with the system clock.
pub type PgTaskService = TaskService<PostgresTaskRepository, PostgresStatusRepository, DefaultClock>;

/// Status service over `PostgreSQL`.
pub type PgStatusService = StatusService<PostgresStatusRepository>;

/// Both services sharing one connection pool.
#[derive(Clone)]
pub struct TaskTracker {
    statuses: PgStatusService,
    tasks: PgTaskService,
}

impl TaskTracker {
    /// Wires the services onto an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        let status_repository = Arc::new(PostgresStatusRepository::new(pool.clone()));
        let task_repository = Arc::new(PostgresTaskRepository::new(pool));
        Self {
            statuses: StatusService::new(Arc::clone(&status_repository)),
            tasks: TaskService::new(task_repository, status_repository, Arc::new(DefaultClock)),
        }
    }

    /// Opens a pool from `settings` and wires the services onto it.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] when the database is unreachable.
    pub fn connect(settings: &Settings) -> Result<Self, PoolError> {
        let pool = build_pool(&settings.database)?;
        tracing::info!(
            max_connections = settings.database.max_connections,
            "database pool ready"
        );
        Ok(Self::from_pool(pool))
    }

    /// Returns the status service.
    #[must_use]
    pub const fn statuses(&self) -> &PgStatusService {
        &self.statuses
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &PgTaskService {
        &self.tasks
    }
}

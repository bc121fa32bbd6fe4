//! Shared helpers for `PostgreSQL` integration tests.

use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use tasktrack::app::TaskTracker;
use tasktrack::db::PgPool;
use tasktrack::status::{
    adapters::postgres::PostgresStatusRepository,
    domain::{StatusId, StatusName},
    ports::StatusRepository,
};
use tasktrack::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{NewTask, TaskDescription, TaskId, TaskTitle},
    ports::TaskRepository,
};
use tokio::runtime::Runtime;
use uuid::Uuid;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// SQL creating the `statuses` table.
pub const CREATE_STATUSES_SQL: &str =
    include_str!("../../migrations/2024-01-01-000000_create_statuses/up.sql");

/// SQL creating the `tasks` table and its listing index.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2024-01-01-000001_create_tasks/up.sql");

/// Template database name for pre-migrated schema.
pub const TEMPLATE_DB: &str = "tasktrack_test_template";

/// Due date comfortably after the system clock.
pub const FUTURE: &str = "2099-01-01T00:00:00Z";

/// Creates a tokio runtime for async operations in tests.
pub fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Ensures the template database exists with the schema applied.
pub fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(CREATE_STATUSES_SQL)
                .map_err(|e| eyre::eyre!("SQL error: {e}"))?;
            conn.batch_execute(CREATE_TASKS_SQL)
                .map_err(|e| eyre::eyre!("SQL error: {e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Drops the test database when the test ends, even on panic.
pub struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(&*self.db_name) {
            eprintln!("Warning: failed to drop test database {}: {e}", self.db_name);
        }
    }
}

/// Repositories and services bound to one freshly migrated database.
///
/// Field order matters: the pool handles drop before the guard drops the
/// database.
pub struct PgContext {
    /// Runtime driving the async repository calls.
    pub runtime: Runtime,
    /// Both services wired onto the database pool.
    pub tracker: TaskTracker,
    /// Direct access to the status store.
    pub statuses: PostgresStatusRepository,
    /// Direct access to the task store.
    pub tasks: PostgresTaskRepository,
    _database: CleanupGuard,
}

/// Creates a database from the template and wires repositories onto it.
pub fn pg_context(cluster: &'static TestCluster, label: &str) -> Result<PgContext, BoxError> {
    ensure_template(cluster)?;
    let db_name = format!("{label}_{}", Uuid::new_v4());
    cluster
        .create_database_from_template(&*db_name, TEMPLATE_DB)
        .map_err(|e| Box::new(e) as BoxError)?;
    let guard = CleanupGuard {
        cluster,
        db_name: db_name.clone(),
    };

    let url = cluster.connection().database_url(&db_name);
    let manager = ConnectionManager::<PgConnection>::new(url);
    // Use pool size of 1 for test isolation and deterministic behaviour
    let pool: PgPool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| Box::new(e) as BoxError)?;

    Ok(PgContext {
        runtime: test_runtime(),
        tracker: TaskTracker::from_pool(pool.clone()),
        statuses: PostgresStatusRepository::new(pool.clone()),
        tasks: PostgresTaskRepository::new(pool),
        _database: guard,
    })
}

/// Parses an RFC 3339 literal used by the tests.
pub fn instant(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid test timestamp")
        .with_timezone(&Utc)
}

impl PgContext {
    /// Inserts a status straight into the store.
    pub fn status(&self, name: &str) -> StatusId {
        let status_name = StatusName::new(name).expect("valid status name");
        self.runtime
            .block_on(self.statuses.create(&status_name))
            .expect("status insert")
    }

    /// Inserts an active task straight into the store.
    pub fn task(&self, title: &str, status_id: StatusId, due: &str) -> TaskId {
        let draft = NewTask::new(
            TaskTitle::new(title).expect("valid title"),
            TaskDescription::new("details").expect("valid description"),
            status_id,
            instant(due),
            &DefaultClock,
        );
        self.runtime
            .block_on(self.tasks.create(&draft))
            .expect("task insert")
    }
}

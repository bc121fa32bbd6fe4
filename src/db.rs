//! `PostgreSQL` connection pooling.

use crate::settings::DatabaseSettings;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PoolError};
use secrecy::ExposeSecret;
use std::time::Duration;

/// `PostgreSQL` connection pool shared by the status and task adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Applies `statement_timeout` to every connection the pool opens.
///
/// Diesel calls run on blocking threads that outlive a dropped request
/// future; the server-side timeout bounds how long such a statement runs.
#[derive(Debug, Clone, Copy)]
struct StatementTimeout {
    millis: u64,
}

impl CustomizeConnection<PgConnection, r2d2::Error> for StatementTimeout {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), r2d2::Error> {
        diesel::sql_query(format!("SET statement_timeout = {}", self.millis))
            .execute(connection)
            .map(|_| ())
            .map_err(r2d2::Error::QueryError)
    }
}

/// Builds a connection pool from `settings`.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connections cannot be opened
/// within the configured timeout.
pub fn build_pool(settings: &DatabaseSettings) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(settings.url.expose_secret());
    Pool::builder()
        .max_size(settings.max_connections)
        .min_idle(settings.min_idle)
        .connection_timeout(Duration::from_secs(settings.connection_timeout_secs))
        .connection_customizer(Box::new(StatementTimeout {
            millis: settings.statement_timeout_ms,
        }))
        .build(manager)
}

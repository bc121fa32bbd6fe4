//! `PostgreSQL` repository implementation for status storage.

use super::{
    models::{NewStatusRow, StatusRow},
    schema::statuses,
};
use crate::db::PgPool;
use crate::status::{
    domain::{Status, StatusId, StatusName},
    ports::{StatusRepository, StatusRepositoryError, StatusRepositoryResult, repository::NAME_COLUMN},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Unique constraint created by `name VARCHAR(36) UNIQUE`.
const NAME_UNIQUE_CONSTRAINT: &str = "statuses_name_key";

/// `PostgreSQL`-backed status repository.
#[derive(Debug, Clone)]
pub struct PostgresStatusRepository {
    pool: PgPool,
}

impl PostgresStatusRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> StatusRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StatusRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(StatusRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(StatusRepositoryError::persistence)?
    }
}

#[async_trait]
impl StatusRepository for PostgresStatusRepository {
    async fn create(&self, name: &StatusName) -> StatusRepositoryResult<StatusId> {
        let new_row = NewStatusRow {
            name: name.as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let id = diesel::insert_into(statuses::table)
                .values(&new_row)
                .returning(statuses::id)
                .get_result::<i64>(connection)
                .map_err(classify_insert_error)?;
            Ok(StatusId::new(id))
        })
        .await
    }

    async fn find_by_name(&self, name: &StatusName) -> StatusRepositoryResult<Option<Status>> {
        let lookup_name = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = statuses::table
                .filter(statuses::name.eq(&lookup_name))
                .select(StatusRow::as_select())
                .first::<StatusRow>(connection)
                .optional()
                .map_err(StatusRepositoryError::persistence)?;
            row.map(row_to_status).transpose()
        })
        .await
    }

    async fn find_by_id(&self, id: StatusId) -> StatusRepositoryResult<Option<Status>> {
        self.run_blocking(move |connection| {
            let row = statuses::table
                .filter(statuses::id.eq(id.value()))
                .select(StatusRow::as_select())
                .first::<StatusRow>(connection)
                .optional()
                .map_err(StatusRepositoryError::persistence)?;
            row.map(row_to_status).transpose()
        })
        .await
    }

    async fn list_all(&self) -> StatusRepositoryResult<Vec<Status>> {
        self.run_blocking(move |connection| {
            let rows = statuses::table
                .select(StatusRow::as_select())
                .order(statuses::id.asc())
                .load::<StatusRow>(connection)
                .map_err(StatusRepositoryError::persistence)?;
            rows.into_iter().map(row_to_status).collect()
        })
        .await
    }
}

fn row_to_status(row: StatusRow) -> StatusRepositoryResult<Status> {
    let StatusRow { id, name } = row;
    let parsed_name = StatusName::new(&name).map_err(StatusRepositoryError::invalid_persisted_data)?;
    Ok(Status::new(StatusId::new(id), parsed_name))
}

/// Maps insert failures, classifying unique violations by column.
fn classify_insert_error(err: DieselError) -> StatusRepositoryError {
    let column = match &err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            unique_violation_column(info.as_ref())
        }
        _ => None,
    };
    column.map_or_else(
        || StatusRepositoryError::persistence(err),
        StatusRepositoryError::constraint_violation,
    )
}

fn unique_violation_column(info: &dyn DatabaseErrorInformation) -> Option<String> {
    info.column_name().map(str::to_owned).or_else(|| {
        info.constraint_name()
            .is_some_and(|name| name == NAME_UNIQUE_CONSTRAINT)
            .then(|| NAME_COLUMN.to_owned())
    })
}

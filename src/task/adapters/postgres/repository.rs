//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    query::active_tasks_query,
    schema::tasks,
};
use crate::db::PgPool;
use crate::status::domain::StatusId;
use crate::task::{
    domain::{
        NewTask, PersistedTaskData, Task, TaskDescription, TaskId, TaskPatch, TaskQuery,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text, Timestamptz};

/// Merges the non-null parameters into an active row in one statement.
const UPDATE_ACTIVE_SQL: &str = concat!(
    "UPDATE tasks SET ",
    "title = COALESCE($1, title), ",
    "description = COALESCE($2, description), ",
    "status_id = COALESCE($3, status_id), ",
    "\"date\" = COALESCE($4, \"date\") ",
    "WHERE id = $5 AND deleted = FALSE",
);

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            let id = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(tasks::id)
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            TaskId::new(id).map_err(TaskRepositoryError::invalid_persisted_data)
        })
        .await
    }

    async fn find_active_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .filter(tasks::deleted.eq(false))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_active(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let statement = active_tasks_query(query);
        self.run_blocking(move |connection| {
            let rows = statement
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update_active(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()> {
        let title = patch.title().map(|title| title.as_str().to_owned());
        let description = patch
            .description()
            .map(|description| description.as_str().to_owned());
        let status_id = patch.status_id().map(StatusId::value);
        let due_date = patch.due_date();

        self.run_blocking(move |connection| {
            let affected = diesel::sql_query(UPDATE_ACTIVE_SQL)
                .bind::<Nullable<Text>, _>(title)
                .bind::<Nullable<Text>, _>(description)
                .bind::<Nullable<BigInt>, _>(status_id)
                .bind::<Nullable<Timestamptz>, _>(due_date)
                .bind::<BigInt, _>(id.value())
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            require_affected(affected, id)
        })
        .await
    }

    async fn soft_delete(
        &self,
        id: TaskId,
        deleted_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(id.value()))
                    .filter(tasks::deleted.eq(false)),
            )
            .set((
                tasks::deleted.eq(true),
                tasks::deleted_at.eq(Some(deleted_at)),
            ))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            require_affected(affected, id)
        })
        .await
    }
}

const fn require_affected(affected: usize, id: TaskId) -> TaskRepositoryResult<()> {
    if affected == 0 {
        return Err(TaskRepositoryError::NotFound(id));
    }
    Ok(())
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        status_id: task.status_id().value(),
        date: task.due_date(),
        deleted: false,
        created_at: task.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status_id,
        date,
        created_at,
        deleted_at,
        ..
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::invalid_persisted_data)?,
        title: TaskTitle::new(&title).map_err(TaskRepositoryError::invalid_persisted_data)?,
        description: TaskDescription::new(&description)
            .map_err(TaskRepositoryError::invalid_persisted_data)?,
        status_id: StatusId::new(status_id),
        due_date: date,
        created_at,
        deleted_at,
    };
    Ok(Task::from_persisted(data))
}

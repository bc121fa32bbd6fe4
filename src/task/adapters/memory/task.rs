//! In-memory repository for task tests and embedders.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch, TaskQuery},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Deleted tasks are retained with their deletion timestamp and filtered
/// out of every read. Each mutation checks and writes under one write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskState {
    fn active_mut(&mut self, id: TaskId) -> TaskRepositoryResult<&mut Task> {
        self.tasks
            .get_mut(&id)
            .filter(|task| !task.is_deleted())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn matches_query(task: &Task, query: &TaskQuery) -> bool {
    !task.is_deleted()
        && query
            .status_id()
            .is_none_or(|status_id| task.status_id() == status_id)
        && query
            .due_day()
            .is_none_or(|day| day.contains(task.due_date()))
        && task.id().value() > query.after_id()
}

/// Page cap as an iterator bound; a cap wider than `usize` is unbounded.
fn page_size(limit: Option<i64>) -> usize {
    limit.map_or(usize::MAX, |limit| {
        usize::try_from(limit).unwrap_or(usize::MAX)
    })
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write()?;
        let next_id = state.last_id + 1;
        let id = TaskId::new(next_id).map_err(TaskRepositoryError::persistence)?;
        state.last_id = next_id;
        state.tasks.insert(id, Task::from_new(id, task.clone()));
        Ok(id)
    }

    async fn find_active_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .get(&id)
            .filter(|task| !task.is_deleted())
            .cloned())
    }

    async fn list_active(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let limit = page_size(query.limit());
        Ok(state
            .tasks
            .values()
            .filter(|task| matches_query(task, query))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update_active(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state.active_mut(id)?.apply(patch);
        Ok(())
    }

    async fn soft_delete(
        &self,
        id: TaskId,
        deleted_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.active_mut(id)?.mark_deleted(deleted_at) {
            Ok(())
        } else {
            Err(TaskRepositoryError::NotFound(id))
        }
    }
}

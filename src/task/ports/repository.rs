//! Repository port for task persistence, querying, and soft deletion.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch, TaskQuery};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every read and mutation except [`TaskRepository::create`] only sees
/// active (non-deleted) tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new active task and returns its generated identifier.
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId>;

    /// Finds an active task by identifier.
    ///
    /// Returns `None` when the task does not exist or has been deleted.
    async fn find_active_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Lists active tasks matching `query`, ordered by identifier ascending.
    async fn list_active(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>>;

    /// Overwrites the fields present in `patch` on an active task.
    ///
    /// An empty patch changes nothing but still requires an active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no active task has the
    /// identifier.
    async fn update_active(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()>;

    /// Marks an active task deleted at `deleted_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no active task has the
    /// identifier, including when it was already deleted.
    async fn soft_delete(&self, id: TaskId, deleted_at: DateTime<Utc>)
    -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No active task has the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

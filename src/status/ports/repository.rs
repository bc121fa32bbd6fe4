//! Repository port for status persistence and lookup.

use crate::status::domain::{Status, StatusId, StatusName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Column reported when a status name collides with an existing one.
pub const NAME_COLUMN: &str = "name";

/// Result type for status repository operations.
pub type StatusRepositoryResult<T> = Result<T, StatusRepositoryError>;

/// Status persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Stores a new status and returns its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRepositoryError::ConstraintViolation`] naming the
    /// `name` column when the name is already taken.
    async fn create(&self, name: &StatusName) -> StatusRepositoryResult<StatusId>;

    /// Finds a status by its normalised name.
    ///
    /// Returns `None` when no status has the given name.
    async fn find_by_name(&self, name: &StatusName) -> StatusRepositoryResult<Option<Status>>;

    /// Finds a status by identifier.
    ///
    /// Returns `None` when the status does not exist.
    async fn find_by_id(&self, id: StatusId) -> StatusRepositoryResult<Option<Status>>;

    /// Returns every status ordered by identifier; empty when none exist.
    async fn list_all(&self) -> StatusRepositoryResult<Vec<Status>>;
}

/// Errors returned by status repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StatusRepositoryError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated on column '{column}'")]
    ConstraintViolation {
        /// Column named by the violated constraint.
        column: String,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StatusRepositoryError {
    /// Builds a constraint violation for the given column.
    pub fn constraint_violation(column: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            column: column.into(),
        }
    }

    /// Returns `true` when the error reports a duplicate status name.
    #[must_use]
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Self::ConstraintViolation { column } if column == NAME_COLUMN)
    }

    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

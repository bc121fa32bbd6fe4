//! Error taxonomy exposed by the status and task services.
//!
//! Services are the only place raw store failures are classified. Every
//! failure reaching a caller is one of four kinds: a validation problem, a
//! missing record, a conflicting write, or an opaque internal fault. Internal
//! faults are logged with their source here and never leak details to the
//! caller.

use crate::status::domain::StatusId;
use crate::task::domain::TaskId;
use crate::validation::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Coarse classification used by transports to pick a response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or out-of-range input.
    Validation,
    /// A referenced status or task does not exist.
    NotFound,
    /// The write collides with existing data.
    Conflict,
    /// Unanticipated store failure.
    Internal,
}

/// Errors returned by service operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No status has the requested name.
    #[error("status name '{0}' is not found")]
    StatusNameNotFound(String),

    /// A task refers to a status id that does not exist.
    #[error("status id '{0}' is not found")]
    StatusIdNotFound(StatusId),

    /// The task does not exist or has been deleted.
    #[error("task with id '{0}' is not found")]
    TaskNotFound(TaskId),

    /// A status with the same name already exists.
    #[error("status name '{0}' already exists")]
    DuplicateStatusName(String),

    /// The store failed; details are logged, not returned.
    #[error("internal error")]
    Internal,
}

impl ServiceError {
    /// Logs an unclassified store failure and returns [`Self::Internal`].
    #[must_use]
    pub fn internal(operation: &'static str, err: &dyn std::error::Error) -> Self {
        tracing::error!(operation, error = %err, "store operation failed");
        Self::Internal
    }

    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::StatusNameNotFound(_) | Self::StatusIdNotFound(_) | Self::TaskNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::DuplicateStatusName(_) => ErrorKind::Conflict,
            Self::Internal => ErrorKind::Internal,
        }
    }

    /// Returns the HTTP status code a transport should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::NotFound => 400,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }

    /// Returns `true` for errors the caller can fix by changing the request.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Internal)
    }

    /// Builds the tagged body a transport serialises for this error.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Serialisable error payload: kind plus human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Error classification.
    pub kind: ErrorKind,
    /// Message safe to show to the caller.
    pub message: String,
}

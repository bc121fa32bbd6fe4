//! Service layer for status creation and listing.

use crate::error::{ServiceError, ServiceResult};
use crate::status::{
    domain::{Status, StatusId, StatusName},
    ports::StatusRepository,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request payload for creating a status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateStatusRequest {
    name: String,
}

impl CreateStatusRequest {
    /// Creates a request from a raw status name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Response returned after a status is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatedStatus {
    /// Identifier assigned by the store.
    pub id: StatusId,
}

/// Status as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    /// Status identifier.
    pub id: StatusId,
    /// Normalised status name.
    pub name: String,
}

impl From<Status> for StatusView {
    fn from(status: Status) -> Self {
        Self {
            id: status.id(),
            name: status.name().as_str().to_owned(),
        }
    }
}

/// Status creation and listing service.
#[derive(Clone)]
pub struct StatusService<R>
where
    R: StatusRepository,
{
    repository: Arc<R>,
}

impl<R> StatusService<R>
where
    R: StatusRepository,
{
    /// Creates a new status service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a status after trimming and lowercasing its name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for blank or over-long names,
    /// [`ServiceError::DuplicateStatusName`] when the name already exists, or
    /// [`ServiceError::Internal`] for any other store failure.
    pub async fn create_status(
        &self,
        request: CreateStatusRequest,
    ) -> ServiceResult<CreatedStatus> {
        let name = StatusName::new(&request.name)?;

        match self.repository.create(&name).await {
            Ok(id) => {
                tracing::info!(status_id = %id, status_name = %name, "status created");
                Ok(CreatedStatus { id })
            }
            Err(err) if err.is_duplicate_name() => {
                tracing::debug!(status_name = %name, "status name already taken");
                Err(ServiceError::DuplicateStatusName(name.into_inner()))
            }
            Err(err) => Err(ServiceError::internal("create status", &err)),
        }
    }

    /// Returns every status ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Internal`] when the store fails.
    pub async fn list_statuses(&self) -> ServiceResult<Vec<StatusView>> {
        let statuses = self
            .repository
            .list_all()
            .await
            .map_err(|err| ServiceError::internal("list statuses", &err))?;
        Ok(statuses.into_iter().map(StatusView::from).collect())
    }
}

//! In-memory repository for status tests and embedders.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::status::{
    domain::{Status, StatusId, StatusName},
    ports::{StatusRepository, StatusRepositoryError, StatusRepositoryResult, repository::NAME_COLUMN},
};

/// Thread-safe in-memory status repository.
///
/// Identifiers are assigned sequentially from 1, mirroring a `BIGSERIAL`
/// column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusRepository {
    state: Arc<RwLock<InMemoryStatusState>>,
}

#[derive(Debug, Default)]
struct InMemoryStatusState {
    statuses: BTreeMap<StatusId, Status>,
    name_index: HashMap<StatusName, StatusId>,
    last_id: i64,
}

impl InMemoryStatusRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StatusRepositoryResult<RwLockReadGuard<'_, InMemoryStatusState>> {
        self.state.read().map_err(|err| {
            StatusRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> StatusRepositoryResult<RwLockWriteGuard<'_, InMemoryStatusState>> {
        self.state.write().map_err(|err| {
            StatusRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl StatusRepository for InMemoryStatusRepository {
    async fn create(&self, name: &StatusName) -> StatusRepositoryResult<StatusId> {
        let mut state = self.write()?;
        if state.name_index.contains_key(name) {
            return Err(StatusRepositoryError::constraint_violation(NAME_COLUMN));
        }

        state.last_id += 1;
        let id = StatusId::new(state.last_id);
        state.name_index.insert(name.clone(), id);
        state.statuses.insert(id, Status::new(id, name.clone()));
        Ok(id)
    }

    async fn find_by_name(&self, name: &StatusName) -> StatusRepositoryResult<Option<Status>> {
        let state = self.read()?;
        let status = state
            .name_index
            .get(name)
            .and_then(|id| state.statuses.get(id))
            .cloned();
        Ok(status)
    }

    async fn find_by_id(&self, id: StatusId) -> StatusRepositoryResult<Option<Status>> {
        let state = self.read()?;
        Ok(state.statuses.get(&id).cloned())
    }

    async fn list_all(&self) -> StatusRepositoryResult<Vec<Status>> {
        let state = self.read()?;
        Ok(state.statuses.values().cloned().collect())
    }
}

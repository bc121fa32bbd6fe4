//! Persisted status entity.

use super::{StatusId, StatusName};
use serde::{Deserialize, Serialize};

/// A named task state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    id: StatusId,
    name: StatusName,
}

impl Status {
    /// Reconstructs a status from its persisted parts.
    #[must_use]
    pub const fn new(id: StatusId, name: StatusName) -> Self {
        Self { id, name }
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.id
    }

    /// Returns the status name.
    #[must_use]
    pub const fn name(&self) -> &StatusName {
        &self.name
    }
}

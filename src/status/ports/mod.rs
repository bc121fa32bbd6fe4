//! Port contracts for status persistence.

pub mod repository;

#[cfg(test)]
pub use repository::MockStatusRepository;
pub use repository::{StatusRepository, StatusRepositoryError, StatusRepositoryResult};

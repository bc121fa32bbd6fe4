//! Task query and mutation engine.
//!
//! Creates tasks against existing statuses, fetches and lists active tasks
//! with status filtering and cursor pagination, applies partial updates, and
//! soft-deletes tasks. Deleted tasks stay in storage but are invisible to
//! every read and mutation. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

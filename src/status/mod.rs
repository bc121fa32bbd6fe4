//! Named task states.
//!
//! Statuses are created explicitly and never change afterwards; tasks refer
//! to them by identifier. The module follows the same hexagonal layout as
//! [`crate::task`]:
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

//! Tasktrack: a task and status tracking engine.
//!
//! The engine validates raw request values, resolves status names, and
//! stores tasks with soft deletion and cursor pagination. Callers such as an
//! HTTP layer hand it unvalidated strings and receive serialisable views or a
//! classified [`error::ServiceError`].
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Orchestration and error classification
//!
//! # Modules
//!
//! - [`status`]: Named task states
//! - [`task`]: Task creation, querying, partial update, and soft deletion
//! - [`validation`]: Raw input parsing shared by both services
//! - [`error`]: Error taxonomy returned by services
//! - [`settings`], [`telemetry`], [`db`], [`app`]: Configuration, logging,
//!   connection pooling, and wiring

pub mod app;
pub mod db;
pub mod error;
pub mod settings;
pub mod status;
pub mod task;
pub mod telemetry;
pub mod validation;

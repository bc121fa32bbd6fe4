//! Domain model for tasks.
//!
//! A task moves through two states only: active, then deleted. The types
//! here separate a validated draft ([`NewTask`]) from a persisted record
//! ([`Task`]) and describe partial updates ([`TaskPatch`]) and listing
//! criteria ([`TaskQuery`]) without touching infrastructure.

mod fields;
mod ids;
mod patch;
mod query;
mod task;

pub use fields::{TaskDescription, TaskTitle};
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use query::{DayRange, TaskQuery};
pub use task::{NewTask, PersistedTaskData, Task};

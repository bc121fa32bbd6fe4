//! Domain model for task statuses.

mod ids;
mod name;
mod status;

pub use ids::StatusId;
pub use name::StatusName;
pub use status::Status;

//! Application services for status management.

mod registry;

pub use registry::{CreateStatusRequest, CreatedStatus, StatusService, StatusView};

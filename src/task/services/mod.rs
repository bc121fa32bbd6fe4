//! Application services for task orchestration.

mod requests;
mod tracker;
mod views;

pub use requests::{CreateTaskRequest, ListTasksRequest, UpdateTaskRequest};
pub use tracker::TaskService;
pub use views::{CreatedTask, TaskListView, TaskView};

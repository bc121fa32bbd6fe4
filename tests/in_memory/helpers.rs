//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use tasktrack::status::{
    adapters::memory::InMemoryStatusRepository,
    services::{CreateStatusRequest, StatusService},
};
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    services::{CreateTaskRequest, TaskService},
};

/// Clock frozen at 2030-06-15T12:00:00Z.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Task service over in-memory stores.
pub type MemoryTaskService =
    TaskService<InMemoryTaskRepository, InMemoryStatusRepository, FixedClock>;

/// Status and task services sharing one status store.
pub struct Services {
    /// Status service.
    pub statuses: StatusService<InMemoryStatusRepository>,
    /// Task service.
    pub tasks: MemoryTaskService,
}

/// Due date comfortably after the fixed clock.
pub const FUTURE: &str = "2099-01-01T00:00:00Z";

/// Returns the instant the fixed clock reports.
///
/// # Panics
///
/// Never panics for the hard-coded instant.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0)
        .single()
        .expect("valid fixed instant")
}

/// Fresh services over empty stores.
#[fixture]
pub fn services() -> Services {
    let status_repository = Arc::new(InMemoryStatusRepository::new());
    Services {
        statuses: StatusService::new(Arc::clone(&status_repository)),
        tasks: TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            status_repository,
            Arc::new(FixedClock(fixed_now())),
        ),
    }
}

impl Services {
    /// Creates a status.
    ///
    /// # Errors
    ///
    /// Returns an error if the status service rejects the name.
    pub async fn status(&self, name: &str) -> Result<(), eyre::Report> {
        self.statuses
            .create_status(CreateStatusRequest::new(name))
            .await?;
        Ok(())
    }

    /// Creates a task due at [`FUTURE`] and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the task service rejects the request.
    pub async fn task(&self, title: &str, status: &str) -> Result<TaskId, eyre::Report> {
        let created = self
            .tasks
            .create_task(CreateTaskRequest::new(title, "details", status, FUTURE))
            .await?;
        Ok(created.id)
    }
}

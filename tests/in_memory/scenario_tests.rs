//! End-to-end flows across the status and task services.

use super::helpers::{FUTURE, Services, services};
use rstest::rstest;
use tasktrack::error::ServiceError;
use tasktrack::status::services::CreateStatusRequest;
use tasktrack::task::{
    domain::TaskId,
    services::{CreateTaskRequest, ListTasksRequest},
};
use tasktrack::validation::ValidationError;

fn id(raw: i64) -> TaskId {
    TaskId::new(raw).expect("positive id")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_status_then_task_then_fetch(services: Services) -> Result<(), eyre::Report> {
    let status = services
        .statuses
        .create_status(CreateStatusRequest::new("done"))
        .await?;
    let task = services
        .tasks
        .create_task(CreateTaskRequest::new("Test", "Test", "done", FUTURE))
        .await?;
    let view = services.tasks.get_task("1").await?;

    eyre::ensure!(status.id.value() == 1, "status id {}", status.id);
    eyre::ensure!(task.id == id(1), "task id {}", task.id);
    eyre::ensure!(view.id == id(1) && view.title == "Test", "view {view:?}");
    eyre::ensure!(view.status_name == "done", "status name {}", view.status_name);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_not_found(services: Services) -> Result<(), eyre::Report> {
    services.status("done").await?;
    services.task("Test", "done").await?;

    services.tasks.delete_task("1").await?;
    let lookup = services.tasks.get_task("1").await;

    eyre::ensure!(
        lookup == Err(ServiceError::TaskNotFound(id(1))),
        "unexpected lookup {lookup:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn past_due_date_is_rejected(services: Services) -> Result<(), eyre::Report> {
    services.status("done").await?;

    let result = services
        .tasks
        .create_task(CreateTaskRequest::new(
            "Test",
            "Test",
            "done",
            "2000-01-01T00:00:00Z",
        ))
        .await;

    eyre::ensure!(
        result.map(|created| created.id)
            == Err(ServiceError::Validation(ValidationError::OutdatedDate)),
        "expected OutdatedDate"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_pages_of_one(services: Services) -> Result<(), eyre::Report> {
    services.status("done").await?;
    services.task("First", "done").await?;
    services.task("Second", "done").await?;

    let first = services
        .tasks
        .list_tasks(ListTasksRequest::new().with_limit("1").with_last_id("0"))
        .await?;
    let second = services
        .tasks
        .list_tasks(ListTasksRequest::new().with_limit("1").with_last_id("1"))
        .await?;

    let first_ids: Vec<TaskId> = first.tasks.iter().map(|task| task.id).collect();
    let second_ids: Vec<TaskId> = second.tasks.iter().map(|task| task.id).collect();
    eyre::ensure!(first.total == 1 && first_ids == vec![id(1)], "page 1 {first:?}");
    eyre::ensure!(second.total == 1 && second_ids == vec![id(2)], "page 2 {second:?}");
    Ok(())
}

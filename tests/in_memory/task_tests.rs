//! In-memory integration tests for task creation, update, and deletion.

use super::helpers::{FUTURE, Services, services};
use rstest::rstest;
use tasktrack::error::ServiceError;
use tasktrack::task::{
    domain::TaskId,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use tasktrack::validation::ValidationError;

#[rstest]
#[case::single_char("x")]
#[case::sixty_four("y".repeat(64))]
#[case::padded(format!("   {}   ", "z".repeat(64)))]
#[tokio::test(flavor = "multi_thread")]
async fn valid_tasks_receive_positive_ids(
    services: Services,
    #[case] title: String,
) -> Result<(), eyre::Report> {
    services.status("todo").await?;

    let created = services
        .tasks
        .create_task(CreateTaskRequest::new(title, "details", "todo", FUTURE))
        .await?;

    eyre::ensure!(created.id.value() > 0, "non-positive id {}", created.id);
    Ok(())
}

#[rstest]
#[case::long_ago("2000-01-01T00:00:00Z")]
#[case::just_before_now("2030-06-15T11:59:59Z")]
#[case::offset_before_now("2030-06-15T13:59:59+02:00")]
#[tokio::test(flavor = "multi_thread")]
async fn past_due_dates_are_outdated(
    services: Services,
    #[case] date: &str,
) -> Result<(), eyre::Report> {
    services.status("todo").await?;

    let result = services
        .tasks
        .create_task(CreateTaskRequest::new("title", "details", "todo", date))
        .await;

    eyre::ensure!(
        result.map(|created| created.id)
            == Err(ServiceError::Validation(ValidationError::OutdatedDate)),
        "expected OutdatedDate for {date}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn due_date_equal_to_now_is_accepted(services: Services) -> Result<(), eyre::Report> {
    services.status("todo").await?;

    services
        .tasks
        .create_task(CreateTaskRequest::new(
            "title",
            "details",
            "todo",
            "2030-06-15T12:00:00Z",
        ))
        .await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_delete_reports_not_found(services: Services) -> Result<(), eyre::Report> {
    services.status("todo").await?;
    let id = services.task("Ephemeral", "todo").await?;

    services.tasks.delete_task(&id.to_string()).await?;
    let second = services.tasks.delete_task(&id.to_string()).await;

    eyre::ensure!(
        second == Err(ServiceError::TaskNotFound(id)),
        "unexpected second delete outcome: {second:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_update_is_an_idempotent_no_op(services: Services) -> Result<(), eyre::Report> {
    services.status("todo").await?;
    let id = services.task("Stable", "todo").await?;
    let before = services.tasks.get_task(&id.to_string()).await?;

    for _ in 0..2 {
        services
            .tasks
            .update_task(&id.to_string(), UpdateTaskRequest::new())
            .await?;
    }

    let after = services.tasks.get_task(&id.to_string()).await?;
    eyre::ensure!(after == before, "task changed: {before:?} -> {after:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_update_of_unknown_task_reports_not_found(services: Services) {
    let result = services
        .tasks
        .update_task("99", UpdateTaskRequest::new())
        .await;

    assert_eq!(
        result,
        Err(ServiceError::TaskNotFound(
            TaskId::new(99).expect("positive id")
        ))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_moves_a_task_between_statuses(services: Services) -> Result<(), eyre::Report> {
    services.status("todo").await?;
    services.status("done").await?;
    let id = services.task("Move me", "todo").await?;

    services
        .tasks
        .update_task(
            &id.to_string(),
            UpdateTaskRequest::new()
                .with_status_name("done")
                .with_description("  finished  "),
        )
        .await?;

    let view = services.tasks.get_task(&id.to_string()).await?;
    eyre::ensure!(view.status_name == "done", "status not updated: {view:?}");
    eyre::ensure!(view.description == "finished", "description not trimmed");
    eyre::ensure!(view.title == "Move me", "title changed unexpectedly");
    Ok(())
}

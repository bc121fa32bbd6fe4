//! Then steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, run_async};
use rstest_bdd_macros::then;
use tasktrack::error::{ErrorKind, ServiceError};

#[then("the task is created with id {id:i64}")]
fn task_created_with_id(world: &TaskTrackingWorld, id: i64) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    match result {
        Ok(created) if created.id.value() == id => Ok(()),
        other => Err(eyre::eyre!("expected task id {id}, got {other:?}")),
    }
}

#[then(r#"task {id:i64} has title "{title}" and status "{status}""#)]
fn task_has_title_and_status(
    world: &TaskTrackingWorld,
    id: i64,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let view = run_async(world.tasks.get_task(&id.to_string()))?;
    eyre::ensure!(view.title == title, "expected title {title}, got {}", view.title);
    eyre::ensure!(
        view.status_name == status,
        "expected status {status}, got {}",
        view.status_name
    );
    Ok(())
}

#[then(r#"fetching task "{id}" fails as not found"#)]
fn fetch_fails_not_found(world: &mut TaskTrackingWorld, id: String) -> Result<(), eyre::Report> {
    let result = run_async(world.tasks.get_task(&id));
    let outcome = matches!(result, Err(ServiceError::TaskNotFound(_)));
    world.last_fetch_result = Some(result);
    eyre::ensure!(outcome, "expected TaskNotFound, got {:?}", world.last_fetch_result);
    Ok(())
}

#[then(r#"task creation fails with "{message}""#)]
fn task_creation_fails_with(world: &TaskTrackingWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    match result {
        Err(err) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected error '{message}', got {other:?}")),
    }
}

#[then("the page contains only task {id:i64}")]
fn page_contains_only(world: &TaskTrackingWorld, id: i64) -> Result<(), eyre::Report> {
    let page = world
        .last_page
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result"))?;
    let ids: Vec<i64> = page.tasks.iter().map(|task| task.id.value()).collect();
    eyre::ensure!(page.total == 1, "expected total 1, got {}", page.total);
    eyre::ensure!(ids == vec![id], "expected [{id}], got {ids:?}");
    Ok(())
}

#[then("status creation fails as a conflict")]
fn status_creation_conflicts(world: &TaskTrackingWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_status_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status result"))?;
    match result {
        Err(err) if err.kind() == ErrorKind::Conflict => Ok(()),
        other => Err(eyre::eyre!("expected a conflict, got {other:?}")),
    }
}

//! Given steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::status::services::CreateStatusRequest;
use tasktrack::task::services::CreateTaskRequest;

#[given(r#"a status named "{name}""#)]
fn status_named(world: &mut TaskTrackingWorld, name: String) -> Result<(), eyre::Report> {
    run_async(world.statuses.create_status(CreateStatusRequest::new(name)))
        .wrap_err("create status for scenario")?;
    Ok(())
}

#[given(r#"a task titled "{title}" exists in status "{status}""#)]
fn task_exists(
    world: &mut TaskTrackingWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(title, "scenario task", status, "2099-01-01T00:00:00Z");
    run_async(world.tasks.create_task(request)).wrap_err("create task for scenario")?;
    Ok(())
}

//! Status insertion, lookup, and uniqueness against `PostgreSQL`.

use crate::postgres::helpers::pg_context;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;
use tasktrack::error::ServiceError;
use tasktrack::status::{
    domain::{StatusId, StatusName},
    ports::StatusRepository,
    services::CreateStatusRequest,
};

#[rstest]
fn statuses_are_found_by_normalised_name_and_id(shared_test_cluster: &'static TestCluster) {
    let ctx = pg_context(shared_test_cluster, "status_lookup").expect("database setup");
    let todo = ctx.status("Todo");
    let done = ctx.status("done");
    let rt = &ctx.runtime;

    let by_name = rt
        .block_on(
            ctx.statuses
                .find_by_name(&StatusName::new("  TODO ").expect("valid name")),
        )
        .expect("lookup by name")
        .expect("status exists");
    let by_id = rt
        .block_on(ctx.statuses.find_by_id(done))
        .expect("lookup by id")
        .expect("status exists");
    let missing = rt
        .block_on(ctx.statuses.find_by_id(StatusId::new(done.value() + 100)))
        .expect("lookup by id");
    let all = rt.block_on(ctx.statuses.list_all()).expect("list all");

    assert_eq!(by_name.id(), todo);
    assert_eq!(by_id.name().as_str(), "done");
    assert!(missing.is_none());
    let names: Vec<_> = all.iter().map(|status| status.name().as_str()).collect();
    assert_eq!(names, vec!["todo", "done"]);
}

#[rstest]
fn duplicate_insert_violates_the_name_constraint(shared_test_cluster: &'static TestCluster) {
    let ctx = pg_context(shared_test_cluster, "status_unique").expect("database setup");
    ctx.status("review");
    let name = StatusName::new("Review").expect("valid name");

    let err = ctx
        .runtime
        .block_on(ctx.statuses.create(&name))
        .expect_err("second insert should fail");

    assert!(err.is_duplicate_name(), "unexpected error: {err}");
}

#[rstest]
fn service_reports_duplicate_status_name(shared_test_cluster: &'static TestCluster) {
    let ctx = pg_context(shared_test_cluster, "status_service").expect("database setup");
    let statuses = ctx.tracker.statuses();

    ctx.runtime
        .block_on(statuses.create_status(CreateStatusRequest::new("done")))
        .expect("first create");
    let result = ctx
        .runtime
        .block_on(statuses.create_status(CreateStatusRequest::new("  DONE ")));

    assert_eq!(
        result.map(|created| created.id),
        Err(ServiceError::DuplicateStatusName("done".to_owned()))
    );
}

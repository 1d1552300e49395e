use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn health_prints_backend_payload() {
    let mut ctx = TestContext::new();
    let _mock = ctx
        .api()
        .mock("GET", "/api/health")
        .with_status(200)
        .with_body(r#"{"status": "ok", "model": "test"}"#)
        .create();

    ctx.cli()
        .args(["health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""));
}

#[test]
fn health_failure_reports_message() {
    let mut ctx = TestContext::new();
    let _mock = ctx
        .api()
        .mock("GET", "/api/health")
        .with_status(503)
        .with_body(r#"{"status": "error", "message": "Backend health check failed"}"#)
        .create();

    ctx.cli()
        .args(["health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Backend health check failed"));
}

#[test]
fn invalid_config_file_is_reported() {
    let ctx = TestContext::new();
    ctx.write_config("[proxy]\nunknown_key = 1\n");

    ctx.cli().args(["health"]).assert().failure().stderr(predicate::str::contains("Error:"));
}

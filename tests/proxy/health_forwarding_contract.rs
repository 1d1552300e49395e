use crate::harness::ProxyUnderTest;
use mockito::Server;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn get_health(proxy: &ProxyUnderTest) -> (StatusCode, Value) {
    let response = reqwest::get(proxy.url("/api/health")).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn healthy_backend_payload_is_passed_through() {
    let mut backend = Server::new_async().await;
    let _mock = backend
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status": "healthy", "version": "1.2.0"}"#)
        .create_async()
        .await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = get_health(&proxy).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "version": "1.2.0"}));
    proxy.stop().await;
}

#[tokio::test]
async fn unhealthy_backend_keeps_status() {
    let mut backend = Server::new_async().await;
    let _mock = backend
        .mock("GET", "/health")
        .with_status(503)
        .with_body("down for maintenance")
        .create_async()
        .await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = get_health(&proxy).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"status": "error", "message": "Backend health check failed"}));
    proxy.stop().await;
}

#[tokio::test]
async fn unreachable_backend_reports_connection_failure() {
    let proxy = ProxyUnderTest::start("http://127.0.0.1:1").await;

    let (status, body) = get_health(&proxy).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"status": "error", "message": "Failed to connect to backend"}));
    proxy.stop().await;
}

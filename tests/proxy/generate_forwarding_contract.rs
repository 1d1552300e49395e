use crate::harness::ProxyUnderTest;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn post(proxy: &ProxyUnderTest, body: &str) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(proxy.url("/api/generate-prompt"))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn success_is_relayed_verbatim() {
    let mut backend = Server::new_async().await;
    let mock = backend
        .mock("POST", "/generate-prompt")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"query": "Write a poem"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"prompt": "You are a poet.", "tokens": 12}"#)
        .create_async()
        .await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = post(&proxy, r#"{"query": "Write a poem"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prompt": "You are a poet.", "tokens": 12}));
    mock.assert_async().await;
    proxy.stop().await;
}

#[tokio::test]
async fn backend_detail_becomes_error_with_same_status() {
    let mut backend = Server::new_async().await;
    let _mock = backend
        .mock("POST", "/generate-prompt")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "boom"}"#)
        .create_async()
        .await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = post(&proxy, r#"{"query": "q"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "boom"}));
    proxy.stop().await;
}

#[tokio::test]
async fn nested_error_message_is_extracted() {
    let mut backend = Server::new_async().await;
    let _mock = backend
        .mock("POST", "/generate-prompt")
        .with_status(429)
        .with_body(r#"{"error": {"message": "slow down"}}"#)
        .create_async()
        .await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = post(&proxy, r#"{"query": "q"}"#).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, json!({"error": "slow down"}));
    proxy.stop().await;
}

#[tokio::test]
async fn missing_error_field_uses_fallback_message() {
    let mut backend = Server::new_async().await;
    let _mock = backend
        .mock("POST", "/generate-prompt")
        .with_status(400)
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = post(&proxy, r#"{"query": "q"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Failed to generate prompt"}));
    proxy.stop().await;
}

#[tokio::test]
async fn unreachable_backend_is_internal_server_error() {
    let proxy = ProxyUnderTest::start("http://127.0.0.1:1").await;

    let (status, body) = post(&proxy, r#"{"query": "q"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal Server Error"}));
    proxy.stop().await;
}

#[tokio::test]
async fn invalid_request_body_is_internal_server_error() {
    let mut backend = Server::new_async().await;
    let mock = backend.mock("POST", "/generate-prompt").expect(0).create_async().await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = post(&proxy, "{not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal Server Error"}));
    mock.assert_async().await;
    proxy.stop().await;
}

#[tokio::test]
async fn unparseable_backend_error_body_is_internal_server_error() {
    let mut backend = Server::new_async().await;
    let _mock = backend
        .mock("POST", "/generate-prompt")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = post(&proxy, r#"{"query": "q"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal Server Error"}));
    proxy.stop().await;
}

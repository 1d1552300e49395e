use crate::harness::ProxyUnderTest;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn post(proxy: &ProxyUnderTest, body: Value) -> (StatusCode, Value) {
    let response =
        reqwest::Client::new().post(proxy.url("/api/reprompt")).json(&body).send().await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn refine_body_is_forwarded_unchanged() {
    let request = json!({
        "query": "Write a poem",
        "current_prompt": "A poem about the sea",
        "feedback": "Make it shorter"
    });
    let mut backend = Server::new_async().await;
    let mock = backend
        .mock("POST", "/reprompt")
        .match_body(Matcher::Json(request.clone()))
        .with_status(200)
        .with_body(r#"{"prompt": "Short poem"}"#)
        .create_async()
        .await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = post(&proxy, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prompt": "Short poem"}));
    mock.assert_async().await;
    proxy.stop().await;
}

#[tokio::test]
async fn refine_error_uses_refine_fallback() {
    let mut backend = Server::new_async().await;
    let _mock =
        backend.mock("POST", "/reprompt").with_status(500).with_body("{}").create_async().await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = post(&proxy, json!({"query": "q"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to refine prompt"}));
    proxy.stop().await;
}

#[tokio::test]
async fn refine_prefers_detail_over_message() {
    let mut backend = Server::new_async().await;
    let _mock = backend
        .mock("POST", "/reprompt")
        .with_status(422)
        .with_body(r#"{"message": "generic", "detail": "feedback is required"}"#)
        .create_async()
        .await;
    let proxy = ProxyUnderTest::start(&backend.url()).await;

    let (status, body) = post(&proxy, json!({"query": "q"})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"error": "feedback is required"}));
    proxy.stop().await;
}

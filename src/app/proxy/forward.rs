//! Backend forwarding shared by every proxy endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

use crate::domain::Endpoint;
use crate::domain::api_error::extract_error_message;

/// Failure of a forwarded request, independent of how an endpoint renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    /// The backend answered with a non-success status.
    Backend { status: StatusCode, message: String },
    /// The request could not be read, sent, or its answer could not be parsed.
    Transport(String),
}

pub type ProxyResult = Result<Value, ProxyError>;

/// Shared state for proxy handlers.
#[derive(Debug, Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: Arc<Url>,
}

impl ProxyState {
    pub fn new(backend_url: Url) -> Self {
        Self { client: reqwest::Client::new(), backend_url: Arc::new(backend_url) }
    }

    pub fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    /// Forward a JSON body verbatim to the backend route of `endpoint`.
    pub async fn forward_post(&self, endpoint: Endpoint, body: &Value) -> ProxyResult {
        let url = endpoint.url_on(self.backend_url.as_str());
        let started = Instant::now();

        let sent =
            self.client.post(&url).header(CONTENT_TYPE, "application/json").json(body).send().await;

        let result = match sent {
            Ok(response) => relay(endpoint, response).await,
            Err(e) => Err(ProxyError::Transport(format!("request to {} failed: {}", url, e))),
        };
        log_result(endpoint, &url, started, &result);
        result
    }

    /// Forward a GET to the backend route of `endpoint`.
    pub async fn forward_get(&self, endpoint: Endpoint) -> ProxyResult {
        let url = endpoint.url_on(self.backend_url.as_str());
        let started = Instant::now();

        let result = match self.client.get(&url).send().await {
            Ok(response) => relay(endpoint, response).await,
            Err(e) => Err(ProxyError::Transport(format!("request to {} failed: {}", url, e))),
        };
        log_result(endpoint, &url, started, &result);
        result
    }
}

async fn relay(endpoint: Endpoint, response: reqwest::Response) -> ProxyResult {
    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_success() {
        return response
            .json::<Value>()
            .await
            .map_err(|e| ProxyError::Transport(format!("invalid backend response: {}", e)));
    }

    // Health failures report a fixed message; the body is not inspected.
    if endpoint == Endpoint::Health {
        return Err(ProxyError::Backend { status, message: endpoint.fallback_message().into() });
    }

    let body = response
        .json::<Value>()
        .await
        .map_err(|e| ProxyError::Transport(format!("invalid backend error body: {}", e)))?;
    let message =
        extract_error_message(&body).unwrap_or_else(|| endpoint.fallback_message().to_string());

    Err(ProxyError::Backend { status, message })
}

fn log_result(endpoint: Endpoint, url: &str, started: Instant, result: &ProxyResult) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(_) => tracing::info!(endpoint = endpoint.path(), url, elapsed_ms, "forwarded"),
        Err(ProxyError::Backend { status, message }) => tracing::warn!(
            endpoint = endpoint.path(),
            url,
            elapsed_ms,
            status = status.as_u16(),
            "backend rejected request: {}",
            message
        ),
        Err(ProxyError::Transport(details)) => {
            tracing::error!(endpoint = endpoint.path(), url, elapsed_ms, "{}", details)
        }
    }
}

//! Rendering of forwarded results into client-facing responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::forward::{ProxyError, ProxyResult};
use crate::domain::Endpoint;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";
pub const HEALTH_UNREACHABLE_MESSAGE: &str = "Failed to connect to backend";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthErrorBody {
    status: &'static str,
    message: String,
}

/// Render `result` for `endpoint`.
///
/// Prompt endpoints answer errors with `{ "error" }`; health answers with
/// `{ "status": "error", "message" }`.
pub fn render(endpoint: Endpoint, result: ProxyResult) -> Response {
    match (endpoint, result) {
        (_, Ok(payload)) => (StatusCode::OK, Json(payload)).into_response(),
        (Endpoint::Health, Err(err)) => {
            let (status, message) = match err {
                ProxyError::Backend { status, message } => (status, message),
                ProxyError::Transport(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, HEALTH_UNREACHABLE_MESSAGE.to_string())
                }
            };
            (status, Json(HealthErrorBody { status: "error", message })).into_response()
        }
        (_, Err(ProxyError::Backend { status, message })) => {
            (status, Json(ErrorBody { error: message })).into_response()
        }
        (_, Err(ProxyError::Transport(_))) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: INTERNAL_SERVER_ERROR_MESSAGE.to_string() }),
        )
            .into_response(),
    }
}

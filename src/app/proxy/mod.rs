//! Stateless HTTP proxy forwarding prompt API calls to the backend.

mod forward;
mod response;

pub use forward::{ProxyError, ProxyResult, ProxyState};
pub use response::{HEALTH_UNREACHABLE_MESSAGE, INTERNAL_SERVER_ERROR_MESSAGE, render};

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::{AppError, Endpoint, ProxyConfig};

async fn generate_prompt(State(state): State<ProxyState>, body: Bytes) -> Response {
    forward_json(&state, Endpoint::Generate, &body).await
}

async fn reprompt(State(state): State<ProxyState>, body: Bytes) -> Response {
    forward_json(&state, Endpoint::Refine, &body).await
}

async fn health(State(state): State<ProxyState>) -> Response {
    render(Endpoint::Health, state.forward_get(Endpoint::Health).await)
}

async fn forward_json(state: &ProxyState, endpoint: Endpoint, body: &[u8]) -> Response {
    let result = match serde_json::from_slice::<Value>(body) {
        Ok(payload) => state.forward_post(endpoint, &payload).await,
        Err(e) => {
            tracing::error!(endpoint = endpoint.path(), "invalid request body: {}", e);
            Err(ProxyError::Transport(format!("invalid request body: {}", e)))
        }
    };
    render(endpoint, result)
}

/// Build the proxy router with its middleware.
pub fn router(config: &ProxyConfig) -> Router {
    let state = ProxyState::new(config.backend_url.clone());

    let mut app = Router::new()
        .route(&Endpoint::Generate.proxy_route(), post(generate_prompt))
        .route(&Endpoint::Refine.proxy_route(), post(reprompt))
        .route(&Endpoint::Health.proxy_route(), get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.cors {
        tracing::info!("CORS enabled for all origins");
        let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Serve the proxy on an already-bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    config: &ProxyConfig,
    shutdown: F,
) -> Result<(), AppError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Promptology proxy listening on http://{}", addr);
    tracing::info!("Forwarding to backend {}", config.backend_url);
    for endpoint in Endpoint::ALL {
        tracing::info!("  {}", endpoint.proxy_route());
    }

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::ServerError(e.to_string()))
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &ProxyConfig) -> Result<(), AppError> {
    let listener = TcpListener::bind(config.bind_address()).await.map_err(|e| {
        AppError::ServerError(format!("Failed to bind {}: {}", config.bind_address(), e))
    })?;

    serve_with_shutdown(listener, config, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", err);
        }
        tracing::info!("Shutting down");
    })
    .await
}

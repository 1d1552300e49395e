//! Prompt API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::domain::api_error::extract_error_message;
use crate::domain::{AppError, ClientConfig, Endpoint};
use crate::ports::{PromptService, RefineRequest};

/// HTTP transport for the prompt proxy API.
///
/// This client performs a single request per call and never retries.
#[derive(Debug, Clone)]
pub struct HttpPromptClient {
    api_url: Url,
    client: Client,
}

impl HttpPromptClient {
    /// Create a new HTTP client from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| AppError::PromptApiError {
            message: format!("Failed to create HTTP client: {}", e),
            status: None,
        })?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn send(&self, endpoint: Endpoint, request: RequestBuilder) -> Result<Value, AppError> {
        let response = request.send().map_err(|e| AppError::PromptApiError {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| AppError::PromptApiError {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            });
        }

        let message = serde_json::from_str::<Value>(&body_text)
            .ok()
            .and_then(|body| extract_error_message(&body))
            .unwrap_or_else(|| endpoint.fallback_message().to_string());

        Err(AppError::PromptApiError { message, status: Some(status.as_u16()) })
    }

    fn post_for_prompt<T: Serialize>(&self, endpoint: Endpoint, body: &T) -> Result<String, AppError> {
        let request = self
            .client
            .post(endpoint.url_on(self.api_url.as_str()))
            .header(CONTENT_TYPE, "application/json")
            .json(body);

        let value = self.send(endpoint, request)?;
        let parsed: PromptResponse =
            serde_json::from_value(value).map_err(|e| AppError::PromptApiError {
                message: format!("Failed to parse response: {}", e),
                status: None,
            })?;
        Ok(parsed.prompt)
    }
}

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    query: &'a str,
}

#[derive(Debug, Serialize)]
struct RefineBody<'a> {
    query: &'a str,
    current_prompt: &'a str,
    feedback: &'a str,
}

#[derive(Debug, Deserialize)]
struct PromptResponse {
    prompt: String,
}

impl PromptService for HttpPromptClient {
    fn generate(&self, query: &str) -> Result<String, AppError> {
        self.post_for_prompt(Endpoint::Generate, &GenerateBody { query })
    }

    fn refine(&self, request: &RefineRequest) -> Result<String, AppError> {
        let body = RefineBody {
            query: &request.query,
            current_prompt: &request.current_prompt,
            feedback: &request.feedback,
        };
        self.post_for_prompt(Endpoint::Refine, &body)
    }

    fn health(&self) -> Result<Value, AppError> {
        let request = self.client.get(Endpoint::Health.url_on(self.api_url.as_str()));
        self.send(Endpoint::Health, request)
    }
}

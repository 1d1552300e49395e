//! Configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Proxy server configuration.
    #[serde(default)]
    pub proxy: ProxyConfig,
    /// Prompt client configuration.
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.proxy.validate()?;
        self.client.validate()?;
        Ok(())
    }
}

/// Proxy server configuration. Server-side only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origin of the prompt backend requests are forwarded to.
    #[serde(default = "default_backend_url")]
    pub backend_url: Url,
    /// Allow cross-origin requests from any origin.
    #[serde(default)]
    pub cors: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            backend_url: default_backend_url(),
            cors: false,
        }
    }
}

impl ProxyConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.host.trim().is_empty() {
            return Err(AppError::InvalidConfig("proxy.host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(AppError::InvalidConfig("proxy.port must be greater than 0".to_string()));
        }
        validate_http_url("proxy.backend_url", &self.backend_url)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Prompt client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the proxy API the client talks to.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Optional request timeout. No timeout is applied when absent.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Directory holding the local store. Defaults to `$HOME/.promptology`.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: None, storage_dir: None }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig(
                "client.timeout_secs must be greater than 0".to_string(),
            ));
        }
        validate_http_url("client.api_url", &self.api_url)
    }
}

fn validate_http_url(field: &str, url: &Url) -> Result<(), AppError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::InvalidConfig(format!(
            "{} must use http or https (got '{}')",
            field, other
        ))),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_backend_url() -> Url {
    Url::parse("http://localhost:8000").expect("Default backend URL must be valid")
}

fn default_api_url() -> Url {
    Url::parse("http://localhost:3000/api").expect("Default API URL must be valid")
}

//! Configuration models and pure parse/override logic.

mod model;

pub use model::{AppConfig, ClientConfig, ProxyConfig};

use url::Url;

use crate::domain::AppError;

/// Environment variable overriding `proxy.backend_url`.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
/// Environment variable overriding `client.api_url`.
pub const API_URL_ENV: &str = "PROMPTOLOGY_URL";
/// Environment variable overriding `client.storage_dir`.
pub const HOME_ENV: &str = "PROMPTOLOGY_HOME";

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Empty values are treated as unset.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(raw) = read(BACKEND_URL_ENV) {
        config.proxy.backend_url = parse_env_url(BACKEND_URL_ENV, &raw)?;
    }
    if let Some(raw) = read(API_URL_ENV) {
        config.client.api_url = parse_env_url(API_URL_ENV, &raw)?;
    }
    if let Some(raw) = read(HOME_ENV) {
        config.client.storage_dir = Some(raw.into());
    }

    config.validate()?;
    Ok(config)
}

fn parse_env_url(name: &str, raw: &str) -> Result<Url, AppError> {
    Url::parse(raw.trim())
        .map_err(|e| AppError::config_error(format!("{} is not a valid URL ({}): {}", name, raw, e)))
}

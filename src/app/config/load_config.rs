//! Configuration loading from the storage directory or an explicit path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::{self, HOME_ENV};
use crate::domain::{AppConfig, AppError};

/// Config file name looked up inside the storage directory.
pub const CONFIG_FILE: &str = "config.toml";

const STORAGE_DIR_NAME: &str = ".promptology";

/// `$PROMPTOLOGY_HOME`, or `$HOME/.promptology`.
pub fn default_storage_dir() -> Result<PathBuf, AppError> {
    if let Ok(dir) = std::env::var(HOME_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(STORAGE_DIR_NAME))
        .ok_or_else(|| AppError::config_error("Could not determine home directory"))
}

/// Load configuration from `explicit`, or from `<storage dir>/config.toml` when present,
/// then apply process environment overrides.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    load_config_from(explicit, |name| std::env::var(name).ok())
}

/// Same as [`load_config`] with an injectable environment lookup.
pub fn load_config_from<F>(explicit: Option<&Path>, lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            read_config(path)?
        }
        None => {
            let path = default_storage_dir()?.join(CONFIG_FILE);
            if path.exists() { read_config(&path)? } else { AppConfig::default() }
        }
    };

    config::apply_env_overrides(base, lookup)
}

fn read_config(path: &Path) -> Result<AppConfig, AppError> {
    tracing::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    config::parse_config_content(&content)
}

use std::path::PathBuf;

use crate::adapters::{FileLocalStore, HttpPromptClient, SystemClock};
use crate::app::config::default_storage_dir;
use crate::app::controller::PromptController;
use crate::domain::{AppConfig, AppError};

/// Controller wired to the HTTP client, the file store and the system clock.
pub type DefaultController = PromptController<HttpPromptClient, FileLocalStore, SystemClock>;

/// Application context holding resolved configuration for command execution.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: AppConfig,
    storage_dir: PathBuf,
}

impl AppContext {
    /// Create a context, resolving the storage directory from configuration or defaults.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let storage_dir = match &config.client.storage_dir {
            Some(dir) => dir.clone(),
            None => default_storage_dir()?,
        };
        Ok(Self { config, storage_dir })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn storage_dir(&self) -> &PathBuf {
        &self.storage_dir
    }

    pub fn store(&self) -> FileLocalStore {
        FileLocalStore::in_dir(&self.storage_dir)
    }

    /// Build a controller with history and theme rehydrated from the local store.
    pub fn controller(&self) -> Result<DefaultController, AppError> {
        let client = HttpPromptClient::new(&self.config.client)?;
        Ok(PromptController::new(client, self.store(), SystemClock))
    }
}

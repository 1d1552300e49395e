//! `LocalStore` backed by a JSON object file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::LocalStore;

/// File name of the store inside the storage directory.
pub const STORE_FILE: &str = "storage.json";

type Items = BTreeMap<String, String>;

/// Key-value store persisted as a single JSON object mapping keys to string values.
///
/// The file is re-read on every access so separate processes observe each other's writes.
/// Reads of a corrupt file fail; writes replace it with a fresh object.
#[derive(Debug, Clone)]
pub struct FileLocalStore {
    path: PathBuf,
}

impl FileLocalStore {
    /// Store located at `<dir>/storage.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self { path: dir.join(STORE_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self, key: &str) -> Result<Items, AppError> {
        if !self.path.exists() {
            return Ok(Items::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Items::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| AppError::storage(key, format!("{} is unreadable: {}", self.path.display(), e)))
    }

    /// Current items for a read-modify-write of `key`. A corrupt file starts over empty.
    fn read_for_update(&self, key: &str) -> Result<Items, AppError> {
        match self.read_all(key) {
            Err(AppError::StorageError { details, .. }) => {
                tracing::warn!("Discarding corrupt local store while writing '{}': {}", key, details);
                Ok(Items::new())
            }
            other => other,
        }
    }

    fn write_all(&self, key: &str, items: &Items) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(items).map_err(|e| AppError::storage(key, e))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl LocalStore for FileLocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_all(key)?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let mut items = self.read_for_update(key)?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(key, &items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), AppError> {
        let mut items = self.read_for_update(key)?;
        if items.remove(key).is_some() {
            self.write_all(key, &items)?;
        }
        Ok(())
    }
}

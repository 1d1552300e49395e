use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::LocalStore;

/// In-memory local store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocalStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with `value` under `key`.
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.lock().insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LocalStore for MemoryLocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), AppError> {
        self.lock().remove(key);
        Ok(())
    }
}

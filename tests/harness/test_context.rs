//! Shared testing harness for `promptology` CLI integration tests.

use assert_cmd::Command;
use mockito::{Server, ServerGuard};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home directory plus a mock prompt API for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    api: ServerGuard,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root, api: Server::new() }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding `storage.json` and `config.toml`.
    pub(crate) fn storage_dir(&self) -> PathBuf {
        self.home().join(".promptology")
    }

    /// Mock standing in for the proxy API.
    pub(crate) fn api(&mut self) -> &mut ServerGuard {
        &mut self.api
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/api", self.api.url())
    }

    /// Build a command for invoking the compiled `promptology` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptology").expect("Failed to locate binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env("PROMPTOLOGY_HOME", self.storage_dir())
            .env("PROMPTOLOGY_URL", self.api_url())
            .env_remove("BACKEND_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Seed `storage.json` with a raw history value.
    pub(crate) fn seed_history(&self, entries: Value) {
        let store = serde_json::json!({ "promptHistory": entries.to_string() });
        self.write_store(&store);
    }

    pub(crate) fn write_store(&self, store: &Value) {
        self.write_raw_store(&store.to_string());
    }

    pub(crate) fn write_raw_store(&self, content: &str) {
        fs::create_dir_all(self.storage_dir()).expect("Failed to create storage dir");
        fs::write(self.storage_dir().join("storage.json"), content)
            .expect("Failed to write storage.json");
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::create_dir_all(self.storage_dir()).expect("Failed to create storage dir");
        fs::write(self.storage_dir().join("config.toml"), content)
            .expect("Failed to write config.toml");
    }

    /// Raw string value stored under `key`, if any.
    pub(crate) fn stored(&self, key: &str) -> Option<String> {
        let path = self.storage_dir().join("storage.json");
        let content = fs::read_to_string(path).ok()?;
        let store: Value = serde_json::from_str(&content).expect("storage.json should be JSON");
        store.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Persisted history entries, newest first.
    pub(crate) fn stored_history(&self) -> Vec<Value> {
        self.stored("promptHistory")
            .map(|raw| serde_json::from_str(&raw).expect("history should be a JSON array"))
            .unwrap_or_default()
    }
}

use std::io;

use thiserror::Error;

/// Library-wide error type for promptology operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Prompt API request failed (proxy or backend).
    #[error("{message}")]
    PromptApiError { message: String, status: Option<u16> },

    /// A required prompt input was empty.
    #[error("{0}")]
    EmptyInput(String),

    /// A prompt request is already pending.
    #[error("Another prompt request is still pending")]
    RequestPending,

    /// Local store read or write failed.
    #[error("Storage error for key '{key}': {details}")]
    StorageError { key: String, details: String },

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// No history entry at the requested position or timestamp.
    #[error("History entry not found: {0}")]
    HistoryEntryNotFound(String),

    /// Interactive prompt failed.
    #[error("Interactive input failed: {0}")]
    InteractionError(String),

    /// Proxy server failed to start or stopped unexpectedly.
    #[error("Server error: {0}")]
    ServerError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn storage<K: Into<String>, D: ToString>(key: K, details: D) -> Self {
        AppError::StorageError { key: key.into(), details: details.to_string() }
    }

    /// HTTP status attached to a prompt API failure, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::PromptApiError { status, .. } => *status,
            _ => None,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::EmptyInput(_) => io::ErrorKind::InvalidInput,
            AppError::HistoryEntryNotFound(_) => io::ErrorKind::NotFound,
            AppError::StorageError { .. } => io::ErrorKind::InvalidData,
            AppError::PromptApiError { .. }
            | AppError::ClipboardError(_)
            | AppError::InteractionError(_)
            | AppError::ServerError(_) => io::ErrorKind::Other,
            AppError::RequestPending => io::ErrorKind::WouldBlock,
        }
    }
}

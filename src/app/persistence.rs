//! History and theme persistence on top of a `LocalStore`.

use crate::domain::{AppError, History, HistoryEntry, Theme};
use crate::ports::LocalStore;

/// Store key holding the serialized history.
pub const HISTORY_KEY: &str = "promptHistory";
/// Store key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Rehydrate the history. Unreadable or corrupt values yield an empty history.
pub fn load_history<S: LocalStore>(store: &S) -> History {
    let raw = match store.get_item(HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return History::new(),
        Err(err) => {
            tracing::warn!("Failed to read prompt history: {}", err);
            return History::new();
        }
    };

    match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
        Ok(entries) => History::from_entries(entries),
        Err(err) => {
            tracing::warn!("Error parsing prompt history: {}", err);
            History::new()
        }
    }
}

pub fn save_history<S: LocalStore>(store: &mut S, history: &History) -> Result<(), AppError> {
    let serialized =
        serde_json::to_string(history.entries()).map_err(|e| AppError::storage(HISTORY_KEY, e))?;
    store.set_item(HISTORY_KEY, &serialized)
}

pub fn remove_history<S: LocalStore>(store: &mut S) -> Result<(), AppError> {
    store.remove_item(HISTORY_KEY)
}

/// Read the theme preference, ignoring unknown values.
pub fn load_theme<S: LocalStore>(store: &S) -> Theme {
    match store.get_item(THEME_KEY) {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_default(),
        Ok(None) => Theme::default(),
        Err(err) => {
            tracing::warn!("Failed to read theme preference: {}", err);
            Theme::default()
        }
    }
}

pub fn save_theme<S: LocalStore>(store: &mut S, theme: Theme) -> Result<(), AppError> {
    store.set_item(THEME_KEY, theme.as_str())
}

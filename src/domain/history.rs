//! Bounded, newest-first prompt history.

use serde::{Deserialize, Serialize};

/// Maximum number of entries retained in the history.
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// One persisted prompt/result exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub prompt: String,
    pub result: String,
    /// Creation instant in milliseconds since the Unix epoch. Unique within a history.
    pub timestamp: i64,
    /// Display-only expansion state.
    #[serde(rename = "isExpanded", default)]
    pub expanded: bool,
}

impl HistoryEntry {
    pub fn new(prompt: impl Into<String>, result: impl Into<String>, timestamp: i64) -> Self {
        Self { prompt: prompt.into(), result: result.into(), timestamp, expanded: false }
    }
}

/// Ordered history of past exchanges, newest first, capped at [`MAX_HISTORY_ENTRIES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from rehydrated entries, enforcing the cap.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(MAX_HISTORY_ENTRIES);
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Entry at a 1-based position (1 = newest).
    pub fn at_position(&self, position: usize) -> Option<&HistoryEntry> {
        position.checked_sub(1).and_then(|index| self.entries.get(index))
    }

    pub fn find(&self, timestamp: i64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.timestamp == timestamp)
    }

    /// Prepend an entry, collapsing every existing entry and evicting beyond the cap.
    ///
    /// The entry's timestamp is bumped past the current newest entry when the clock did not
    /// advance, so each timestamp keeps addressing a single entry.
    pub fn prepend(&mut self, mut entry: HistoryEntry) -> &HistoryEntry {
        if let Some(newest) = self.entries.first()
            && entry.timestamp <= newest.timestamp
        {
            entry.timestamp = newest.timestamp + 1;
        }

        for existing in &mut self.entries {
            existing.expanded = false;
        }

        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        &self.entries[0]
    }

    /// Flip the expansion flag of the entry with `timestamp`. Returns false when absent.
    pub fn toggle_expansion(&mut self, timestamp: i64) -> bool {
        match self.entries.iter_mut().find(|entry| entry.timestamp == timestamp) {
            Some(entry) => {
                entry.expanded = !entry.expanded;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

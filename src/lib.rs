//! promptology: generate and refine LLM prompts through a thin proxy, keeping a local history.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::controller::{Outcome, PromptController};
pub use app::{AppContext, api};
pub use domain::{AppConfig, AppError, History, HistoryEntry, Theme};

//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and controller operations for one-shot callers such as the CLI.

use serde_json::Value;

use crate::app::AppContext;
use crate::app::controller::Outcome;
use crate::app::proxy;
use crate::domain::{AppError, History, HistoryEntry, Theme};
use crate::ports::{ClipboardWriter, Confirmer};

impl Outcome {
    /// Collapse a controller outcome into a `Result` for one-shot callers.
    fn into_result(self) -> Result<(), AppError> {
        match self {
            Outcome::Completed => Ok(()),
            Outcome::Failed(message) => Err(AppError::PromptApiError { message, status: None }),
            Outcome::Rejected(reason) => Err(AppError::EmptyInput(reason.to_string())),
            Outcome::Ignored => Err(AppError::RequestPending),
        }
    }
}

/// Generate a prompt for `query`, recording it in history. Returns the generated prompt.
pub fn generate(ctx: &AppContext, query: &str) -> Result<String, AppError> {
    let mut controller = ctx.controller()?;
    controller.generate(query)?.into_result()?;
    Ok(controller.session().result.clone())
}

/// Refine `current` with `feedback`, archiving the previous pair. Returns the refined prompt.
pub fn refine(
    ctx: &AppContext,
    query: &str,
    current: &str,
    feedback: &str,
) -> Result<String, AppError> {
    let mut controller = ctx.controller()?;
    controller.refine(query, current, feedback)?.into_result()?;
    Ok(controller.session().result.clone())
}

/// Persisted history, newest first.
pub fn history(ctx: &AppContext) -> Result<History, AppError> {
    Ok(ctx.controller()?.history().clone())
}

/// Entry at a 1-based position, restored as the current prompt/result.
pub fn restore(ctx: &AppContext, position: usize) -> Result<HistoryEntry, AppError> {
    ctx.controller()?.restore_position(position)
}

/// Flip the expansion flag of the entry at a 1-based position. Returns the updated entry.
pub fn toggle_entry(ctx: &AppContext, position: usize) -> Result<HistoryEntry, AppError> {
    let mut controller = ctx.controller()?;
    let timestamp = controller.entry_at(position)?.timestamp;
    controller.toggle_expansion(timestamp)?;
    controller.entry_at(position)
}

/// Copy the result of the entry at a 1-based position to the clipboard.
pub fn copy_entry(
    ctx: &AppContext,
    position: usize,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<HistoryEntry, AppError> {
    let controller = ctx.controller()?;
    let entry = controller.entry_at(position)?;
    controller.copy_entry(entry.timestamp, clipboard)?;
    Ok(entry)
}

/// Clear the history once `confirmer` agrees. Returns whether anything was cleared.
pub fn clear_history(ctx: &AppContext, confirmer: &dyn Confirmer) -> Result<bool, AppError> {
    ctx.controller()?.clear_history(confirmer)
}

pub fn theme(ctx: &AppContext) -> Result<Theme, AppError> {
    Ok(ctx.controller()?.theme())
}

pub fn toggle_theme(ctx: &AppContext) -> Result<Theme, AppError> {
    ctx.controller()?.toggle_theme()
}

/// Backend health payload as relayed by the proxy.
pub fn health(ctx: &AppContext) -> Result<Value, AppError> {
    ctx.controller()?.health()
}

/// Run the proxy server until interrupted.
pub fn serve(ctx: &AppContext) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::ServerError(format!("Failed to start runtime: {}", e)))?;
    runtime.block_on(proxy::serve(&ctx.config().proxy))
}

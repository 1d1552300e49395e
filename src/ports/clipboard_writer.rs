use crate::domain::AppError;

/// Destination for copied prompts.
///
/// Implementations may acquire the underlying clipboard on first use, so any access
/// failure surfaces from `copy_text`.
pub trait ClipboardWriter {
    fn copy_text(&mut self, text: &str) -> Result<(), AppError>;
}

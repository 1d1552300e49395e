use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard, opened on the first copy and reused afterwards.
#[derive(Default)]
pub struct ArboardClipboard {
    handle: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.handle.is_none() {
            let opened = Clipboard::new().map_err(|e| {
                AppError::ClipboardError(format!("system clipboard unavailable: {}", e))
            })?;
            self.handle = Some(opened);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| AppError::ClipboardError("system clipboard unavailable".to_string()))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), AppError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| AppError::ClipboardError(format!("copy failed: {}", e)))?;
        tracing::debug!(chars = text.chars().count(), "copied prompt to clipboard");
        Ok(())
    }
}

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// In-memory clipboard recording every copy, optionally refusing all of them.
#[derive(Debug, Default)]
pub struct MockClipboard {
    copies: Vec<String>,
    unavailable: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard that fails like a headless session without a display.
    pub fn unavailable() -> Self {
        Self { copies: Vec::new(), unavailable: true }
    }

    pub fn last_copied(&self) -> Option<&str> {
        self.copies.last().map(String::as_str)
    }

    pub fn copies(&self) -> &[String] {
        &self.copies
    }
}

impl ClipboardWriter for MockClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::ClipboardError("no display available".to_string()));
        }
        self.copies.push(text.to_string());
        Ok(())
    }
}

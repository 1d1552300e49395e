mod fake_prompt_service;
mod mock_clipboard;

pub use fake_prompt_service::{Call, FakePromptService};
pub use mock_clipboard::MockClipboard;
pub use step_clock::StepClock;
pub use unwritable_store::UnwritableStore;

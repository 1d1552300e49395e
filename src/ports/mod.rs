mod clipboard_writer;
mod clock;
mod confirmer;
mod local_store;
mod prompt_service;

pub use clipboard_writer::ClipboardWriter;
pub use clock::Clock;
pub use confirmer::{Confirmer, FixedConfirmer};
pub use local_store::LocalStore;
pub use prompt_service::{PromptService, RefineRequest};

mod clipboard_arboard;
mod dialoguer_confirmer;
pub mod file_local_store;
mod memory_local_store;
mod prompt_client_http;
mod system_clock;

pub use clipboard_arboard::ArboardClipboard;
pub use dialoguer_confirmer::DialoguerConfirmer;
pub use file_local_store::FileLocalStore;
pub use memory_local_store::MemoryLocalStore;
pub use prompt_client_http::HttpPromptClient;
pub use system_clock::SystemClock;

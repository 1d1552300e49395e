pub mod api_error;
pub mod config;
pub mod endpoint;
mod error;
pub mod history;
pub mod session;
mod theme;

pub use config::{AppConfig, ClientConfig, ProxyConfig};
pub use endpoint::Endpoint;
pub use error::AppError;
pub use history::{HistoryEntry, History, MAX_HISTORY_ENTRIES};
pub use session::{Action, ActiveView, PromptState, SessionState, Transition};
pub use theme::Theme;

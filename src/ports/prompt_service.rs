//! Prompt API port definition.

use serde_json::Value;

use crate::domain::AppError;

/// Request to refine a previously generated prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineRequest {
    /// The original user query.
    pub query: String,
    /// The prompt currently displayed.
    pub current_prompt: String,
    /// Free-text feedback on the current prompt.
    pub feedback: String,
}

/// Port for the prompt generation API.
///
/// Each call performs a single attempt; failures carry the message to show the user.
pub trait PromptService {
    /// Generate a prompt from a task description.
    fn generate(&self, query: &str) -> Result<String, AppError>;

    /// Refine a prompt using feedback.
    fn refine(&self, request: &RefineRequest) -> Result<String, AppError>;

    /// Fetch the backend health payload.
    fn health(&self) -> Result<Value, AppError>;
}

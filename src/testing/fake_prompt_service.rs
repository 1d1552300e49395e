use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::domain::AppError;
use crate::ports::{PromptService, RefineRequest};

/// A request observed by [`FakePromptService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Generate(String),
    Refine(RefineRequest),
    Health,
}

type Scripted = Arc<Mutex<VecDeque<Result<String, String>>>>;

/// Scripted prompt service recording every call it receives.
#[derive(Clone, Default)]
pub struct FakePromptService {
    calls: Arc<Mutex<Vec<Call>>>,
    generate_responses: Scripted,
    refine_responses: Scripted,
}

impl FakePromptService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response for the next generate call.
    pub fn respond_to_generate(&self, response: Result<&str, &str>) {
        self.generate_responses.lock().unwrap().push_back(owned(response));
    }

    /// Queue the response for the next refine call.
    pub fn respond_to_refine(&self, response: Result<&str, &str>) {
        self.refine_responses.lock().unwrap().push_back(owned(response));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(queue: &Scripted) -> Result<String, AppError> {
        let scripted = queue.lock().unwrap().pop_front().unwrap_or_else(|| Ok(String::new()));
        scripted.map_err(|message| AppError::PromptApiError { message, status: Some(500) })
    }
}

fn owned(response: Result<&str, &str>) -> Result<String, String> {
    response.map(str::to_string).map_err(str::to_string)
}

impl PromptService for FakePromptService {
    fn generate(&self, query: &str) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(Call::Generate(query.to_string()));
        Self::next(&self.generate_responses)
    }

    fn refine(&self, request: &RefineRequest) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(Call::Refine(request.clone()));
        Self::next(&self.refine_responses)
    }

    fn health(&self) -> Result<Value, AppError> {
        self.calls.lock().unwrap().push(Call::Health);
        Ok(json!({"status": "ok"}))
    }
}

//! Prompt controller: drives the session state machine around network and storage I/O.
//!
//! State only changes through [`reduce`]. Each networked action moves
//! Idle → Pending → (Success | Failure) → Idle within a single call.

use serde_json::Value;

use crate::app::persistence;
use crate::domain::session::reduce;
use crate::domain::{
    Action, ActiveView, AppError, History, HistoryEntry, PromptState, SessionState, Theme,
    Transition,
};
use crate::ports::{ClipboardWriter, Clock, Confirmer, LocalStore, PromptService, RefineRequest};

pub const GENERATE_FALLBACK_ERROR: &str = "An error occurred while generating the prompt";
pub const REFINE_FALLBACK_ERROR: &str = "An error occurred while refining the prompt";
pub const REFINE_MISSING_INPUT: &str =
    "Please provide your query, a generated prompt, and feedback to refine";
pub const GENERATE_MISSING_INPUT: &str = "Please describe what you want the prompt to do";
pub const CLEAR_HISTORY_CONFIRMATION: &str =
    "Are you sure you want to delete all history? This cannot be undone.";

/// Result of an action that may reach the prompt API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded and state was updated.
    Completed,
    /// The request failed; the message is now the session error.
    Failed(String),
    /// Input validation refused the action. No request was made and state is unchanged.
    Rejected(&'static str),
    /// Another request is still pending.
    Ignored,
}

pub struct PromptController<P, S, C>
where
    P: PromptService,
    S: LocalStore,
    C: Clock,
{
    service: P,
    store: S,
    clock: C,
    state: PromptState,
}

impl<P, S, C> PromptController<P, S, C>
where
    P: PromptService,
    S: LocalStore,
    C: Clock,
{
    /// Create a controller, rehydrating history and theme from `store`.
    pub fn new(service: P, store: S, clock: C) -> Self {
        let state = PromptState {
            session: SessionState::default(),
            history: persistence::load_history(&store),
            theme: persistence::load_theme(&store),
        };
        Self { service, store, clock, state }
    }

    pub fn state(&self) -> &PromptState {
        &self.state
    }

    pub fn session(&self) -> &SessionState {
        &self.state.session
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn dispatch(&mut self, action: Action) -> Result<Transition, AppError> {
        let transition = reduce(&mut self.state, action);
        self.persist(transition)?;
        Ok(transition)
    }

    /// Apply the result of a successful request. A failed history write is logged only,
    /// so the prompt the backend produced is never lost.
    fn record(&mut self, action: Action) {
        let transition = reduce(&mut self.state, action);
        if let Err(err) = self.persist(transition) {
            tracing::warn!("Failed to save prompt history: {}", err);
        }
    }

    fn persist(&mut self, transition: Transition) -> Result<(), AppError> {
        match transition {
            Transition::History if self.state.history.is_empty() => {
                persistence::remove_history(&mut self.store)
            }
            Transition::History => persistence::save_history(&mut self.store, &self.state.history),
            Transition::Theme => persistence::save_theme(&mut self.store, self.state.theme),
            Transition::Session | Transition::Ignored => Ok(()),
        }
    }

    fn apply(&mut self, action: Action) {
        let transition = reduce(&mut self.state, action);
        debug_assert!(matches!(transition, Transition::Session | Transition::Ignored));
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.apply(Action::SetPrompt(prompt.into()));
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.apply(Action::SetFeedback(feedback.into()));
    }

    pub fn set_view(&mut self, view: ActiveView) {
        self.apply(Action::SetView(view));
    }

    pub fn show_feedback_input(&mut self) {
        self.apply(Action::ShowFeedbackInput);
    }

    pub fn toggle_history_panel(&mut self) {
        self.apply(Action::ToggleHistoryPanel);
    }

    pub fn start_over(&mut self) {
        self.apply(Action::StartOver);
    }

    /// Generate a prompt for `query` and record the exchange in history.
    ///
    /// Request failures become the session error; a failed history write is only logged.
    pub fn generate(&mut self, query: &str) -> Result<Outcome, AppError> {
        if query.trim().is_empty() {
            return Ok(Outcome::Rejected(GENERATE_MISSING_INPUT));
        }
        if self.dispatch(Action::GenerateStarted)? == Transition::Ignored {
            return Ok(Outcome::Ignored);
        }
        self.apply(Action::SetPrompt(query.to_string()));

        match self.service.generate(query) {
            Ok(result) => {
                let timestamp = self.clock.now_millis();
                self.record(Action::GenerateSucceeded {
                    query: query.to_string(),
                    result,
                    timestamp,
                });
                Ok(Outcome::Completed)
            }
            Err(err) => {
                tracing::warn!("Error generating prompt: {}", err);
                let message = failure_message(&err, GENERATE_FALLBACK_ERROR);
                self.apply(Action::GenerateFailed(message.clone()));
                Ok(Outcome::Failed(message))
            }
        }
    }

    /// Generate from the session's current prompt text.
    pub fn generate_current(&mut self) -> Result<Outcome, AppError> {
        let query = self.state.session.prompt.clone();
        self.generate(&query)
    }

    /// Refine `current_result` using `feedback`, archiving the previous pair in history.
    pub fn refine(
        &mut self,
        query: &str,
        current_result: &str,
        feedback: &str,
    ) -> Result<Outcome, AppError> {
        if [query, current_result, feedback].iter().any(|value| value.trim().is_empty()) {
            return Ok(Outcome::Rejected(REFINE_MISSING_INPUT));
        }
        if self.dispatch(Action::RefineStarted)? == Transition::Ignored {
            return Ok(Outcome::Ignored);
        }

        let request = RefineRequest {
            query: query.to_string(),
            current_prompt: current_result.to_string(),
            feedback: feedback.to_string(),
        };

        match self.service.refine(&request) {
            Ok(refined) => {
                let timestamp = self.clock.now_millis();
                self.record(Action::RefineSucceeded {
                    query: request.query,
                    previous_result: request.current_prompt,
                    refined,
                    timestamp,
                });
                self.apply(Action::SetPrompt(query.to_string()));
                Ok(Outcome::Completed)
            }
            Err(err) => {
                tracing::warn!("Error refining prompt: {}", err);
                let message = failure_message(&err, REFINE_FALLBACK_ERROR);
                self.apply(Action::RefineFailed(message.clone()));
                Ok(Outcome::Failed(message))
            }
        }
    }

    /// Refine the session's current prompt and result with its feedback text.
    pub fn refine_current(&mut self) -> Result<Outcome, AppError> {
        let session = &self.state.session;
        let (query, result, feedback) =
            (session.prompt.clone(), session.result.clone(), session.feedback.clone());
        self.refine(&query, &result, &feedback)
    }

    /// Load a history entry back into the session and show the output view.
    pub fn restore(&mut self, entry: &HistoryEntry) {
        self.apply(Action::Restore { prompt: entry.prompt.clone(), result: entry.result.clone() });
    }

    /// Restore the entry at a 1-based position (1 = newest).
    pub fn restore_position(&mut self, position: usize) -> Result<HistoryEntry, AppError> {
        let entry = self.entry_at(position)?;
        self.restore(&entry);
        Ok(entry)
    }

    /// Clear history after confirmation. Returns whether the history was cleared.
    pub fn clear_history(&mut self, confirmer: &dyn Confirmer) -> Result<bool, AppError> {
        if !confirmer.confirm(CLEAR_HISTORY_CONFIRMATION)? {
            return Ok(false);
        }
        self.dispatch(Action::HistoryCleared)?;
        Ok(true)
    }

    /// Flip the expansion flag of the entry created at `timestamp`.
    pub fn toggle_expansion(&mut self, timestamp: i64) -> Result<(), AppError> {
        match self.dispatch(Action::ToggleExpansion(timestamp))? {
            Transition::Ignored => Err(AppError::HistoryEntryNotFound(timestamp.to_string())),
            _ => Ok(()),
        }
    }

    /// Copy the current result to the clipboard. Returns false when there is nothing to copy.
    pub fn copy_result(&mut self, clipboard: &mut dyn ClipboardWriter) -> Result<bool, AppError> {
        if self.state.session.result.is_empty() {
            return Ok(false);
        }
        clipboard.copy_text(&self.state.session.result)?;
        self.apply(Action::Copied);
        Ok(true)
    }

    pub fn reset_copied(&mut self) {
        self.apply(Action::CopyReset);
    }

    /// Copy a history entry's result to the clipboard.
    pub fn copy_entry(
        &self,
        timestamp: i64,
        clipboard: &mut dyn ClipboardWriter,
    ) -> Result<(), AppError> {
        let entry = self
            .state
            .history
            .find(timestamp)
            .ok_or_else(|| AppError::HistoryEntryNotFound(timestamp.to_string()))?;
        clipboard.copy_text(&entry.result)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, AppError> {
        self.dispatch(Action::ThemeToggled)?;
        Ok(self.state.theme)
    }

    pub fn health(&self) -> Result<Value, AppError> {
        self.service.health()
    }

    /// Clone of the entry at a 1-based position (1 = newest).
    pub fn entry_at(&self, position: usize) -> Result<HistoryEntry, AppError> {
        self.state
            .history
            .at_position(position)
            .cloned()
            .ok_or_else(|| AppError::HistoryEntryNotFound(format!("#{}", position)))
    }
}

fn failure_message(err: &AppError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() { fallback.to_string() } else { message }
}

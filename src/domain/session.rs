//! Ephemeral session state and its reducer.
//!
//! All state changes go through [`reduce`]; callers perform I/O around the dispatch and
//! use the returned [`Transition`] to decide what must be persisted.

use super::history::{History, HistoryEntry};
use super::theme::Theme;

/// Which pane the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Input,
    Output,
}

/// In-memory UI state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub prompt: String,
    pub result: String,
    pub feedback: String,
    pub error: Option<String>,
    pub generating: bool,
    pub refining: bool,
    pub copied: bool,
    pub show_feedback_input: bool,
    pub show_history: bool,
    pub show_tips: bool,
    pub view: ActiveView,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            result: String::new(),
            feedback: String::new(),
            error: None,
            generating: false,
            refining: false,
            copied: false,
            show_feedback_input: false,
            show_history: false,
            show_tips: true,
            view: ActiveView::Input,
        }
    }
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        self.generating || self.refining
    }
}

/// Complete controller state: session, persisted history and theme preference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptState {
    pub session: SessionState,
    pub history: History,
    pub theme: Theme,
}

/// Events accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetPrompt(String),
    SetFeedback(String),
    SetView(ActiveView),
    ShowFeedbackInput,
    ToggleHistoryPanel,
    StartOver,
    GenerateStarted,
    GenerateSucceeded { query: String, result: String, timestamp: i64 },
    GenerateFailed(String),
    RefineStarted,
    RefineSucceeded { query: String, previous_result: String, refined: String, timestamp: i64 },
    RefineFailed(String),
    Restore { prompt: String, result: String },
    HistoryCleared,
    ToggleExpansion(i64),
    Copied,
    CopyReset,
    ThemeToggled,
}

/// What a dispatched action changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The action was refused and the state is untouched.
    Ignored,
    /// Only ephemeral session state changed.
    Session,
    /// The history changed and must be persisted.
    History,
    /// The theme changed and must be persisted.
    Theme,
}

pub fn reduce(state: &mut PromptState, action: Action) -> Transition {
    let session = &mut state.session;

    match action {
        Action::SetPrompt(prompt) => {
            session.prompt = prompt;
            Transition::Session
        }
        Action::SetFeedback(feedback) => {
            session.feedback = feedback;
            Transition::Session
        }
        Action::SetView(view) => {
            session.view = view;
            Transition::Session
        }
        Action::ShowFeedbackInput => {
            session.show_feedback_input = true;
            Transition::Session
        }
        Action::ToggleHistoryPanel => {
            session.show_history = !session.show_history;
            Transition::Session
        }
        Action::StartOver => {
            session.prompt.clear();
            session.result.clear();
            session.show_feedback_input = false;
            session.view = ActiveView::Input;
            Transition::Session
        }
        Action::GenerateStarted => {
            if session.is_pending() {
                return Transition::Ignored;
            }
            session.generating = true;
            session.error = None;
            session.show_tips = false;
            Transition::Session
        }
        Action::GenerateSucceeded { query, result, timestamp } => {
            session.generating = false;
            session.result = result.clone();
            session.view = ActiveView::Output;

            let mut entry = HistoryEntry::new(query, result, timestamp);
            entry.expanded = true;
            state.history.prepend(entry);
            Transition::History
        }
        Action::GenerateFailed(message) => {
            session.generating = false;
            session.error = Some(message);
            Transition::Session
        }
        Action::RefineStarted => {
            if session.is_pending() {
                return Transition::Ignored;
            }
            session.refining = true;
            session.error = None;
            Transition::Session
        }
        Action::RefineSucceeded { query, previous_result, refined, timestamp } => {
            session.refining = false;
            session.result = refined;
            session.feedback.clear();
            session.show_feedback_input = false;
            session.view = ActiveView::Output;

            state.history.prepend(HistoryEntry::new(query, previous_result, timestamp));
            Transition::History
        }
        Action::RefineFailed(message) => {
            session.refining = false;
            session.error = Some(message);
            Transition::Session
        }
        Action::Restore { prompt, result } => {
            session.prompt = prompt;
            session.result = result;
            session.view = ActiveView::Output;
            Transition::Session
        }
        Action::HistoryCleared => {
            state.history.clear();
            Transition::History
        }
        Action::ToggleExpansion(timestamp) => {
            if state.history.toggle_expansion(timestamp) {
                Transition::History
            } else {
                Transition::Ignored
            }
        }
        Action::Copied => {
            session.copied = true;
            Transition::Session
        }
        Action::CopyReset => {
            session.copied = false;
            Transition::Session
        }
        Action::ThemeToggled => {
            state.theme = state.theme.toggled();
            Transition::Theme
        }
    }
}

//! Dialogue response value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the caller should show the analyst next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueAction {
    AskQuestion,
    ShowSummary,
    ShowPir,
    MaxQuestions,
    Complete,
}

impl DialogueAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueAction::AskQuestion => "ask_question",
            DialogueAction::ShowSummary => "show_summary",
            DialogueAction::ShowPir => "show_pir",
            DialogueAction::MaxQuestions => "max_questions",
            DialogueAction::Complete => "complete",
        }
    }

    /// Only a clarifying question keeps the dialogue open-ended
    pub fn is_final(&self) -> bool {
        !matches!(self, DialogueAction::AskQuestion)
    }

    /// Coarse content kind for clients
    pub fn response_type(&self) -> &'static str {
        match self {
            DialogueAction::AskQuestion => "question",
            DialogueAction::ShowSummary | DialogueAction::MaxQuestions => "summary",
            DialogueAction::ShowPir => "pir",
            DialogueAction::Complete => "complete",
        }
    }
}

impl fmt::Display for DialogueAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One turn's answer to the caller (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueResponse {
    pub action: DialogueAction,
    /// Question text, context summary JSON, or PIR text depending on `action`
    pub content: String,
}

impl DialogueResponse {
    pub fn new(action: DialogueAction, content: impl Into<String>) -> Self {
        Self {
            action,
            content: content.into(),
        }
    }

    pub fn is_final(&self) -> bool {
        self.action.is_final()
    }
}

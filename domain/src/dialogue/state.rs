//! Dialogue state definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a direction dialogue.
///
/// ```text
/// Initial ──► Gathering ──► SummaryConfirming ──► PirConfirming ──► Complete
///                │  ▲              │  ▲                │  ▲
///                └──┘              └──┘                └──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// Waiting for the first message
    #[default]
    Initial,
    /// Asking clarifying questions
    Gathering,
    /// Context summary shown, waiting for approval or modifications
    SummaryConfirming,
    /// PIR shown, waiting for approval or modifications
    PirConfirming,
    /// PIR approved
    Complete,
}

impl DialogueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueState::Initial => "initial",
            DialogueState::Gathering => "gathering",
            DialogueState::SummaryConfirming => "summary_confirming",
            DialogueState::PirConfirming => "pir_confirming",
            DialogueState::Complete => "complete",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DialogueState::Complete)
    }

    /// Whether the analyst is expected to approve or reject something
    pub fn awaits_approval(&self) -> bool {
        matches!(
            self,
            DialogueState::SummaryConfirming | DialogueState::PirConfirming
        )
    }
}

impl fmt::Display for DialogueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

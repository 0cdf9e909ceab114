//! Dialogue parameters: limits for the direction dialogue.
//!
//! [`DialogueParams`] groups the static limits that bound the
//! [`DialogueFlow`](crate::use_cases::dialogue_flow::DialogueFlow) and the
//! [`AiOrchestrator`](crate::use_cases::ai_orchestrator::AiOrchestrator).

use serde::{Deserialize, Serialize};

/// Dialogue limit parameters.
///
/// | Field | Bounds |
/// |-------|--------|
/// | `max_questions` | Gathering turns before a forced summary |
/// | `max_retries` | Generate/review attempts per PIR |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueParams {
    /// Maximum clarifying questions before the summary is forced.
    pub max_questions: u32,
    /// Maximum generate/review attempts before the last PIR is returned anyway.
    pub max_retries: u32,
}

impl DialogueParams {
    pub const DEFAULT_MAX_QUESTIONS: u32 = 15;
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    // ==================== Builder Methods ====================

    pub fn with_max_questions(mut self, max: u32) -> Self {
        self.max_questions = max;
        self
    }

    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }
}

impl Default for DialogueParams {
    fn default() -> Self {
        Self {
            max_questions: Self::DEFAULT_MAX_QUESTIONS,
            max_retries: Self::DEFAULT_MAX_RETRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = DialogueParams::default();
        assert_eq!(params.max_questions, 15);
        assert_eq!(params.max_retries, 3);
    }

    #[test]
    fn test_builder_chain() {
        let params = DialogueParams::default()
            .with_max_questions(5)
            .with_max_retries(1);
        assert_eq!(params.max_questions, 5);
        assert_eq!(params.max_retries, 1);
    }
}

//! Dialogue flow: the direction-phase state machine.
//!
//! A [`DialogueFlow`] owns one conversation's [`DialogueContext`] and advances
//! through [`DialogueState`] one analyst turn at a time:
//!
//! | State | Input | Next state | Action |
//! |-------|-------|------------|--------|
//! | Initial | any | Gathering | `ask_question` |
//! | Gathering | question limit reached | SummaryConfirming | `max_questions` |
//! | Gathering | context sufficient | SummaryConfirming | `show_summary` |
//! | Gathering | otherwise | Gathering | `ask_question` |
//! | SummaryConfirming | approved | PirConfirming | `show_pir` |
//! | SummaryConfirming | rejected | SummaryConfirming | `show_summary` |
//! | PirConfirming | approved | Complete | `complete` |
//! | PirConfirming | rejected | PirConfirming | `show_pir` |
//! | Complete | any | Complete | `complete` |
//!
//! Collaborator failures propagate to the caller. Writes made before the
//! failing call (initial query, perspectives, modifications) are kept, and
//! re-applying them on a retried turn is harmless.

use crate::config::DialogueParams;
use crate::ports::dialogue_service::{DialogueService, DialogueServiceError};
use pir_domain::{
    DialogueAction, DialogueContext, DialogueResponse, DialogueState, DomainError, Perspective,
};
use thiserror::Error;
use tracing::{debug, info};

/// Content returned for any message after the dialogue has completed
pub const ALREADY_COMPLETE_MESSAGE: &str = "Direction phase already complete.";

/// Errors that can fail a dialogue turn
#[derive(Error, Debug)]
pub enum DialogueError {
    /// Invalid input; the turn had no effect
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Dialogue service error: {0}")]
    Service(#[from] DialogueServiceError),
}

impl DialogueError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DialogueError::Domain(e) if e.is_validation())
    }
}

/// State machine for one direction dialogue.
#[derive(Debug, Clone)]
pub struct DialogueFlow {
    state: DialogueState,
    context: DialogueContext,
    question_count: u32,
    latest_pir: Option<String>,
    params: DialogueParams,
}

impl Default for DialogueFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogueFlow {
    pub fn new() -> Self {
        Self::with_params(DialogueParams::default())
    }

    pub fn with_params(params: DialogueParams) -> Self {
        Self {
            state: DialogueState::Initial,
            context: DialogueContext::new(),
            question_count: 0,
            latest_pir: None,
            params,
        }
    }

    /// Rebuild a flow from previously captured parts.
    pub fn restore(
        state: DialogueState,
        context: DialogueContext,
        question_count: u32,
        params: DialogueParams,
    ) -> Self {
        Self {
            state,
            context,
            question_count,
            latest_pir: None,
            params,
        }
    }

    // ==================== Accessors ====================

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn context(&self) -> &DialogueContext {
        &self.context
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    pub fn max_questions(&self) -> u32 {
        self.params.max_questions
    }

    /// Most recent PIR shown to the analyst; the approved one once complete
    pub fn latest_pir(&self) -> Option<&str> {
        self.latest_pir.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }

    // ==================== Turn Processing ====================

    /// Replace the selected perspectives from raw tokens.
    ///
    /// All tokens are validated before the context is touched.
    pub fn update_perspectives<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), DomainError> {
        let perspectives = Perspective::parse_list(tokens)?;
        self.context.set_perspectives(perspectives);
        Ok(())
    }

    /// Process one analyst turn and return what to show next.
    ///
    /// A non-empty `perspectives` list replaces the current selection before
    /// the state handler runs, in every state. `approved` only matters while
    /// a summary or PIR is awaiting confirmation; `None` counts as a rejection.
    pub async fn process_user_message<S: AsRef<str>>(
        &mut self,
        user_message: &str,
        service: &dyn DialogueService,
        perspectives: &[S],
        approved: Option<bool>,
    ) -> Result<DialogueResponse, DialogueError> {
        if !perspectives.is_empty() {
            self.update_perspectives(perspectives)?;
        }

        let approved = approved.unwrap_or(false);
        debug!(
            "Processing turn in state {} (questions asked: {})",
            self.state, self.question_count
        );

        match self.state {
            DialogueState::Initial => self.handle_initial(user_message, service).await,
            DialogueState::Gathering => self.handle_gathering(user_message, service).await,
            DialogueState::SummaryConfirming => {
                self.handle_summary_confirming(user_message, service, approved)
                    .await
            }
            DialogueState::PirConfirming => {
                self.handle_pir_confirming(user_message, service, approved)
                    .await
            }
            DialogueState::Complete => Ok(DialogueResponse::new(
                DialogueAction::Complete,
                ALREADY_COMPLETE_MESSAGE,
            )),
        }
    }

    async fn handle_initial(
        &mut self,
        user_message: &str,
        service: &dyn DialogueService,
    ) -> Result<DialogueResponse, DialogueError> {
        // Still Initial, so a resent first turn replaces the query
        self.context.replace_initial_query(user_message);

        let result = service
            .generate_clarifying_question(user_message, &self.context)
            .await?;
        self.context.apply(result.extracted_context);
        self.question_count += 1;

        self.transition(DialogueState::Gathering);
        Ok(DialogueResponse::new(
            DialogueAction::AskQuestion,
            result.question.question_text,
        ))
    }

    async fn handle_gathering(
        &mut self,
        user_message: &str,
        service: &dyn DialogueService,
    ) -> Result<DialogueResponse, DialogueError> {
        if self.question_count >= self.params.max_questions {
            info!(
                "Question limit ({}) reached, forcing summary",
                self.params.max_questions
            );
            self.transition(DialogueState::SummaryConfirming);
            return Ok(DialogueResponse::new(
                DialogueAction::MaxQuestions,
                self.context.summary_json(),
            ));
        }

        let result = service
            .generate_clarifying_question(user_message, &self.context)
            .await?;
        let changed = self.context.apply(result.extracted_context);
        self.question_count += 1;
        if !changed.is_empty() {
            debug!("Merged context fields: {:?}", changed);
        }

        if self.context.has_sufficient_context() {
            self.transition(DialogueState::SummaryConfirming);
            Ok(DialogueResponse::new(
                DialogueAction::ShowSummary,
                self.context.summary_json(),
            ))
        } else {
            Ok(DialogueResponse::new(
                DialogueAction::AskQuestion,
                result.question.question_text,
            ))
        }
    }

    async fn handle_summary_confirming(
        &mut self,
        user_message: &str,
        service: &dyn DialogueService,
        approved: bool,
    ) -> Result<DialogueResponse, DialogueError> {
        if !approved {
            self.context.set_modifications(user_message);
            return Ok(DialogueResponse::new(
                DialogueAction::ShowSummary,
                self.context.summary_json(),
            ));
        }

        let pir = service
            .generate_pir(&self.context, self.context.modifications())
            .await?;
        self.latest_pir = Some(pir.clone());

        self.transition(DialogueState::PirConfirming);
        Ok(DialogueResponse::new(DialogueAction::ShowPir, pir))
    }

    async fn handle_pir_confirming(
        &mut self,
        user_message: &str,
        service: &dyn DialogueService,
        approved: bool,
    ) -> Result<DialogueResponse, DialogueError> {
        if approved {
            self.transition(DialogueState::Complete);
            return Ok(DialogueResponse::new(
                DialogueAction::Complete,
                self.latest_pir.clone().unwrap_or_default(),
            ));
        }

        self.context.set_modifications(user_message);
        let pir = service
            .generate_pir(&self.context, self.context.modifications())
            .await?;
        self.latest_pir = Some(pir.clone());

        Ok(DialogueResponse::new(DialogueAction::ShowPir, pir))
    }

    fn transition(&mut self, next: DialogueState) {
        info!("Dialogue state: {} -> {}", self.state, next);
        self.state = next;
    }
}

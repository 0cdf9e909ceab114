//! Dialogue service port
//!
//! The two collaborator operations the dialogue state machine depends on:
//! producing the next clarifying question and producing a PIR.

use crate::ports::pir_reviewer::ReviewError;
use crate::ports::tool_invoker::ToolInvocationError;
use async_trait::async_trait;
use pir_domain::{DialogueContext, DomainError, QuestionResult};
use thiserror::Error;

/// Errors raised by question or PIR generation
#[derive(Error, Debug)]
pub enum DialogueServiceError {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolInvocationError),

    #[error("Malformed response from '{tool}': {message}")]
    MalformedResponse { tool: String, message: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Review error: {0}")]
    Review(#[from] ReviewError),
}

/// Generates clarifying questions and PIR documents.
#[async_trait]
pub trait DialogueService: Send + Sync {
    /// Produce the next question for the analyst.
    ///
    /// Must not mutate `context`; values extracted from `user_message` are
    /// returned in [`QuestionResult::extracted_context`] for the caller to merge.
    async fn generate_clarifying_question(
        &self,
        user_message: &str,
        context: &DialogueContext,
    ) -> Result<QuestionResult, DialogueServiceError>;

    /// Produce a PIR document from the gathered context.
    ///
    /// Fails with [`DomainError::MissingRequiredContext`] when scope,
    /// timeframe or target entities are unset.
    async fn generate_pir(
        &self,
        context: &DialogueContext,
        modifications: Option<&str>,
    ) -> Result<String, DialogueServiceError>;
}

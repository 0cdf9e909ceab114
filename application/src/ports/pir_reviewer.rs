//! PIR reviewer ports.
//!
//! [`PirReviewer`] is what the orchestrator consults after each generation.
//! [`ReviewCapability`] is the raw reviewing backend (usually a second LLM)
//! that a reviewer delegates to.

use async_trait::async_trait;
use pir_domain::DialogueContext;
use thiserror::Error;

/// Errors raised while reviewing a PIR
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Reviewer unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed review response: {0}")]
    MalformedResponse(String),
}

/// Decides whether a generated PIR is acceptable for its context.
#[async_trait]
pub trait PirReviewer: Send + Sync {
    async fn review_pir(&self, pir_text: &str, context: &DialogueContext)
    -> Result<bool, ReviewError>;
}

/// Backend capable of judging a PIR against its context.
#[async_trait]
pub trait ReviewCapability: Send + Sync {
    async fn review(&self, pir_text: &str, context: &DialogueContext) -> Result<bool, ReviewError>;
}

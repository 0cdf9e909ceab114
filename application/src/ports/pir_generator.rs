//! PIR generator port

use crate::ports::dialogue_service::DialogueServiceError;
use async_trait::async_trait;
use pir_domain::DialogueContext;

/// Produces a PIR document from a context.
///
/// Any pending modification feedback is read from
/// [`DialogueContext::modifications`].
#[async_trait]
pub trait PirGenerator: Send + Sync {
    async fn generate_pir(&self, context: &DialogueContext) -> Result<String, DialogueServiceError>;
}

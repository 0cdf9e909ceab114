//! Review service: delegates PIR review to an injected capability.

use crate::ports::pir_reviewer::{PirReviewer, ReviewCapability, ReviewError};
use async_trait::async_trait;
use pir_domain::DialogueContext;
use std::sync::Arc;

/// [`PirReviewer`] backed by a [`ReviewCapability`].
///
/// Holds no state of its own; errors from the capability pass through untouched.
#[derive(Clone)]
pub struct ReviewService {
    capability: Arc<dyn ReviewCapability>,
}

impl ReviewService {
    pub fn new(capability: Arc<dyn ReviewCapability>) -> Self {
        Self { capability }
    }
}

#[async_trait]
impl PirReviewer for ReviewService {
    async fn review_pir(
        &self,
        pir_text: &str,
        context: &DialogueContext,
    ) -> Result<bool, ReviewError> {
        self.capability.review(pir_text, context).await
    }
}

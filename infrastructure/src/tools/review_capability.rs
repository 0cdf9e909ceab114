//! PIR review through the `review_pir` tool.

use super::REVIEW_PIR_TOOL;
use super::payload::{context_value, decode};
use async_trait::async_trait;
use pir_application::{ReviewCapability, ReviewError, ToolInvoker};
use pir_domain::DialogueContext;
use serde_json::{Value, json};
use std::sync::Arc;

/// [`ReviewCapability`] that asks the `review_pir` tool for a verdict.
///
/// Accepts a bare boolean or an object with an `approved` flag.
#[derive(Clone)]
pub struct ToolReviewCapability {
    invoker: Arc<dyn ToolInvoker>,
}

impl ToolReviewCapability {
    pub fn new(invoker: Arc<dyn ToolInvoker>) -> Self {
        Self { invoker }
    }
}

fn verdict(response: Value) -> Result<bool, ReviewError> {
    match decode(response) {
        Value::Bool(approved) => Ok(approved),
        Value::Object(map) => match map.get("approved") {
            Some(Value::Bool(approved)) => Ok(*approved),
            Some(other) => Err(ReviewError::MalformedResponse(format!(
                "'approved' is not a boolean: {}",
                other
            ))),
            None => Err(ReviewError::MalformedResponse(
                "missing 'approved' field".to_string(),
            )),
        },
        other => Err(ReviewError::MalformedResponse(format!(
            "unexpected review response: {}",
            other
        ))),
    }
}

#[async_trait]
impl ReviewCapability for ToolReviewCapability {
    async fn review(&self, pir_text: &str, context: &DialogueContext) -> Result<bool, ReviewError> {
        let arguments = json!({
            "pir": pir_text,
            "context": context_value(context),
        });
        let response = self
            .invoker
            .call_tool(REVIEW_PIR_TOOL, arguments)
            .await
            .map_err(|e| ReviewError::Unavailable(e.to_string()))?;
        verdict(response)
    }
}

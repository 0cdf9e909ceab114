//! PIR generation through the `generate_pir` tool.

use super::GENERATE_PIR_TOOL;
use super::payload::perspective_names;
use async_trait::async_trait;
use pir_application::{DialogueServiceError, PirGenerator, ToolInvoker};
use pir_domain::DialogueContext;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

/// [`PirGenerator`] that calls the `generate_pir` tool.
///
/// Analyst feedback is read from [`DialogueContext::modifications`].
#[derive(Clone)]
pub struct ToolPirGenerator {
    invoker: Arc<dyn ToolInvoker>,
}

impl ToolPirGenerator {
    pub fn new(invoker: Arc<dyn ToolInvoker>) -> Self {
        Self { invoker }
    }

    fn arguments(context: &DialogueContext) -> Value {
        json!({
            "scope": context.scope(),
            "timeframe": context.timeframe(),
            "target_entities": context.target_entities(),
            "threat_actors": context.threat_actors(),
            "priority_focus": context.priority_focus(),
            "perspectives": perspective_names(context),
            "modifications": context.modifications(),
        })
    }
}

#[async_trait]
impl PirGenerator for ToolPirGenerator {
    async fn generate_pir(&self, context: &DialogueContext) -> Result<String, DialogueServiceError> {
        context.ensure_ready_for_pir()?;

        debug!(
            "Requesting PIR (modifications: {})",
            context.modifications().is_some()
        );
        let response = self
            .invoker
            .call_tool(GENERATE_PIR_TOOL, Self::arguments(context))
            .await?;

        match response {
            Value::String(text) => Ok(text),
            Value::Null => Err(DialogueServiceError::MalformedResponse {
                tool: GENERATE_PIR_TOOL.to_string(),
                message: "empty response".to_string(),
            }),
            other => serde_json::to_string_pretty(&other).map_err(|e| {
                DialogueServiceError::MalformedResponse {
                    tool: GENERATE_PIR_TOOL.to_string(),
                    message: e.to_string(),
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::ScriptedInvoker;
    use pir_domain::{ContextField, DomainError, Perspective};

    fn ready_context() -> DialogueContext {
        let mut context = DialogueContext::new();
        context.set_scope("ransomware campaigns");
        context.set_timeframe("2024");
        context.set_target_entities(["Norway", "energy sector"]);
        context.set_perspectives(vec![Perspective::Norway, Perspective::Eu]);
        context
    }

    #[tokio::test]
    async fn test_sends_context_fields() {
        let invoker = Arc::new(ScriptedInvoker::default().respond(GENERATE_PIR_TOOL, json!("PIR 1")));
        let generator = ToolPirGenerator::new(invoker.clone());

        let mut context = ready_context();
        context.set_modifications("narrow to 2024 Q4");
        let pir = generator.generate_pir(&context).await.unwrap();

        assert_eq!(pir, "PIR 1");
        let args = &invoker.calls_to(GENERATE_PIR_TOOL)[0];
        assert_eq!(args["scope"], "ransomware campaigns");
        assert_eq!(args["target_entities"], json!(["Norway", "energy sector"]));
        assert_eq!(args["threat_actors"], json!([]));
        assert_eq!(args["perspectives"], json!(["norway", "eu"]));
        assert_eq!(args["modifications"], "narrow to 2024 Q4");
    }

    #[tokio::test]
    async fn test_json_response_is_serialized() {
        let invoker = Arc::new(
            ScriptedInvoker::default()
                .respond(GENERATE_PIR_TOOL, json!({"pirs": [{"question": "Who?"}]})),
        );
        let pir = ToolPirGenerator::new(invoker)
            .generate_pir(&ready_context())
            .await
            .unwrap();

        let parsed: Value = serde_json::from_str(&pir).unwrap();
        assert_eq!(parsed["pirs"][0]["question"], "Who?");
    }

    #[tokio::test]
    async fn test_incomplete_context_is_rejected_before_calling() {
        let invoker = Arc::new(ScriptedInvoker::default());
        let err = ToolPirGenerator::new(invoker.clone())
            .generate_pir(&DialogueContext::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DialogueServiceError::Domain(DomainError::MissingRequiredContext(ref fields))
                if fields.contains(&ContextField::Scope)
        ));
        assert!(invoker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_tool_failure_propagates() {
        let invoker = Arc::new(ScriptedInvoker::default().fail(GENERATE_PIR_TOOL, "rate limited"));
        let err = ToolPirGenerator::new(invoker)
            .generate_pir(&ready_context())
            .await
            .unwrap_err();
        assert!(matches!(err, DialogueServiceError::Tool(_)));
    }
}

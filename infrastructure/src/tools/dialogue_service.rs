//! Dialogue service backed by named tools.
//!
//! Questions come from the `dialogue_question` tool and PIRs from the
//! `generate_pir` tool. When a reviewer is attached, PIR generation runs
//! through [`AiOrchestrator`] so every document is reviewed (and logged)
//! before it reaches the analyst.

use super::payload::{QuestionToolResponse, context_value, decode, perspective_names};
use super::{DIALOGUE_QUESTION_TOOL, ToolPirGenerator, ToolReviewCapability};
use crate::config::FileConfig;
use async_trait::async_trait;
use pir_application::{
    AiOrchestrator, DialogueParams, DialogueService, DialogueServiceError, DialogueSessions,
    OrchestratorError, PirGenerator, PirReviewer, ReasoningLogger, ReviewService, ToolInvoker,
};
use pir_domain::{ClarifyingQuestion, ContextField, DialogueContext, QuestionResult, QuestionType};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

struct ReviewStage {
    reviewer: Arc<dyn PirReviewer>,
    logger: Option<Arc<dyn ReasoningLogger>>,
}

/// [`DialogueService`] over a [`ToolInvoker`].
pub struct ToolDialogueService {
    invoker: Arc<dyn ToolInvoker>,
    generator: ToolPirGenerator,
    orchestrator: AiOrchestrator,
    review: Option<ReviewStage>,
}

impl ToolDialogueService {
    pub fn new(invoker: Arc<dyn ToolInvoker>) -> Self {
        Self {
            generator: ToolPirGenerator::new(invoker.clone()),
            invoker,
            orchestrator: AiOrchestrator::new(),
            review: None,
        }
    }

    /// Review every generated PIR, logging attempts to `logger` if given.
    pub fn with_review(
        mut self,
        reviewer: Arc<dyn PirReviewer>,
        logger: Option<Arc<dyn ReasoningLogger>>,
    ) -> Self {
        self.review = Some(ReviewStage { reviewer, logger });
        self
    }

    /// Take the retry ceiling from dialogue parameters.
    pub fn with_params(mut self, params: &DialogueParams) -> Self {
        self.orchestrator = AiOrchestrator::from_params(params);
        self
    }

    /// Reviewed service wired from file settings.
    ///
    /// PIRs are judged by the `review_pir` tool on the same invoker, retried
    /// up to `dialogue.max_retries` times and logged per `[reasoning_log]`.
    pub fn from_config(invoker: Arc<dyn ToolInvoker>, config: &FileConfig) -> std::io::Result<Self> {
        let reviewer = Arc::new(ReviewService::new(Arc::new(ToolReviewCapability::new(
            invoker.clone(),
        ))));
        let logger = config.reasoning_logger()?;
        Ok(Self::new(invoker)
            .with_params(&config.to_dialogue_params())
            .with_review(reviewer, Some(logger)))
    }

    fn parse_question(
        response: serde_json::Value,
        missing: &[ContextField],
    ) -> Result<QuestionResult, DialogueServiceError> {
        let response: QuestionToolResponse =
            serde_json::from_value(decode(response)).map_err(|e| {
                DialogueServiceError::MalformedResponse {
                    tool: DIALOGUE_QUESTION_TOOL.to_string(),
                    message: e.to_string(),
                }
            })?;

        let question_type = match response.question_type.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Unknown question type '{}', inferring from context", raw);
                fallback_question_type(missing)
            }),
            None => fallback_question_type(missing),
        };

        let mut question = ClarifyingQuestion::new(response.question, question_type);
        if response.has_sufficient_context {
            question = question.final_question();
        }
        if let Some(answers) = response.suggested_answers {
            question = question.with_suggested_answers(answers);
        }

        let mut result = QuestionResult::new(question);
        if let Some(update) = response.context {
            result = result.with_extracted_context(update);
        }
        Ok(result)
    }
}

/// Session registry over a configured [`ToolDialogueService`]
pub fn build_dialogue_sessions(
    invoker: Arc<dyn ToolInvoker>,
    config: &FileConfig,
) -> std::io::Result<DialogueSessions> {
    let service = ToolDialogueService::from_config(invoker, config)?;
    Ok(DialogueSessions::new(Arc::new(service)).with_params(config.to_dialogue_params()))
}

/// Ask about the highest-priority missing field, or confirm when none is missing
fn fallback_question_type(missing: &[ContextField]) -> QuestionType {
    missing
        .first()
        .and_then(|field| field.as_str().parse().ok())
        .unwrap_or(QuestionType::Confirmation)
}

#[async_trait]
impl DialogueService for ToolDialogueService {
    async fn generate_clarifying_question(
        &self,
        user_message: &str,
        context: &DialogueContext,
    ) -> Result<QuestionResult, DialogueServiceError> {
        let mut missing = context.missing_fields();
        ContextField::sort_by_question_priority(&mut missing);

        let arguments = json!({
            "user_message": user_message,
            "missing_fields": missing.iter().map(|f| f.as_str()).collect::<Vec<_>>(),
            "perspectives": perspective_names(context),
            "context": context_value(context),
        });
        debug!("Requesting clarifying question ({} fields missing)", missing.len());

        let response = self
            .invoker
            .call_tool(DIALOGUE_QUESTION_TOOL, arguments)
            .await?;
        Self::parse_question(response, &missing)
    }

    async fn generate_pir(
        &self,
        context: &DialogueContext,
        modifications: Option<&str>,
    ) -> Result<String, DialogueServiceError> {
        context.ensure_ready_for_pir()?;

        let mut request = context.clone();
        match modifications {
            Some(feedback) => request.set_modifications(feedback),
            None => request.clear_modifications(),
        }

        let Some(stage) = &self.review else {
            return self.generator.generate_pir(&request).await;
        };

        let reviewed = self
            .orchestrator
            .generate_and_review(
                &request,
                &self.generator,
                stage.reviewer.as_ref(),
                stage.logger.as_deref(),
            )
            .await
            .map_err(|e| match e {
                OrchestratorError::Generation(e) => e,
                OrchestratorError::Review(e) => DialogueServiceError::Review(e),
            })?;
        Ok(reviewed.pir)
    }
}

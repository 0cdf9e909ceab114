//! AI Orchestrator use case.
//!
//! Runs the generate → review → retry loop: one collaborator writes a PIR,
//! a second judges it, and rejected PIRs are regenerated up to
//! `max_retries` times.
//!
//! When every attempt is rejected the last PIR is returned anyway so the
//! analyst is never blocked. [`ReviewedPir::approved`] tells callers which
//! case they got.

use crate::config::DialogueParams;
use crate::ports::dialogue_service::DialogueServiceError;
use crate::ports::pir_generator::PirGenerator;
use crate::ports::pir_reviewer::{PirReviewer, ReviewError};
use crate::ports::reasoning_logger::ReasoningLogger;
use chrono::Utc;
use pir_domain::{DialogueContext, ReasoningLogEntry};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Errors raised by a collaborator during orchestration.
///
/// A rejected review is not an error.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Generation failed: {0}")]
    Generation(#[from] DialogueServiceError),

    #[error("Review failed: {0}")]
    Review(#[from] ReviewError),
}

/// Outcome of a generate-and-review run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewedPir {
    /// The approved PIR, or the last attempt if none was approved
    pub pir: String,
    pub approved: bool,
    /// Number of attempts made (1..=max_retries)
    pub attempts: u32,
    /// Identifier shared by the log entries of this run
    pub session_id: String,
}

/// Coordinates a PIR generator and a PIR reviewer.
#[derive(Debug, Clone, Copy)]
pub struct AiOrchestrator {
    max_retries: u32,
}

impl Default for AiOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl AiOrchestrator {
    pub fn new() -> Self {
        Self {
            max_retries: DialogueParams::DEFAULT_MAX_RETRIES,
        }
    }

    pub fn from_params(params: &DialogueParams) -> Self {
        Self::new().with_max_retries(params.max_retries)
    }

    /// Set the attempt ceiling. Values below 1 are raised to 1.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Generate and review a PIR, returning only the text.
    pub async fn generate_and_review_pir(
        &self,
        context: &DialogueContext,
        generator: &dyn PirGenerator,
        reviewer: &dyn PirReviewer,
        logger: Option<&dyn ReasoningLogger>,
    ) -> Result<String, OrchestratorError> {
        self.generate_and_review(context, generator, reviewer, logger)
            .await
            .map(|reviewed| reviewed.pir)
    }

    /// Generate and review a PIR, retrying on rejection.
    ///
    /// One log entry is handed to `logger` per attempt, all sharing one
    /// session id. Collaborator failures abort the run immediately.
    pub async fn generate_and_review(
        &self,
        context: &DialogueContext,
        generator: &dyn PirGenerator,
        reviewer: &dyn PirReviewer,
        logger: Option<&dyn ReasoningLogger>,
    ) -> Result<ReviewedPir, OrchestratorError> {
        let session_id = Uuid::new_v4().to_string();
        info!(
            "Starting PIR generation run {} (max {} attempts)",
            session_id, self.max_retries
        );

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let timestamp = Utc::now();

            let generation_start = Instant::now();
            let pir = generator.generate_pir(context).await?;
            let generation_duration = generation_start.elapsed();

            let review_start = Instant::now();
            let approved = reviewer.review_pir(&pir, context).await?;
            let review_duration = review_start.elapsed();

            debug!(
                "Attempt {}/{}: approved={}, generation={:?}, review={:?}",
                attempt, self.max_retries, approved, generation_duration, review_duration
            );

            if let Some(logger) = logger {
                match ReasoningLogEntry::new(
                    session_id.as_str(),
                    attempt,
                    timestamp,
                    pir.as_str(),
                    generation_duration,
                    approved,
                    review_duration,
                ) {
                    Ok(entry) => logger.create_log(&entry),
                    Err(e) => warn!("Skipping reasoning log entry: {}", e),
                }
            }

            if approved {
                info!("PIR approved on attempt {}", attempt);
                return Ok(ReviewedPir {
                    pir,
                    approved: true,
                    attempts: attempt,
                    session_id,
                });
            }

            if attempt >= self.max_retries {
                warn!(
                    "PIR rejected {} times, returning last attempt unapproved",
                    attempt
                );
                return Ok(ReviewedPir {
                    pir,
                    approved: false,
                    attempts: attempt,
                    session_id,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Returns "PIR attempt N" for the Nth call
    struct CountingGenerator {
        calls: Mutex<u32>,
    }

    impl CountingGenerator {
        fn new() -> Self {
            Self {
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl PirGenerator for CountingGenerator {
        async fn generate_pir(
            &self,
            _context: &DialogueContext,
        ) -> Result<String, DialogueServiceError> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            Ok(format!("PIR attempt {}", *calls))
        }
    }

    struct ScriptedReviewer {
        verdicts: Mutex<VecDeque<bool>>,
    }

    impl ScriptedReviewer {
        fn new(verdicts: &[bool]) -> Self {
            Self {
                verdicts: Mutex::new(verdicts.iter().copied().collect()),
            }
        }
    }

    #[async_trait]
    impl PirReviewer for ScriptedReviewer {
        async fn review_pir(
            &self,
            _pir_text: &str,
            _context: &DialogueContext,
        ) -> Result<bool, ReviewError> {
            self.verdicts
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| ReviewError::Unavailable("No more verdicts".to_string()))
        }
    }

    struct FailingReviewer;

    #[async_trait]
    impl PirReviewer for FailingReviewer {
        async fn review_pir(
            &self,
            _pir_text: &str,
            _context: &DialogueContext,
        ) -> Result<bool, ReviewError> {
            Err(ReviewError::Unavailable("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        entries: Mutex<Vec<ReasoningLogEntry>>,
    }

    impl RecordingLogger {
        fn entries(&self) -> Vec<ReasoningLogEntry> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl ReasoningLogger for RecordingLogger {
        fn create_log(&self, entry: &ReasoningLogEntry) {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_first_attempt_approved() {
        let generator = CountingGenerator::new();
        let reviewer = ScriptedReviewer::new(&[true]);
        let logger = RecordingLogger::default();

        let pir = AiOrchestrator::new()
            .generate_and_review_pir(&DialogueContext::new(), &generator, &reviewer, Some(&logger))
            .await
            .unwrap();

        assert_eq!(pir, "PIR attempt 1");
        assert_eq!(generator.calls(), 1);
        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].attempt_number, 1);
        assert!(entries[0].is_approved);
    }

    #[tokio::test]
    async fn test_retry_after_rejection_shares_session_id() {
        let generator = CountingGenerator::new();
        let reviewer = ScriptedReviewer::new(&[false, true]);
        let logger = RecordingLogger::default();

        let reviewed = AiOrchestrator::new()
            .generate_and_review(&DialogueContext::new(), &generator, &reviewer, Some(&logger))
            .await
            .unwrap();

        assert_eq!(reviewed.pir, "PIR attempt 2");
        assert!(reviewed.approved);
        assert_eq!(reviewed.attempts, 2);

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].session_id, entries[1].session_id);
        assert_eq!(entries[0].session_id, reviewed.session_id);
        assert_eq!(entries[0].attempt_number, 1);
        assert_eq!(entries[1].attempt_number, 2);
        assert!(!entries[0].is_approved);
        assert!(entries[1].is_approved);
    }

    #[tokio::test]
    async fn test_exhausted_retries_return_last_pir() {
        let generator = CountingGenerator::new();
        // A fourth verdict would be approval; it must never be requested
        let reviewer = ScriptedReviewer::new(&[false, false, false, true]);
        let logger = RecordingLogger::default();

        let reviewed = AiOrchestrator::new()
            .generate_and_review(&DialogueContext::new(), &generator, &reviewer, Some(&logger))
            .await
            .unwrap();

        assert_eq!(reviewed.pir, "PIR attempt 3");
        assert!(!reviewed.approved);
        assert_eq!(reviewed.attempts, 3);
        assert_eq!(generator.calls(), 3);
        assert_eq!(logger.entries().len(), 3);
    }

    #[tokio::test]
    async fn test_durations_are_non_negative() {
        let generator = CountingGenerator::new();
        let reviewer = ScriptedReviewer::new(&[false, false, false]);
        let logger = RecordingLogger::default();

        AiOrchestrator::new()
            .generate_and_review_pir(&DialogueContext::new(), &generator, &reviewer, Some(&logger))
            .await
            .unwrap();

        for entry in logger.entries() {
            assert!(entry.generation_duration >= 0.0);
            assert!(entry.review_duration >= 0.0);
        }
    }

    #[tokio::test]
    async fn test_runs_without_logger() {
        let generator = CountingGenerator::new();
        let reviewer = ScriptedReviewer::new(&[false, true]);

        let pir = AiOrchestrator::new()
            .generate_and_review_pir(&DialogueContext::new(), &generator, &reviewer, None)
            .await
            .unwrap();

        assert_eq!(pir, "PIR attempt 2");
    }

    #[tokio::test]
    async fn test_max_retries_is_configurable() {
        let generator = CountingGenerator::new();
        let reviewer = ScriptedReviewer::new(&[false, false]);

        let orchestrator =
            AiOrchestrator::from_params(&DialogueParams::default().with_max_retries(1));
        let reviewed = orchestrator
            .generate_and_review(&DialogueContext::new(), &generator, &reviewer, None)
            .await
            .unwrap();

        assert_eq!(reviewed.attempts, 1);
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn test_zero_retries_is_raised_to_one() {
        assert_eq!(AiOrchestrator::new().with_max_retries(0).max_retries(), 1);
    }

    #[tokio::test]
    async fn test_reviewer_failure_propagates() {
        let generator = CountingGenerator::new();
        let logger = RecordingLogger::default();

        let result = AiOrchestrator::new()
            .generate_and_review(&DialogueContext::new(), &generator, &FailingReviewer, Some(&logger))
            .await;

        assert!(matches!(result, Err(OrchestratorError::Review(_))));
        assert!(logger.entries().is_empty());
    }
}

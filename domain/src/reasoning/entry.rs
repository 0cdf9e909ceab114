//! Reasoning log entry value object

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one generate-then-review attempt (Value Object).
///
/// Durations are wall-clock seconds and are never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningLogEntry {
    /// Identifier shared by every attempt of one orchestration run
    pub session_id: String,
    /// Starts at 1
    pub attempt_number: u32,
    pub timestamp: DateTime<Utc>,
    pub generated_pir: String,
    pub generation_duration: f64,
    pub is_approved: bool,
    pub review_duration: f64,
}

impl ReasoningLogEntry {
    /// Build an entry from measured durations.
    pub fn new(
        session_id: impl Into<String>,
        attempt_number: u32,
        timestamp: DateTime<Utc>,
        generated_pir: impl Into<String>,
        generation_duration: Duration,
        is_approved: bool,
        review_duration: Duration,
    ) -> Result<Self, DomainError> {
        let entry = Self {
            session_id: session_id.into(),
            attempt_number,
            timestamp,
            generated_pir: generated_pir.into(),
            generation_duration: generation_duration.as_secs_f64(),
            is_approved,
            review_duration: review_duration.as_secs_f64(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check the invariants that deserialized entries cannot guarantee
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.attempt_number < 1 {
            return Err(DomainError::InvalidLogEntry(
                "attempt_number must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("generation_duration", self.generation_duration),
            ("review_duration", self.review_duration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidLogEntry(format!(
                    "{} must be a non-negative number of seconds, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Combined generation and review time in seconds
    pub fn total_duration(&self) -> f64 {
        self.generation_duration + self.review_duration
    }
}

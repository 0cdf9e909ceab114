//! Domain error types

use crate::dialogue::context::ContextField;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid perspective: {0}")]
    InvalidPerspective(String),

    #[error("Invalid question type: {0}")]
    InvalidQuestionType(String),

    #[error("Missing required context: {}", format_fields(.0))]
    MissingRequiredContext(Vec<ContextField>),

    #[error("Invalid reasoning log entry: {0}")]
    InvalidLogEntry(String),
}

impl DomainError {
    /// Check if this error was raised while validating user-supplied input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidPerspective(_) | DomainError::InvalidQuestionType(_)
        )
    }
}

fn format_fields(fields: &[ContextField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

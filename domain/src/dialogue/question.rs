//! Clarifying question value objects

use crate::core::error::DomainError;
use crate::dialogue::context::{ContextField, ContextUpdate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a clarifying question is trying to pin down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Scope,
    Timeframe,
    TargetEntities,
    Actors,
    Focus,
    Confirmation,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Scope => "scope",
            QuestionType::Timeframe => "timeframe",
            QuestionType::TargetEntities => "target_entities",
            QuestionType::Actors => "actors",
            QuestionType::Focus => "focus",
            QuestionType::Confirmation => "confirmation",
        }
    }

    /// Context field this question targets, if any
    pub fn target_field(&self) -> Option<ContextField> {
        match self {
            QuestionType::Scope => Some(ContextField::Scope),
            QuestionType::Timeframe => Some(ContextField::Timeframe),
            QuestionType::TargetEntities => Some(ContextField::TargetEntities),
            QuestionType::Actors => Some(ContextField::ThreatActors),
            QuestionType::Focus => Some(ContextField::PriorityFocus),
            QuestionType::Confirmation => None,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scope" => Ok(QuestionType::Scope),
            "timeframe" => Ok(QuestionType::Timeframe),
            "target_entities" | "targets" => Ok(QuestionType::TargetEntities),
            "actors" | "threat_actors" => Ok(QuestionType::Actors),
            "focus" | "priority_focus" => Ok(QuestionType::Focus),
            "confirmation" => Ok(QuestionType::Confirmation),
            _ => Err(DomainError::InvalidQuestionType(s.to_string())),
        }
    }
}

/// A question posed to the analyst (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarifyingQuestion {
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_answers: Option<Vec<String>>,
}

impl ClarifyingQuestion {
    pub fn new(question_text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            question_text: question_text.into(),
            question_type,
            is_final: false,
            suggested_answers: None,
        }
    }

    pub fn final_question(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_suggested_answers<S: Into<String>>(
        mut self,
        answers: impl IntoIterator<Item = S>,
    ) -> Self {
        self.suggested_answers = Some(answers.into_iter().map(Into::into).collect());
        self
    }
}

/// A question together with the context extracted from the answer that prompted it.
///
/// The extracted context is left for the dialogue to merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub question: ClarifyingQuestion,
    pub extracted_context: ContextUpdate,
}

impl QuestionResult {
    pub fn new(question: ClarifyingQuestion) -> Self {
        Self {
            question,
            extracted_context: ContextUpdate::default(),
        }
    }

    pub fn with_extracted_context(mut self, update: ContextUpdate) -> Self {
        self.extracted_context = update;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clarifying_question_defaults() {
        let q = ClarifyingQuestion::new("What is the scope?", QuestionType::Scope);
        assert!(!q.is_final);
        assert!(q.suggested_answers.is_none());
    }

    #[test]
    fn test_final_question_with_suggestions() {
        let q = ClarifyingQuestion::new("Ready to proceed?", QuestionType::Confirmation)
            .final_question()
            .with_suggested_answers(["yes", "no"]);
        assert!(q.is_final);
        assert_eq!(q.suggested_answers.unwrap().len(), 2);
    }

    #[test]
    fn test_question_type_parse_aliases() {
        assert_eq!("threat_actors".parse::<QuestionType>().unwrap(), QuestionType::Actors);
        assert_eq!("FOCUS".parse::<QuestionType>().unwrap(), QuestionType::Focus);
        assert!("weather".parse::<QuestionType>().is_err());
    }

    #[test]
    fn test_question_type_target_field() {
        assert_eq!(QuestionType::Actors.target_field(), Some(ContextField::ThreatActors));
        assert_eq!(QuestionType::Confirmation.target_field(), None);
    }

    #[test]
    fn test_question_result_starts_without_updates() {
        let result = QuestionResult::new(ClarifyingQuestion::new("?", QuestionType::Scope));
        assert!(result.extracted_context.is_empty());
    }
}

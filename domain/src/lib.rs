//! Domain layer for pir-direction
//!
//! This crate contains the entities and value objects of the direction
//! dialogue. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Direction Dialogue
//!
//! An analyst describes an investigation in free text. Clarifying questions
//! fill a [`DialogueContext`] until scope, timeframe and target entities are
//! known; the analyst then confirms a summary and finally a generated
//! Priority Intelligence Requirement (PIR).
//!
//! ## Reasoning Log
//!
//! Every generate-then-review attempt produces a [`ReasoningLogEntry`].

pub mod core;
pub mod dialogue;
pub mod reasoning;

// Re-export commonly used types
pub use core::error::DomainError;
pub use dialogue::{
    context::{ContextField, ContextUpdate, DialogueContext},
    perspective::Perspective,
    question::{ClarifyingQuestion, QuestionResult, QuestionType},
    response::{DialogueAction, DialogueResponse},
    state::DialogueState,
};
pub use reasoning::{
    entry::ReasoningLogEntry,
    summary::{SessionSummary, session_attempts},
};

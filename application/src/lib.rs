//! Application layer for pir-direction
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DialogueParams;
pub use ports::{
    dialogue_service::{DialogueService, DialogueServiceError},
    pir_generator::PirGenerator,
    pir_reviewer::{PirReviewer, ReviewCapability, ReviewError},
    reasoning_logger::{NoReasoningLogger, ReasoningLogger},
    tool_invoker::{ToolInvocationError, ToolInvoker},
};
pub use use_cases::ai_orchestrator::{AiOrchestrator, OrchestratorError, ReviewedPir};
pub use use_cases::dialogue_flow::{ALREADY_COMPLETE_MESSAGE, DialogueError, DialogueFlow};
pub use use_cases::dialogue_sessions::{DialogueSessions, DialogueTurn, DialogueTurnOutput};
pub use use_cases::review_service::ReviewService;

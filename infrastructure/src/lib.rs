//! Infrastructure layer for pir-direction
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading, the JSONL
//! reasoning log, and tool-backed dialogue collaborators.

pub mod config;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_REASONING_LOG_PATH, FileConfig,
    FileDialogueConfig, FileReasoningLogConfig,
};
pub use logging::{JsonlReasoningLogger, LogReadError, read_reasoning_log};
pub use tools::{
    DIALOGUE_QUESTION_TOOL, GENERATE_PIR_TOOL, REVIEW_PIR_TOOL, ToolDialogueService,
    ToolPirGenerator, ToolReviewCapability, build_dialogue_sessions,
};

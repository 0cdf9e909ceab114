//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod dialogue;
mod reasoning_log;

pub use dialogue::FileDialogueConfig;
pub use reasoning_log::{DEFAULT_REASONING_LOG_PATH, FileReasoningLogConfig};

use crate::logging::JsonlReasoningLogger;
use pir_application::{DialogueParams, NoReasoningLogger, ReasoningLogger};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors found while validating a loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("dialogue.max_questions cannot be 0")]
    ZeroMaxQuestions,

    #[error("dialogue.max_retries cannot be 0")]
    ZeroMaxRetries,

    #[error("reasoning_log.path cannot be empty when logging is enabled")]
    EmptyLogPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Dialogue limits
    pub dialogue: FileDialogueConfig,
    /// Reasoning audit log
    pub reasoning_log: FileReasoningLogConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dialogue.max_questions == 0 {
            return Err(ConfigValidationError::ZeroMaxQuestions);
        }
        if self.dialogue.max_retries == 0 {
            return Err(ConfigValidationError::ZeroMaxRetries);
        }
        if self.reasoning_log.enabled && self.reasoning_log.path.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogPath);
        }
        Ok(())
    }

    pub fn to_dialogue_params(&self) -> DialogueParams {
        self.dialogue.to_params()
    }

    /// Reasoning logger for `[reasoning_log]`: the JSONL file when enabled,
    /// a no-op otherwise.
    pub fn reasoning_logger(&self) -> std::io::Result<Arc<dyn ReasoningLogger>> {
        if !self.reasoning_log.enabled {
            debug!("Reasoning log disabled");
            return Ok(Arc::new(NoReasoningLogger));
        }
        let path = self.reasoning_log.resolved_path();
        debug!("Reasoning log at {}", path.display());
        Ok(Arc::new(JsonlReasoningLogger::new(path)?))
    }
}

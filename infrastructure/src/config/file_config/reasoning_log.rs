//! Reasoning log configuration from TOML (`[reasoning_log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the reasoning log, relative to the working directory
pub const DEFAULT_REASONING_LOG_PATH: &str = "data/outputs/reasoning_log.jsonl";

/// Raw reasoning log configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReasoningLogConfig {
    /// Record generate/review attempts
    pub enabled: bool,
    /// JSONL file the attempts are appended to
    pub path: String,
}

impl Default for FileReasoningLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_REASONING_LOG_PATH.to_string(),
        }
    }
}

impl FileReasoningLogConfig {
    /// Path with a leading `~/` expanded to the home directory
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(rest) = self.path.strip_prefix("~/")
            && let Some(home) = dirs::home_dir()
        {
            return home.join(rest);
        }
        PathBuf::from(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileReasoningLogConfig::default();
        assert!(config.enabled);
        assert_eq!(config.resolved_path(), PathBuf::from(DEFAULT_REASONING_LOG_PATH));
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = FileReasoningLogConfig {
            enabled: true,
            path: "~/pir/log.jsonl".to_string(),
        };
        let resolved = config.resolved_path();
        assert!(!resolved.starts_with("~"));
        assert!(resolved.ends_with("pir/log.jsonl"));
    }
}

//! Configuration file loading for pir-direction
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PIR_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./pir-direction.toml` or `./.pir-direction.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/pir-direction/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_REASONING_LOG_PATH, FileConfig, FileDialogueConfig,
    FileReasoningLogConfig,
};
pub use loader::ConfigLoader;

//! Dialogue configuration from TOML (`[dialogue]` section)

use pir_application::DialogueParams;
use serde::{Deserialize, Serialize};

/// Raw dialogue configuration from TOML
///
/// # Example
///
/// ```toml
/// [dialogue]
/// max_questions = 15   # clarifying questions before the summary is forced
/// max_retries = 3      # generate/review attempts per PIR
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDialogueConfig {
    pub max_questions: u32,
    pub max_retries: u32,
}

impl Default for FileDialogueConfig {
    fn default() -> Self {
        let params = DialogueParams::default();
        Self {
            max_questions: params.max_questions,
            max_retries: params.max_retries,
        }
    }
}

impl FileDialogueConfig {
    pub fn to_params(&self) -> DialogueParams {
        DialogueParams::default()
            .with_max_questions(self.max_questions)
            .with_max_retries(self.max_retries)
    }
}

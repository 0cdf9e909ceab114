//! JSON output for scripting

use crate::output::formatter::OutputFormatter;
use pir_domain::{ReasoningLogEntry, SessionSummary};
use serde::Serialize;

/// Formats reasoning log views as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_sessions(&self, summaries: &[SessionSummary]) -> String {
        Self::to_json(summaries)
    }

    fn format_attempts(&self, _session_id: &str, attempts: &[ReasoningLogEntry]) -> String {
        Self::to_json(attempts)
    }
}

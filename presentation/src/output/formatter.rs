//! Output formatter trait

use pir_domain::{ReasoningLogEntry, SessionSummary};

/// Trait for formatting reasoning log views
pub trait OutputFormatter {
    /// Format the per-session overview
    fn format_sessions(&self, summaries: &[SessionSummary]) -> String;

    /// Format every attempt of one session
    fn format_attempts(&self, session_id: &str, attempts: &[ReasoningLogEntry]) -> String;
}

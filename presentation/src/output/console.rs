//! Console output formatter for reasoning logs

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use pir_domain::{ReasoningLogEntry, SessionSummary};
use std::path::PathBuf;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Formats reasoning log views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One line per session
    pub fn format_sessions(summaries: &[SessionSummary]) -> String {
        if summaries.is_empty() {
            return format!("{}\n", "No reasoning log entries found.".dimmed());
        }

        let mut output = String::new();
        output.push_str(&Self::header("PIR Reasoning Log"));
        output.push('\n');

        for summary in summaries {
            let verdict = if summary.approved {
                "approved".green().bold()
            } else {
                "unapproved".yellow().bold()
            };
            output.push_str(&format!(
                "{}  {}  {} attempt(s)  gen {:.2}s  review {:.2}s  {}\n",
                summary.session_id.cyan(),
                verdict,
                summary.attempts,
                summary.total_generation_secs,
                summary.total_review_secs,
                summary.first_seen.format(TIMESTAMP_FORMAT).to_string().dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Every attempt of one session with its PIR text
    pub fn format_attempts(session_id: &str, attempts: &[ReasoningLogEntry]) -> String {
        if attempts.is_empty() {
            return format!(
                "{} {}\n",
                "No attempts recorded for session".dimmed(),
                session_id
            );
        }

        let mut output = String::new();
        output.push_str(&Self::header(&format!("Session {}", session_id)));
        output.push('\n');

        for entry in attempts {
            let verdict = if entry.is_approved {
                "approved".green().bold()
            } else {
                "rejected".red().bold()
            };
            output.push_str(&Self::section_header(&format!(
                "Attempt {} ({})",
                entry.attempt_number, verdict
            )));
            output.push_str(&format!(
                "{} {}\n{} {:.2}s  {} {:.2}s\n\n",
                "Started:".cyan().bold(),
                entry.timestamp.format(TIMESTAMP_FORMAT),
                "Generation:".cyan().bold(),
                entry.generation_duration,
                "Review:".cyan().bold(),
                entry.review_duration
            ));
            output.push_str(&Self::indent(&entry.generated_pir, "  "));
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    /// Configuration file locations and whether each exists
    pub fn format_config_sources(sources: &[(String, PathBuf, bool)]) -> String {
        let mut output = format!("{}\n", "Configuration files:".cyan().bold());
        for (label, path, exists) in sources {
            let marker = if *exists {
                "found".green()
            } else {
                "missing".dimmed()
            };
            output.push_str(&format!("  {:<8} {} ({})\n", label, path.display(), marker));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_sessions(&self, summaries: &[SessionSummary]) -> String {
        Self::format_sessions(summaries)
    }

    fn format_attempts(&self, session_id: &str, attempts: &[ReasoningLogEntry]) -> String {
        Self::format_attempts(session_id, attempts)
    }
}

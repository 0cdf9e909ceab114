//! Reading reasoning logs back from disk.

use pir_domain::ReasoningLogEntry;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a reasoning log
#[derive(Error, Debug)]
pub enum LogReadError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Parse JSONL content into entries. Blank lines are skipped.
pub fn parse_reasoning_log(content: &str) -> Result<Vec<ReasoningLogEntry>, LogReadError> {
    let mut entries = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = |message: String| LogReadError::Malformed {
            line: index + 1,
            message,
        };
        let entry: ReasoningLogEntry =
            serde_json::from_str(line).map_err(|e| malformed(e.to_string()))?;
        entry.validate().map_err(|e| malformed(e.to_string()))?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Read and parse a reasoning log file
pub fn read_reasoning_log(path: impl AsRef<Path>) -> Result<Vec<ReasoningLogEntry>, LogReadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LogReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_reasoning_log(&content)
}

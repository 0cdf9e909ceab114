//! JSONL file writer for reasoning log entries.
//!
//! Each [`ReasoningLogEntry`] is serialized as a single JSON line and
//! appended to the file. Existing content is never truncated.

use pir_application::ports::reasoning_logger::ReasoningLogger;
use pir_domain::ReasoningLogEntry;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only JSONL reasoning logger.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Every entry is flushed as soon
/// as it is written.
pub struct JsonlReasoningLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlReasoningLogger {
    /// Open (or create) the log at the given path for appending.
    ///
    /// Creates parent directories if they don't exist.
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReasoningLogger for JsonlReasoningLogger {
    fn create_log(&self, entry: &ReasoningLogEntry) {
        let line = match serde_json::to_string(entry) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize reasoning log entry: {}", e);
                return;
            }
        };

        match self.writer.lock() {
            Ok(mut writer) => {
                if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                    warn!(
                        "Could not append to reasoning log {}: {}",
                        self.path.display(),
                        e
                    );
                }
            }
            Err(_) => warn!("Reasoning log writer lock poisoned"),
        }
    }
}

impl Drop for JsonlReasoningLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

//! Port for the reasoning audit log.
//!
//! Defines the [`ReasoningLogger`] trait for recording each generate-then-review
//! attempt to an append-only log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures machine-readable
//! attempt records.

use pir_domain::ReasoningLogEntry;

/// Port for appending reasoning log entries.
///
/// `create_log` is synchronous and non-fallible so that a broken log sink
/// never interrupts PIR generation. Implementations report their own failures.
pub trait ReasoningLogger: Send + Sync {
    fn create_log(&self, entry: &ReasoningLogEntry);
}

/// No-op implementation for when reasoning logging is disabled.
pub struct NoReasoningLogger;

impl ReasoningLogger for NoReasoningLogger {
    fn create_log(&self, _entry: &ReasoningLogEntry) {}
}

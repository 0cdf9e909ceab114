//! Logging infrastructure: reasoning audit log.
//!
//! Provides [`JsonlReasoningLogger`], a JSONL file writer that implements
//! the [`ReasoningLogger`](pir_application::ReasoningLogger) port, and
//! [`read_reasoning_log`] for reading the file back.

mod jsonl_reasoning_logger;
mod reader;

pub use jsonl_reasoning_logger::JsonlReasoningLogger;
pub use reader::{LogReadError, parse_reasoning_log, read_reasoning_log};

//! Tool invoker port
//!
//! Defines how the application reaches the external, LLM-backed tool layer
//! (question generation, PIR generation, PIR review). The transport behind it
//! (subprocess, network, in-process) is an adapter concern.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while invoking an external tool
#[derive(Error, Debug)]
pub enum ToolInvocationError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Tool '{tool}' failed: {message}")]
    ToolFailed { tool: String, message: String },

    #[error("Invalid tool response: {0}")]
    InvalidResponse(String),
}

/// Invokes a named tool with JSON arguments.
///
/// Tools that answer in plain text return [`Value::String`]; tools that
/// answer in JSON return the decoded value.
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolInvocationError>;
}

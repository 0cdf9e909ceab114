//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod dialogue_service;
pub mod pir_generator;
pub mod pir_reviewer;
pub mod reasoning_logger;
pub mod tool_invoker;

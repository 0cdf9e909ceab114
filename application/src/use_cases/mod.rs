//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ai_orchestrator;
pub mod dialogue_flow;
pub mod dialogue_sessions;
pub mod review_service;

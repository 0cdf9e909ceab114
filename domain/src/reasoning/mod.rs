//! Reasoning audit trail for generate-then-review runs.

pub mod entry;
pub mod summary;

//! Application-level configuration.
//!
//! - [`DialogueParams`]: question and retry limits

pub mod dialogue_params;

pub use dialogue_params::DialogueParams;

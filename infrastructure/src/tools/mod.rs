//! Tool-backed collaborators.
//!
//! Adapters that implement the dialogue ports by calling named tools through
//! a [`ToolInvoker`](pir_application::ToolInvoker):
//!
//! | Adapter | Port | Tool |
//! |---------|------|------|
//! | [`ToolDialogueService`] | `DialogueService` | `dialogue_question`, `generate_pir` |
//! | [`ToolPirGenerator`] | `PirGenerator` | `generate_pir` |
//! | [`ToolReviewCapability`] | `ReviewCapability` | `review_pir` |

mod dialogue_service;
mod payload;
mod pir_generator;
mod review_capability;

pub use dialogue_service::{ToolDialogueService, build_dialogue_sessions};
pub use pir_generator::ToolPirGenerator;
pub use review_capability::ToolReviewCapability;

/// Produces the next clarifying question
pub const DIALOGUE_QUESTION_TOOL: &str = "dialogue_question";
/// Produces a PIR document
pub const GENERATE_PIR_TOOL: &str = "generate_pir";
/// Judges a PIR document
pub const REVIEW_PIR_TOOL: &str = "review_pir";

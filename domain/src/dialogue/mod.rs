//! Direction dialogue domain.
//!
//! - [`context::DialogueContext`]: requirements gathered from the analyst
//! - [`perspective::Perspective`]: geopolitical viewpoint of the analysis
//! - [`question::ClarifyingQuestion`] / [`question::QuestionResult`]: per-turn questions
//! - [`state::DialogueState`]: phase of the dialogue
//! - [`response::DialogueResponse`]: what to show the analyst next

pub mod context;
pub mod perspective;
pub mod question;
pub mod response;
pub mod state;

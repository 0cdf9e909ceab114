//! Output formatting for reasoning log inspection

pub mod console;
pub mod formatter;
pub mod json;

//! Validation Engine
//!
//! Duplicate-tag and filter-option punctuation rules over document lines.

pub mod engine;
pub mod filter_block;
pub mod tags;

pub use engine::{ValidationResult, validate_document, validate_lines, validate_text};
pub use tags::TagTracker;

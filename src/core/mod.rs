//! Core Types
//!
//! Document text and the issues reported against it.

pub mod diagnostics;
pub mod document;

pub use diagnostics::{Issue, IssueKind};
pub use document::{DocumentText, split_lines};

//! Product Document Linter
//!
//! Checks the plain-text export of a product document.
//!
//! This library provides:
//! - Duplicate tag detection across the whole document
//! - Punctuation checks for "Filter Option" blocks
//! - Pluggable content fetchers (Drive export, local files)
//! - Configuration management

pub mod cli;
pub mod config;
pub mod core;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod runner;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use crate::core::{DocumentText, Issue, IssueKind};
pub use fetch::{ContentFetcher, FetchError};
pub use runner::{Report, validate_doc};
pub use validation::{ValidationResult, validate_lines, validate_text};

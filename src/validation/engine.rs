//! Validation Engine
//!
//! Single forward pass over the document lines. Line meaning comes from the
//! parser; the tag and filter-block rules live in their own modules.

use super::filter_block;
use super::tags::TagTracker;
use crate::core::{DocumentText, Issue};
use crate::parser::{LineKind, classify_line, is_product_header};

/// Result of validating a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub issues: Vec<Issue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Rendered issue strings, in discovery order
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Validate a sequence of lines
///
/// Product context follows the latest product header. A tags marker consumes
/// itself and the data line after it; a filter-option marker consumes its
/// block, and the line that ended the block is looked at again.
pub fn validate_lines<S: AsRef<str>>(lines: &[S]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut tags = TagTracker::new();
    let mut product: Option<String> = None;
    let mut pos = 0;

    while pos < lines.len() {
        let line = lines[pos].as_ref().trim();

        if is_product_header(line) {
            product = Some(line.to_string());
        }

        match classify_line(line) {
            LineKind::TagsMarker => {
                if let Some(data_line) = lines.get(pos + 1) {
                    tags.record_line(data_line.as_ref(), pos + 2, product.as_deref(), &mut result);
                }
                pos += 2;
            }
            LineKind::FilterOptionMarker => {
                pos = filter_block::scan_block(lines, pos + 1, product.as_deref(), &mut result);
            }
            _ => pos += 1,
        }
    }

    log::debug!(
        "validated {} line(s): {} issue(s), {} distinct tag(s)",
        lines.len(),
        result.issues.len(),
        tags.len()
    );
    result
}

/// Validate an already split document
pub fn validate_document(document: &DocumentText) -> ValidationResult {
    validate_lines(document.lines())
}

/// Validate decoded text
pub fn validate_text(text: &str) -> ValidationResult {
    validate_document(&DocumentText::from_text(text))
}

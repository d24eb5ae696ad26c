//! Issues
//!
//! Human-readable findings produced by a validation pass.

use std::fmt;

use serde::Serialize;

/// Marker prefixed to every rendered issue
pub const FAILURE_MARKER: &str = "❌";

/// Label used when an issue is raised before any product header was seen
pub const NO_PRODUCT: &str = "None";

/// Category of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    DuplicateTag,
    InvalidComma,
    InvalidParenthesis,
    RetrievalFailure,
}

/// A single finding, in the order it was discovered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    /// 1-based line number, absent for retrieval failures
    pub line: Option<usize>,
    pub message: String,
}

impl Issue {
    pub fn duplicate_tag(tag: &str, product: Option<&str>, line: usize) -> Self {
        Self {
            kind: IssueKind::DuplicateTag,
            line: Some(line),
            message: format!(
                "Duplicate tag '{}' found in '{}' (line {})",
                tag,
                product_label(product),
                line
            ),
        }
    }

    pub fn invalid_comma(text: &str, product: Option<&str>, line: usize) -> Self {
        Self {
            kind: IssueKind::InvalidComma,
            line: Some(line),
            message: format!(
                "INVALID COMMA in Filter Option under '{}': '{}' (line {})",
                product_label(product),
                text,
                line
            ),
        }
    }

    pub fn invalid_parenthesis(text: &str, product: Option<&str>, line: usize) -> Self {
        Self {
            kind: IssueKind::InvalidParenthesis,
            line: Some(line),
            message: format!(
                "INVALID PARENTHESIS in Filter Option under '{}': '{}' (line {})",
                product_label(product),
                text,
                line
            ),
        }
    }

    pub fn retrieval_failure(error: impl fmt::Display) -> Self {
        Self {
            kind: IssueKind::RetrievalFailure,
            line: None,
            message: format!("Failed to download document: {}", error),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", FAILURE_MARKER, self.message)
    }
}

fn product_label(product: Option<&str>) -> &str {
    product.unwrap_or(NO_PRODUCT)
}

//! Line Classifier
//!
//! Decides what a trimmed line means structurally. All keyword matching is
//! a case-insensitive prefix (or, for the tags marker, substring) test.

/// Prefixes of structural lines; anything else non-empty names a product
pub const RESERVED_PREFIXES: &[&str] = &[
    "required information",
    "row",
    "allowed",
    "category",
    "tags",
    "variation type",
    "filter option",
];

/// Prefixes that end a filter-option block
///
/// Unlike [`RESERVED_PREFIXES`] this list has no `variation type`, so such a
/// line is scanned as block content.
pub const FILTER_BLOCK_TERMINATORS: &[&str] = &[
    "required information",
    "row",
    "allowed",
    "category",
    "tags",
    "filter option",
];

/// Substring that marks a tag declaration line
pub const TAGS_MARKER: &str = "tags (comma";

/// Prefix that opens a filter-option block
pub const FILTER_OPTION_MARKER: &str = "filter option:";

/// Structural meaning of a trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    /// Declares that the next line holds a comma-separated tag list
    TagsMarker,
    /// Opens a filter-option block
    FilterOptionMarker,
    /// Any other reserved keyword line
    Reserved,
    ProductHeader,
}

/// Classify a trimmed line
///
/// The markers take precedence over product detection. A line can still be
/// a product header and a tags marker at once, see [`is_product_header`].
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::Empty;
    }

    let lower = line.to_lowercase();
    if lower.contains(TAGS_MARKER) {
        LineKind::TagsMarker
    } else if lower.starts_with(FILTER_OPTION_MARKER) {
        LineKind::FilterOptionMarker
    } else if starts_with_any(&lower, RESERVED_PREFIXES) {
        LineKind::Reserved
    } else {
        LineKind::ProductHeader
    }
}

/// Whether a trimmed line names a new product
pub fn is_product_header(line: &str) -> bool {
    !line.is_empty() && !starts_with_any(&line.to_lowercase(), RESERVED_PREFIXES)
}

/// Whether a trimmed line ends the filter-option block it follows
pub fn ends_filter_block(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || starts_with_any(&line.to_lowercase(), FILTER_BLOCK_TERMINATORS)
}

fn starts_with_any(lower: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| lower.starts_with(prefix))
}

//! Document Line Parser
//!
//! Structural classification of exported document lines.
//! Knows the fixed keyword layout and nothing about validation rules.

pub mod classifier;

pub use classifier::{LineKind, classify_line, ends_filter_block, is_product_header};

/// Split a tag-data line into normalized tags, in order
///
/// Pieces are trimmed, empty pieces dropped, and the rest lowercased.
pub fn parse_tag_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_lowercase)
        .collect()
}

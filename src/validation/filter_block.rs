//! Filter Block Scanner
//!
//! Checks the content lines of a "Filter Option:" block for punctuation
//! that the storefront cannot accept.

use super::engine::ValidationResult;
use crate::core::Issue;
use crate::parser::ends_filter_block;

/// Typographic low comma, accepted in place of a plain comma
pub const LOW_COMMA: char = '\u{201a}';

/// Scan block content starting at `start`, the line after the marker
///
/// Returns the index of the line that ended the block (or `lines.len()`).
/// That line is not consumed.
pub fn scan_block<S: AsRef<str>>(
    lines: &[S],
    start: usize,
    product: Option<&str>,
    result: &mut ValidationResult,
) -> usize {
    let mut pos = start;

    while pos < lines.len() {
        let line = lines[pos].as_ref().trim();
        if ends_filter_block(line) {
            break;
        }

        check_line(line, pos + 1, product, result);
        pos += 1;
    }

    log::debug!(
        "filter block at line {} covered {} line(s)",
        start,
        pos - start
    );
    pos
}

/// Check one trimmed content line
///
/// A line may raise both issues; the comma issue comes first.
pub fn check_line(
    line: &str,
    line_num: usize,
    product: Option<&str>,
    result: &mut ValidationResult,
) {
    if line.contains(',') && !line.contains(LOW_COMMA) {
        result.push(Issue::invalid_comma(line, product, line_num));
    }
    if line.contains(['(', ')']) {
        result.push(Issue::invalid_parenthesis(line, product, line_num));
    }
}

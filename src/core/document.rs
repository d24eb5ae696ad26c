//! Document Text
//!
//! Decoded document content split into lines once, up front.

const BYTE_ORDER_MARK: char = '\u{feff}';

/// An exported document as an immutable sequence of lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentText {
    lines: Vec<String>,
}

impl DocumentText {
    /// Build from decoded text, stripping a leading byte-order mark
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        Self {
            lines: split_lines(text).map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split text on every universal line boundary
///
/// `\r\n` counts as a single boundary and a trailing terminator does not
/// produce a final empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    SplitLines { rest: text }
}

struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|&(_, c)| is_line_boundary(c)) {
            Some((idx, ch)) => {
                let line = &self.rest[..idx];
                let mut end = idx + ch.len_utf8();
                if ch == '\r' && self.rest[end..].starts_with('\n') {
                    end += 1;
                }
                self.rest = &self.rest[end..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mixed_line_endings() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let lines: Vec<&str> = split_lines("a\nb\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines: Vec<&str> = split_lines("a\n\n\nb").collect();
        assert_eq!(lines, vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_unicode_separators() {
        let lines: Vec<&str> = split_lines("a\u{2028}b\u{0c}c").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        let doc = DocumentText::from_text("");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let doc = DocumentText::from_text("\u{feff}Widget A\r\nRow 1");
        assert_eq!(doc.lines(), &["Widget A".to_string(), "Row 1".to_string()]);
        assert_eq!(doc.len(), 2);
    }
}

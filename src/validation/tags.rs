//! Tag Tracker
//!
//! Remembers every tag declared so far in the document and flags repeats.
//! The set is global: a tag first seen under one product is a duplicate
//! under any later product.

use std::collections::HashSet;

use super::engine::ValidationResult;
use crate::core::Issue;
use crate::parser::parse_tag_list;

#[derive(Debug, Default)]
pub struct TagTracker {
    seen: HashSet<String>,
}

impl TagTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tags on a tag-data line, reporting each repeat
    ///
    /// `line_num` is the 1-based number of the data line itself.
    pub fn record_line(
        &mut self,
        data_line: &str,
        line_num: usize,
        product: Option<&str>,
        result: &mut ValidationResult,
    ) {
        let tags = parse_tag_list(data_line);
        log::debug!("line {}: {} tag(s) declared", line_num, tags.len());

        for tag in tags {
            if self.seen.contains(&tag) {
                result.push(Issue::duplicate_tag(&tag, product, line_num));
            } else {
                self.seen.insert(tag);
            }
        }
    }

    /// Whether a normalized tag has been seen
    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

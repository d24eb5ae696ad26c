//! Document Runner
//!
//! Fetches a document, keeps a verbatim copy on disk, and validates it.
//! Retrieval failures become a single issue; only local I/O on the output
//! file is reported as an error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{DocumentText, Issue};
use crate::fetch::{ContentFetcher, FetchError};
use crate::validation::{ValidationResult, validate_document};

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub document: String,
    pub is_valid: bool,
    pub issues: Vec<Issue>,
}

impl Report {
    fn from_validation(document: &str, result: ValidationResult) -> Self {
        Self {
            document: document.to_string(),
            is_valid: result.is_valid(),
            issues: result.issues,
        }
    }

    fn retrieval_failure(document: &str, error: &FetchError) -> Self {
        Self {
            document: document.to_string(),
            is_valid: false,
            issues: vec![Issue::retrieval_failure(error)],
        }
    }

    /// Rendered issue strings, in discovery order
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// The `(verdict, issues)` pair
    pub fn into_parts(self) -> (bool, Vec<String>) {
        let messages = self.messages();
        (self.is_valid, messages)
    }
}

/// Fetch, persist and validate a document
///
/// On a successful fetch the raw bytes are written to `output_path` before
/// anything is parsed. A failed fetch writes nothing.
pub fn validate_doc(
    fetcher: &dyn ContentFetcher,
    document_id: &str,
    output_path: &Path,
) -> Result<Report> {
    let bytes = match fetcher.fetch(document_id) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Failed to retrieve {}: {}", document_id, e);
            return Ok(Report::retrieval_failure(document_id, &e));
        }
    };

    fs::write(output_path, &bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    log::info!("Saved {} bytes to {}", bytes.len(), output_path.display());

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            let error = FetchError::from(e);
            log::warn!("Failed to decode {}: {}", document_id, error);
            return Ok(Report::retrieval_failure(document_id, &error));
        }
    };

    let document = DocumentText::from_text(&text);
    let result = validate_document(&document);
    Ok(Report::from_validation(document_id, result))
}

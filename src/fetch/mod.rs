//! Content Fetchers
//!
//! Resolve a document identifier to the raw bytes of its plain-text
//! export. Validation only ever sees the [`ContentFetcher`] trait.

pub mod drive;
pub mod local;

use std::io;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub use drive::{Credentials, DriveExportFetcher};
pub use local::LocalFileFetcher;

/// Why a document could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no usable access token: {0}")]
    Credentials(String),
    #[error("export returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("exported content is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Something that can produce the plain-text export of a document
pub trait ContentFetcher {
    fn fetch(&self, document_id: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F> ContentFetcher for F
where
    F: Fn(&str) -> Result<Vec<u8>, FetchError>,
{
    fn fetch(&self, document_id: &str) -> Result<Vec<u8>, FetchError> {
        self(document_id)
    }
}

static DOCUMENT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([A-Za-z0-9_-]+)").unwrap());
static DOCUMENT_QUERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([A-Za-z0-9_-]+)").unwrap());

/// Extract a document id from a bare id or a sharing URL
///
/// `https://docs.google.com/document/d/<id>/edit` and `...?id=<id>` both
/// resolve to `<id>`; anything else is returned trimmed, unchanged.
pub fn document_id_from_input(input: &str) -> String {
    let input = input.trim();
    if !input.contains("://") {
        return input.to_string();
    }

    for re in [&*DOCUMENT_PATH_RE, &*DOCUMENT_QUERY_RE] {
        if let Some(id) = re.captures(input).and_then(|c| c.get(1)) {
            return id.as_str().to_string();
        }
    }

    input.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id_is_unchanged() {
        assert_eq!(document_id_from_input("  1AbC_d-9  "), "1AbC_d-9");
    }

    #[test]
    fn test_id_from_docs_url() {
        assert_eq!(
            document_id_from_input("https://docs.google.com/document/d/1AbC_d-9/edit#heading=h.x"),
            "1AbC_d-9"
        );
    }

    #[test]
    fn test_id_from_open_url() {
        assert_eq!(
            document_id_from_input("https://drive.google.com/open?id=1XyZ"),
            "1XyZ"
        );
    }

    #[test]
    fn test_unrecognised_url_is_kept() {
        let url = "https://example.com/export.txt";
        assert_eq!(document_id_from_input(url), url);
    }

    #[test]
    fn test_closure_fetcher() {
        let fetcher = |id: &str| -> Result<Vec<u8>, FetchError> { Ok(id.as_bytes().to_vec()) };
        assert_eq!(fetcher.fetch("doc").unwrap(), b"doc".to_vec());
    }

    #[test]
    fn test_io_error_names_path() {
        let err = FetchError::Io {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "could not read missing.txt: not found");
    }
}

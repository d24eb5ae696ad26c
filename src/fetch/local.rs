//! Local File Fetcher
//!
//! Reads documents that were already exported to plain text.

use std::fs;
use std::path::PathBuf;

use super::{ContentFetcher, FetchError};

/// Treats the document identifier as a file path
#[derive(Debug, Clone, Default)]
pub struct LocalFileFetcher {
    base_dir: Option<PathBuf>,
}

impl LocalFileFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative identifiers against `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    pub fn resolve(&self, document_id: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(document_id),
            None => PathBuf::from(document_id),
        }
    }
}

impl ContentFetcher for LocalFileFetcher {
    fn fetch(&self, document_id: &str) -> Result<Vec<u8>, FetchError> {
        let path = self.resolve(document_id);
        log::info!("Reading exported document from {}", path.display());
        fs::read(&path).map_err(|source| FetchError::Io { path, source })
    }
}

//! Drive Export Fetcher
//!
//! Downloads the plain-text export of a document over the Drive v3 REST
//! API. Getting the OAuth access token is left to the caller (for instance
//! `gcloud auth print-access-token > token`).

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use super::{ContentFetcher, FetchError};

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/drive/v3";
pub const EXPORT_MIME_TYPE: &str = "text/plain";

/// Longest slice of an error body kept in a [`FetchError::Status`]
const MAX_ERROR_BODY: usize = 200;

/// Where the bearer token comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Credentials {
    Token(String),
    /// File whose first non-empty line is the token
    TokenFile(PathBuf),
}

impl Credentials {
    /// Resolve to a bearer token
    pub fn access_token(&self) -> Result<String, FetchError> {
        match self {
            Credentials::Token(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            Credentials::Token(_) => Err(FetchError::Credentials("access token is empty".into())),
            Credentials::TokenFile(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    FetchError::Credentials(format!("{}: {}", path.display(), e))
                })?;
                content
                    .lines()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        FetchError::Credentials(format!("{} holds no token", path.display()))
                    })
            }
        }
    }
}

/// Fetcher that exports documents through the Drive API
pub struct DriveExportFetcher {
    endpoint: String,
    credentials: Credentials,
    agent: ureq::Agent,
}

impl DriveExportFetcher {
    pub fn new(endpoint: &str, credentials: Credentials, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credentials,
            agent,
        }
    }

    /// Export URL for a document, without the query string
    pub fn export_url(&self, document_id: &str) -> String {
        format!("{}/files/{}/export", self.endpoint, document_id)
    }
}

impl ContentFetcher for DriveExportFetcher {
    fn fetch(&self, document_id: &str) -> Result<Vec<u8>, FetchError> {
        let token = self.credentials.access_token()?;
        let url = self.export_url(document_id);
        log::info!("Exporting {} as {}", url, EXPORT_MIME_TYPE);

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", token))
            .query("mimeType", EXPORT_MIME_TYPE)
            .call()?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(bytes)
    }
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                FetchError::Status {
                    status,
                    message: truncate(body.trim(), MAX_ERROR_BODY),
                }
            }
            ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

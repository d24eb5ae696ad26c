//! Configuration management for the document linter.
//!
//! Handles:
//! - Command-line argument parsing
//! - The optional `.doclint.toml` project file
//! - The access token environment variable

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::document_id_from_input;
use crate::fetch::drive::{Credentials, DEFAULT_ENDPOINT};
use crate::output::OutputFormat;

pub const PLACEHOLDER_DOCUMENT: &str = "your-google-doc-file-id";
pub const DEFAULT_OUTPUT: &str = "output.txt";
pub const DEFAULT_PROJECT_CONFIG: &str = ".doclint.toml";
pub const ACCESS_TOKEN_ENV: &str = "DOCLINT_ACCESS_TOKEN";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where document content is read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Export through the Drive API
    #[default]
    Drive,
    /// Read an already exported text file
    Local,
}

/// Command-line arguments for the document linter
#[derive(Debug, Parser)]
#[command(name = "doclint")]
#[command(about = "Checks exported product documents for duplicate tags and invalid filter options")]
#[command(version)]
pub struct Args {
    /// Document id, sharing URL, or (with `--source local`) file path
    pub document: Option<String>,

    #[arg(long, value_enum, help = "Where to read the document from")]
    pub source: Option<Source>,

    #[arg(long, help = "File holding an OAuth access token")]
    pub credentials: Option<PathBuf>,

    #[arg(short, long, help = "Where to save the raw exported text")]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, help = "Report format")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Drive API base URL")]
    pub endpoint: Option<String>,

    #[arg(long, help = "HTTP timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value = DEFAULT_PROJECT_CONFIG, help = "Project configuration file")]
    pub config: PathBuf,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Settings read from the project configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub document: Option<String>,
    pub source: Option<Source>,
    pub credentials: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ProjectConfig {
    /// Load a project file; a missing file yields `None`
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid project config {}", path.display()))?;
        Ok(Some(config))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Document identifier, already extracted from any URL
    pub document: String,
    pub source: Source,
    pub credentials: Credentials,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub endpoint: String,
    pub timeout: Duration,
    pub log_level: String,
    /// Project file that was actually read, if any
    pub project_config: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments and environment
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args_with_token(Args::parse(), env::var(ACCESS_TOKEN_ENV).ok())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Self::from_args_with_token(args, None)
    }

    /// Create configuration with an access token taken from the environment
    ///
    /// The token is used unless `--credentials` was given on the command line.
    pub fn from_args_with_token(args: Args, env_token: Option<String>) -> Result<Self> {
        let loaded = ProjectConfig::load(&args.config)?;
        let project_config = loaded.as_ref().map(|_| args.config.clone());
        let project = loaded.unwrap_or_default();

        let env_token = env_token.filter(|token| !token.trim().is_empty());
        let credentials = match (args.credentials, env_token) {
            (Some(path), _) => Credentials::TokenFile(path),
            (None, Some(token)) => Credentials::Token(token),
            (None, None) => {
                Credentials::TokenFile(project.credentials.unwrap_or_else(default_token_file))
            }
        };

        let document = args
            .document
            .or(project.document)
            .unwrap_or_else(|| PLACEHOLDER_DOCUMENT.to_string());
        let source = args.source.or(project.source).unwrap_or_default();

        // local paths are taken verbatim
        let document = match source {
            Source::Drive => document_id_from_input(&document),
            Source::Local => document,
        };

        Ok(Config {
            document,
            source,
            credentials,
            output: args
                .output
                .or(project.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            format: args.format.or(project.format).unwrap_or_default(),
            endpoint: args
                .endpoint
                .or(project.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: Duration::from_secs(
                args.timeout_secs
                    .or(project.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            log_level: args.log_level,
            project_config,
        })
    }
}

/// `<config dir>/doclint/access_token`, or `access_token` in the working directory
fn default_token_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("doclint").join("access_token"))
        .unwrap_or_else(|| PathBuf::from("access_token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("doclint").chain(argv.iter().copied()))
            .expect("parse args")
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(args(&["--config", "/nonexistent/.doclint.toml"]))
            .expect("create config");

        assert_eq!(config.document, PLACEHOLDER_DOCUMENT);
        assert_eq!(config.source, Source::Drive);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.project_config, None);
        assert!(matches!(config.credentials, Credentials::TokenFile(_)));
    }

    #[test]
    fn test_document_url_is_reduced_to_id() {
        let config = Config::from_args(args(&[
            "--config",
            "/nonexistent/.doclint.toml",
            "https://docs.google.com/document/d/1AbC/edit",
        ]))
        .expect("create config");
        assert_eq!(config.document, "1AbC");
    }

    #[test]
    fn test_local_document_is_verbatim() {
        let config = Config::from_args(args(&[
            "--config",
            "/nonexistent/.doclint.toml",
            "--source",
            "local",
            "exports/d/abc.txt",
        ]))
        .expect("create config");
        assert_eq!(config.document, "exports/d/abc.txt");
    }

    #[test]
    fn test_env_token_unless_credentials_flag() {
        let config = Config::from_args_with_token(
            args(&["--config", "/nonexistent/.doclint.toml"]),
            Some("ya29.env".into()),
        )
        .expect("create config");
        assert_eq!(config.credentials, Credentials::Token("ya29.env".into()));

        let config = Config::from_args_with_token(
            args(&[
                "--config",
                "/nonexistent/.doclint.toml",
                "--credentials",
                "token.txt",
            ]),
            Some("ya29.env".into()),
        )
        .expect("create config");
        assert_eq!(
            config.credentials,
            Credentials::TokenFile(PathBuf::from("token.txt"))
        );
    }
}

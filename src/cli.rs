//! Command-line entry point.
//!
//! Loads configuration, sets up logging, picks a fetcher and prints the
//! report.

use anyhow::Result;

use crate::Config;
use crate::config::Source;
use crate::fetch::{ContentFetcher, DriveExportFetcher, LocalFileFetcher};
use crate::output::render;
use crate::runner::{Report, validate_doc};

/// Run the linter from command-line arguments and print the report
pub fn run() -> Result<()> {
    let config = Config::from_args_and_env()?;
    init_logging(&config.log_level);
    if let Some(path) = &config.project_config {
        log::debug!("Loaded project config from {}", path.display());
    }

    let report = run_with_config(&config)?;
    println!("{}", render(&report, config.format)?);

    Ok(())
}

/// Validate the configured document
pub fn run_with_config(config: &Config) -> Result<Report> {
    let fetcher = build_fetcher(config);
    log::info!("Validating {} from {:?}", config.document, config.source);
    validate_doc(fetcher.as_ref(), &config.document, &config.output)
}

fn build_fetcher(config: &Config) -> Box<dyn ContentFetcher> {
    match config.source {
        Source::Drive => Box::new(DriveExportFetcher::new(
            &config.endpoint,
            config.credentials.clone(),
            config.timeout,
        )),
        Source::Local => Box::new(LocalFileFetcher::new()),
    }
}

/// `RUST_LOG` wins over the configured level
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

//! Report rendering for the command line.

use anyhow::Result;
use clap::ValueEnum;
use serde::Deserialize;

use crate::runner::Report;

pub const SUCCESS_LINE: &str = "✅ All checks passed.";
pub const FAILURE_HEADER: &str = "❌ Issues found:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a report, one line per entry, without a trailing newline
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_text(report: &Report) -> String {
    if report.is_valid {
        return SUCCESS_LINE.to_string();
    }

    let mut lines = vec![FAILURE_HEADER.to_string()];
    lines.extend(report.messages());
    lines.join("\n")
}

//! Wiring of file repositories, the report service and output.

use crate::application::services::{ClickReport, ReportService};
use crate::config::Config;
use crate::domain::entities::UrlClicks;
use crate::domain::{DiagnosticsSink, TracingSink};
use crate::error::AppError;
use crate::infrastructure::files::{CsvLinkRepository, JsonClickRepository};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Builds the click report from the files named in `config`.
///
/// # Errors
///
/// Returns the first fatal [`AppError`] raised while loading either file.
pub fn build_report(
    config: &Config,
    sink: &mut dyn DiagnosticsSink,
) -> Result<ClickReport, AppError> {
    let service = ReportService::new(
        CsvLinkRepository::new(&config.encodes_path),
        JsonClickRepository::new(&config.decodes_path),
        config.target_year,
    );

    service.generate(sink)
}

/// Renders the ranked list as pretty-printed JSON (two-space indent).
pub fn render_report(results: &[UrlClicks]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Runs the report end to end and prints it to stdout.
///
/// Record-level warnings are logged through [`TracingSink`].
///
/// # Errors
///
/// Returns an error if either input cannot be loaded or the report cannot
/// be serialized. Nothing is printed in that case.
pub fn run(config: &Config) -> Result<()> {
    tracing::info!(
        encodes = %config.encodes_path.display(),
        decodes = %config.decodes_path.display(),
        year = config.target_year,
        "Starting click counting"
    );

    let report = build_report(config, &mut TracingSink)
        .inspect_err(|e| tracing::error!(code = e.code(), "Application error: {e}"))?;

    if config.print_summary {
        report.stats.log_summary(config.target_year);
    }

    let output = render_report(&report.results).context("Failed to serialize report")?;
    println!("{output}");

    Ok(())
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// # Errors
///
/// Returns an error if the level directive is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log level '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.is_json_logging() {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;
    }

    Ok(())
}

//! Run configuration assembled from command-line flags.
//!
//! Configuration is built once at startup and validated before any input is
//! read. No environment variables are consulted.
//!
//! ## Options
//!
//! - `--encodes` - Encodes CSV path (default: `encodes.csv`)
//! - `--decodes` - Decodes JSON path (default: `decodes.json`)
//! - `--year` - Target calendar year (default: `2021`)
//! - `--log-level` - Log filter directive (default: `warn`)
//! - `--log-format` - Log format: `text` or `json` (default: `text`)
//! - `--summary` - Log run counters at `info` after the report is built

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_ENCODES_PATH: &str = "encodes.csv";
pub const DEFAULT_DECODES_PATH: &str = "decodes.json";
pub const DEFAULT_TARGET_YEAR: i32 = 2021;
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Report run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub encodes_path: PathBuf,
    pub decodes_path: PathBuf,
    /// Calendar year clicks must fall in, read in each click's own offset.
    pub target_year: i32,
    pub log_level: String,
    pub log_format: String,
    /// When true, run counters are logged once the report is built.
    pub print_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encodes_path: PathBuf::from(DEFAULT_ENCODES_PATH),
            decodes_path: PathBuf::from(DEFAULT_DECODES_PATH),
            target_year: DEFAULT_TARGET_YEAR,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            print_summary: false,
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either input path is empty
    /// - `target_year` is outside `1..=9999`
    /// - `log_format` is not `text` or `json`
    /// - `log_level` is not a valid filter directive
    pub fn validate(&self) -> Result<()> {
        if self.encodes_path.as_os_str().is_empty() {
            anyhow::bail!("Encodes path must not be empty");
        }

        if self.decodes_path.as_os_str().is_empty() {
            anyhow::bail!("Decodes path must not be empty");
        }

        if !(1..=9999).contains(&self.target_year) {
            anyhow::bail!(
                "Target year must be between 1 and 9999, got {}",
                self.target_year
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "Log format must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            anyhow::bail!("Invalid log level '{}': {}", self.log_level, e);
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs the effective configuration at `debug`.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Encodes: {}", self.encodes_path.display());
        tracing::debug!("  Decodes: {}", self.decodes_path.display());
        tracing::debug!("  Target year: {}", self.target_year);
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

//! Command-line entry point for click-counter.
//!
//! Prints the ranked per-URL click report for the target year as JSON on
//! stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Default inputs (encodes.csv, decodes.json) and year 2021
//! cargo run
//!
//! # Explicit inputs and year, with a run summary
//! cargo run -- --encodes data/encodes.csv --decodes data/decodes.json --year 2020 --summary --log-level info
//! ```
//!
//! Exits non-zero if an input file is missing, the decodes file is not a JSON
//! array, or the encodes header lacks required columns.

use click_counter::config::{
    Config, DEFAULT_DECODES_PATH, DEFAULT_ENCODES_PATH, DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL,
    DEFAULT_TARGET_YEAR,
};
use click_counter::runner;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Count short-link clicks per destination URL for a single year.
#[derive(Parser)]
#[command(name = "click-counter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Encodes CSV with `long_url` and `hash` columns
    #[arg(short, long, default_value = DEFAULT_ENCODES_PATH)]
    encodes: PathBuf,

    /// Decodes JSON array of click events
    #[arg(short, long, default_value = DEFAULT_DECODES_PATH)]
    decodes: PathBuf,

    /// Calendar year to count clicks for
    #[arg(short, long, default_value_t = DEFAULT_TARGET_YEAR)]
    year: i32,

    /// Log filter directive (e.g. "info", "click_counter=debug")
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log output format
    #[arg(long, default_value = DEFAULT_LOG_FORMAT, value_parser = ["text", "json"])]
    log_format: String,

    /// Log run counters once the report is built
    #[arg(long)]
    summary: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            encodes_path: cli.encodes,
            decodes_path: cli.decodes,
            target_year: cli.year,
            log_level: cli.log_level,
            log_format: cli.log_format,
            print_summary: cli.summary,
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    config.validate()?;

    runner::init_tracing(&config)?;
    config.print_summary();

    runner::run(&config)
}

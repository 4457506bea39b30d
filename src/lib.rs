//! # Click Counter
//!
//! Ranks destination URLs by how many times their short links were clicked
//! in a single calendar year.
//!
//! ## Architecture
//!
//! The crate keeps the layer split of a shortener service, scaled down to a
//! synchronous batch job:
//!
//! - **Domain Layer** ([`domain`]) - Entities, skip diagnostics and repository traits
//! - **Application Layer** ([`application`]) - Pipeline stages and report orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - CSV and JSON file readers
//! - **Runner** ([`runner`]) - Wiring, logging setup and output
//!
//! ## Pipeline
//!
//! 1. Load `hash -> long_url` from the encodes CSV
//! 2. Load click events from the decodes JSON
//! 3. Keep clicks whose timestamp falls in the target year
//! 4. Count clicks per hash
//! 5. Join counts to long URLs, dropping unknown hashes
//! 6. Sort by count, descending and stable on ties
//!
//! Malformed rows and events are skipped with a warning; a missing file, an
//! encodes header without `long_url`/`hash`, or a decodes file that is not a
//! JSON array aborts the run with an [`AppError`].
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --encodes encodes.csv --decodes decodes.json --year 2021
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod runner;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ClickReport, ReportService, RunStats};
    pub use crate::config::Config;
    pub use crate::domain::entities::{ClickEvent, IdentifierMap, LinkRecord, UrlClicks};
    pub use crate::domain::{DiagnosticsSink, RecordSource, SkipReason, Skipped, TracingSink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::files::{CsvLinkRepository, JsonClickRepository};
}

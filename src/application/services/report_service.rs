//! Click report orchestration.

use crate::application::pipeline::{count_clicks, filter_by_year, join_with_links, rank_by_clicks};
use crate::domain::DiagnosticsSink;
use crate::domain::entities::UrlClicks;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Counters describing a single report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub encode_rows: usize,
    pub mappings: usize,
    pub encode_warnings: usize,
    pub decode_events: usize,
    pub valid_events: usize,
    pub decode_warnings: usize,
    pub events_in_year: usize,
    pub unique_hashes: usize,
    pub unmatched_hashes: usize,
}

impl RunStats {
    /// Logs the run counters at `info`.
    pub fn log_summary(&self, target_year: i32) {
        tracing::info!("Run summary:");
        tracing::info!(
            "  Encode rows: {} ({} mappings, {} warnings)",
            self.encode_rows,
            self.mappings,
            self.encode_warnings
        );
        tracing::info!(
            "  Decode events: {} ({} valid, {} warnings)",
            self.decode_events,
            self.valid_events,
            self.decode_warnings
        );
        tracing::info!("  Clicks in {}: {}", target_year, self.events_in_year);
        tracing::info!("  Unique hashes clicked: {}", self.unique_hashes);
        tracing::info!("  Unmatched hashes: {}", self.unmatched_hashes);
    }
}

/// Result of a report run: the ranked list plus run counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickReport {
    pub results: Vec<UrlClicks>,
    pub stats: RunStats,
}

/// Builds the ranked per-URL click report for one target year.
///
/// Runs load encodes → load decodes → year filter → count → join → rank.
/// File-level failures abort the run; record-level problems go to the
/// [`DiagnosticsSink`] and the run continues.
pub struct ReportService<L: LinkRepository, C: ClickRepository> {
    links: L,
    clicks: C,
    target_year: i32,
}

impl<L: LinkRepository, C: ClickRepository> ReportService<L, C> {
    /// Creates a new report service.
    pub fn new(links: L, clicks: C, target_year: i32) -> Self {
        Self {
            links,
            clicks,
            target_year,
        }
    }

    pub fn target_year(&self) -> i32 {
        self.target_year
    }

    /// Generates the report.
    ///
    /// # Errors
    ///
    /// Propagates [`AppError`] from either repository unchanged. No partial
    /// report is produced in that case.
    pub fn generate(&self, sink: &mut dyn DiagnosticsSink) -> Result<ClickReport, AppError> {
        let links = self.links.load_links()?;
        for skipped in &links.skipped {
            sink.warn(skipped);
        }

        let clicks = self.clicks.load_clicks()?;
        for skipped in &clicks.skipped {
            sink.warn(skipped);
        }

        let filtered = filter_by_year(&clicks.value, self.target_year);
        tracing::info!(
            year = self.target_year,
            clicks = filtered.len(),
            "Filtered click events by year"
        );

        let counts = count_clicks(&filtered);
        tracing::debug!(unique_hashes = counts.len(), "Counted clicks per hash");

        let (joined, unmatched) = join_with_links(&counts, &links.value);
        for skipped in &unmatched {
            sink.warn(skipped);
        }
        if !unmatched.is_empty() {
            tracing::warn!(unmatched = unmatched.len(), "Some clicked hashes have no long URL");
        }

        let results = rank_by_clicks(joined);
        tracing::info!(results = results.len(), "Click report generated");

        let stats = RunStats {
            encode_rows: links.total,
            mappings: links.value.len(),
            encode_warnings: links.skipped.len(),
            decode_events: clicks.total,
            valid_events: clicks.value.len(),
            decode_warnings: clicks.skipped.len(),
            events_in_year: filtered.len(),
            unique_hashes: counts.len(),
            unmatched_hashes: unmatched.len(),
        };

        Ok(ClickReport { results, stats })
    }
}

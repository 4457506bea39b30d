//! Injectable sink for record-level warnings.
//!
//! The report service hands every [`Skipped`] record to a sink and carries on;
//! a sink can log, collect, or ignore, but never changes the outcome of a run.

use crate::domain::skip::Skipped;

pub trait DiagnosticsSink {
    fn warn(&mut self, skipped: &Skipped);
}

/// Production sink: emits each diagnostic as a structured `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn warn(&mut self, skipped: &Skipped) {
        tracing::warn!(
            source = skipped.source.as_str(),
            position = skipped.position,
            reason = %skipped.reason,
            "Skipping record"
        );
    }
}

/// Collects diagnostics in memory.
impl DiagnosticsSink for Vec<Skipped> {
    fn warn(&mut self, skipped: &Skipped) {
        self.push(skipped.clone());
    }
}

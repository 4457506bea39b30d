//! Click event read from the decodes dataset.

use chrono::{DateTime, Datelike, FixedOffset};

/// A single validated click on a short link.
///
/// The timestamp keeps the offset it was recorded with; calendar checks such
/// as [`ClickEvent::is_in_year`] read the date in that offset and never
/// convert to UTC first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub identifier: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl ClickEvent {
    /// Creates a new ClickEvent instance.
    pub fn new(identifier: impl Into<String>, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            identifier: identifier.into(),
            timestamp,
        }
    }

    /// Returns true if the click happened in `year`, read in the event's own offset.
    pub fn is_in_year(&self, year: i32) -> bool {
        self.timestamp.year() == year
    }
}

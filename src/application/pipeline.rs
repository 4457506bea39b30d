//! Pure pipeline stages between loading and output.
//!
//! Each stage takes the previous stage's output by reference and performs no
//! I/O; diagnostics are returned, never logged here.

use crate::domain::entities::{ClickCountMap, ClickEvent, IdentifierMap, UrlClicks};
use crate::domain::{RecordSource, SkipReason, Skipped};

/// Hashes of the clicks that fell in the target year, in input order.
pub type FilteredEventList = Vec<String>;

/// Keeps the hashes of events whose timestamp falls in `year`.
///
/// The year is read in each event's own offset. Duplicates are kept.
pub fn filter_by_year(events: &[ClickEvent], year: i32) -> FilteredEventList {
    events
        .iter()
        .filter(|event| event.is_in_year(year))
        .map(|event| event.identifier.clone())
        .collect()
}

/// Tallies clicks per hash.
pub fn count_clicks(events: &[String]) -> ClickCountMap {
    let mut counts = ClickCountMap::new();
    for identifier in events {
        counts.record(identifier);
    }
    counts
}

/// Resolves each hash's count to its destination URL.
///
/// Hashes missing from `links` are dropped and returned as diagnostics.
/// Output follows the iteration order of `counts`.
pub fn join_with_links(
    counts: &ClickCountMap,
    links: &IdentifierMap,
) -> (Vec<UrlClicks>, Vec<Skipped>) {
    let mut joined = Vec::with_capacity(counts.len());
    let mut unmatched = Vec::new();

    for (identifier, count) in counts.iter() {
        match links.get(identifier) {
            Some(url) => joined.push(UrlClicks::new(url, count)),
            None => unmatched.push(Skipped::unpositioned(
                RecordSource::Join,
                SkipReason::UnresolvedHash(identifier.to_string()),
            )),
        }
    }

    (joined, unmatched)
}

/// Sorts by click count, highest first.
///
/// The sort is stable: entries with equal counts keep their input order.
pub fn rank_by_clicks(mut results: Vec<UrlClicks>) -> Vec<UrlClicks> {
    results.sort_by(|a, b| b.count.cmp(&a.count));
    results
}

//! Per-hash click tallies and the per-URL report entries derived from them.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Click count per short-link hash.
///
/// Iterates in first-seen order so a report built from the same input is
/// always the same, including the relative order of tied counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickCountMap {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl ClickCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one click for `identifier`.
    pub fn record(&mut self, identifier: &str) {
        match self.index.get(identifier) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(identifier.to_string(), self.entries.len());
                self.entries.push((identifier.to_string(), 1));
            }
        }
    }

    /// Returns the count for `identifier`, zero if never seen.
    pub fn get(&self, identifier: &str) -> u64 {
        self.index
            .get(identifier)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(id, count)| (id.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line of the ranked report: a destination URL and its click count.
///
/// Serializes as a single-key object, `{"https://google.com": 2}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlClicks {
    pub destination_url: String,
    pub count: u64,
}

impl UrlClicks {
    pub fn new(destination_url: impl Into<String>, count: u64) -> Self {
        Self {
            destination_url: destination_url.into(),
            count,
        }
    }
}

impl Serialize for UrlClicks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.destination_url, &self.count)?;
        map.end()
    }
}

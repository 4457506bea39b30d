//! Link record and the identifier map built from the encodes dataset.

use std::collections::HashMap;

/// A single encode entry: a short-link hash and the URL it points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub identifier: String,
    pub destination_url: String,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(identifier: impl Into<String>, destination_url: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            destination_url: destination_url.into(),
        }
    }
}

/// Lookup from short-link hash to destination URL.
///
/// Keys are unique. Inserting an existing hash replaces its URL, so the last
/// record loaded wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMap {
    links: HashMap<String, String>,
}

impl IdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the URL it replaced if the hash was already mapped.
    pub fn insert(&mut self, record: LinkRecord) -> Option<String> {
        self.links.insert(record.identifier, record.destination_url)
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.links.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl FromIterator<LinkRecord> for IdentifierMap {
    fn from_iter<I: IntoIterator<Item = LinkRecord>>(iter: I) -> Self {
        let mut map = Self::new();
        for record in iter {
            map.insert(record);
        }
        map
    }
}

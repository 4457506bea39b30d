//! Recoverable per-record outcomes.
//!
//! Loaders never abort on a bad row or event. Each record resolves to
//! `Result<T, SkipReason>`, and the failures are gathered next to the
//! successes in a [`Loaded`] value so callers decide how to report them.

use std::fmt;

/// Why a single record was excluded from the report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("empty {0}")]
    EmptyField(&'static str),

    #[error("missing '{0}'")]
    MissingField(&'static str),

    #[error("'{0}' is not a string")]
    NotAString(&'static str),

    #[error("event is not a JSON object")]
    NotAnObject,

    #[error("unreadable row: {0}")]
    UnreadableRow(String),

    /// The row was applied; the mapping it replaced is the one dropped.
    #[error("duplicate hash '{hash}' overrides {previous_url}")]
    DuplicateHash { hash: String, previous_url: String },

    #[error("invalid bitlink URL '{value}': {message}")]
    InvalidBitlink { value: String, message: String },

    #[error("could not extract hash from bitlink URL '{0}'")]
    NoIdentifier(String),

    #[error("invalid timestamp format '{0}'")]
    InvalidTimestamp(String),

    #[error("no matching long URL for hash '{0}'")]
    UnresolvedHash(String),
}

/// Which pipeline stage produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Encodes,
    Decodes,
    Join,
}

impl RecordSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSource::Encodes => "encodes",
            RecordSource::Decodes => "decodes",
            RecordSource::Join => "join",
        }
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic for one excluded record.
///
/// `position` is the 1-based data row (encodes) or array index (decodes);
/// join diagnostics have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub source: RecordSource,
    pub position: Option<usize>,
    pub reason: SkipReason,
}

impl Skipped {
    pub fn at(source: RecordSource, position: usize, reason: SkipReason) -> Self {
        Self {
            source,
            position: Some(position),
            reason,
        }
    }

    pub fn unpositioned(source: RecordSource, reason: SkipReason) -> Self {
        Self {
            source,
            position: None,
            reason,
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{} #{}: {}", self.source, position, self.reason),
            None => write!(f, "{}: {}", self.source, self.reason),
        }
    }
}

/// Output of a loader: accepted records plus diagnostics for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub value: T,
    /// Number of records read from the file, accepted or not.
    pub total: usize,
    pub skipped: Vec<Skipped>,
}

impl<T> Loaded<T> {
    pub fn new(value: T, total: usize, skipped: Vec<Skipped>) -> Self {
        Self {
            value,
            total,
            skipped,
        }
    }
}

//! CSV implementation of link repository.

use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::PathBuf;

use crate::domain::entities::{IdentifierMap, LinkRecord};
use crate::domain::repositories::LinkRepository;
use crate::domain::{Loaded, RecordSource, SkipReason, Skipped};
use crate::error::AppError;

const HASH_COLUMN: &str = "hash";
const LONG_URL_COLUMN: &str = "long_url";

/// Reads hash to URL mappings from an encodes CSV file.
///
/// The header must contain `long_url` and `hash` in any order; other columns
/// such as `short_domain` are ignored. Rows may be shorter than the header.
pub struct CsvLinkRepository {
    path: PathBuf,
}

impl CsvLinkRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LinkRepository for CsvLinkRepository {
    fn load_links(&self) -> Result<Loaded<IdentifierMap>, AppError> {
        tracing::debug!(path = %self.path.display(), "Parsing encodes file");

        let bytes = fs::read(&self.path).map_err(|e| AppError::from_io(&self.path, e))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let headers = reader
            .headers()
            .map_err(|e| AppError::schema(&self.path, format!("unreadable header: {e}")))?
            .clone();
        let columns = Columns::locate(&headers).map_err(|m| AppError::schema(&self.path, m))?;

        let mut links = IdentifierMap::new();
        let mut skipped = Vec::new();
        let mut total = 0;

        for (idx, result) in reader.records().enumerate() {
            let row_num = idx + 1;
            total += 1;

            let record = result
                .map_err(|e| SkipReason::UnreadableRow(e.to_string()))
                .and_then(|row| columns.link_record(&row));

            match record {
                Ok(record) => {
                    let hash = record.identifier.clone();
                    if let Some(previous_url) = links.insert(record) {
                        skipped.push(Skipped::at(
                            RecordSource::Encodes,
                            row_num,
                            SkipReason::DuplicateHash { hash, previous_url },
                        ));
                    }
                }
                Err(reason) => skipped.push(Skipped::at(RecordSource::Encodes, row_num, reason)),
            }
        }

        tracing::info!(
            path = %self.path.display(),
            rows = total,
            mappings = links.len(),
            skipped = skipped.len(),
            "Parsed encodes file"
        );

        Ok(Loaded::new(links, total, skipped))
    }
}

/// Positions of the required columns within the header.
struct Columns {
    long_url: usize,
    hash: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, String> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        match (position(LONG_URL_COLUMN), position(HASH_COLUMN)) {
            (Some(long_url), Some(hash)) => Ok(Self { long_url, hash }),
            (long_url, hash) => {
                let missing: Vec<&str> = [(LONG_URL_COLUMN, long_url), (HASH_COLUMN, hash)]
                    .into_iter()
                    .filter(|(_, found)| found.is_none())
                    .map(|(name, _)| name)
                    .collect();
                let found: Vec<&str> = headers.iter().collect();

                Err(format!(
                    "missing required columns: {} (found: [{}])",
                    missing.join(", "),
                    found.join(", ")
                ))
            }
        }
    }

    fn link_record(&self, row: &StringRecord) -> Result<LinkRecord, SkipReason> {
        let hash = row.get(self.hash).unwrap_or_default().trim();
        let long_url = row.get(self.long_url).unwrap_or_default().trim();

        if hash.is_empty() {
            return Err(SkipReason::EmptyField(HASH_COLUMN));
        }
        if long_url.is_empty() {
            return Err(SkipReason::EmptyField(LONG_URL_COLUMN));
        }

        Ok(LinkRecord::new(hash, long_url))
    }
}

//! Fatal error taxonomy for a report run.
//!
//! Every variant aborts the run and carries the path of the offending input
//! file. Per-record problems are not errors; see [`crate::domain::SkipReason`].

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required input file does not exist.
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The encodes CSV header lacks required columns.
    #[error("Invalid schema in {}: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    /// The decodes file is not valid JSON or its top-level value is not an array.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Any other I/O failure while reading an input file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn schema(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn parse(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Maps an I/O error on `path`, folding `ErrorKind::NotFound` into [`AppError::NotFound`].
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::not_found(path);
        }

        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Short machine-readable code, mirrored in structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "not_found",
            AppError::Schema { .. } => "schema_error",
            AppError::Parse { .. } => "parse_error",
            AppError::Io { .. } => "io_error",
        }
    }
}

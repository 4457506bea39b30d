//! Repository trait for the encodes dataset.

use crate::domain::entities::IdentifierMap;
use crate::domain::skip::Loaded;
use crate::error::AppError;

/// Source of short-link hash to destination URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::files::CsvLinkRepository`] - CSV file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRepository {
    /// Loads every mapping, reporting rejected rows alongside the map.
    ///
    /// Rows with an empty hash or URL are skipped. A repeated hash replaces
    /// the earlier mapping and is reported as a diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the source does not exist.
    /// Returns [`AppError::Schema`] if required columns are missing.
    /// Returns [`AppError::Io`] on other read failures.
    fn load_links(&self) -> Result<Loaded<IdentifierMap>, AppError>;
}

//! Repository trait for the decodes dataset.

use crate::domain::entities::ClickEvent;
use crate::domain::skip::Loaded;
use crate::error::AppError;

/// Source of click events.
///
/// Returns every well-formed event in source order regardless of date;
/// year filtering is done by [`crate::application::pipeline::filter_by_year`].
///
/// # Implementations
///
/// - [`crate::infrastructure::files::JsonClickRepository`] - JSON file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ClickRepository {
    /// Loads all click events, reporting malformed entries alongside them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the source does not exist.
    /// Returns [`AppError::Parse`] if the content is not a JSON array.
    /// Returns [`AppError::Io`] on other read failures.
    fn load_clicks(&self) -> Result<Loaded<Vec<ClickEvent>>, AppError>;
}

//! Short-link hash extraction from bitlink URLs.

use crate::domain::SkipReason;
use url::{ParseError, Url};

/// Extracts the short-link hash from a bitlink URL.
///
/// # Extraction Rules
///
/// 1. **Whitespace**: Surrounding whitespace is trimmed
/// 2. **Scheme**: A bare host such as `bit.ly/abc` is read as `http://bit.ly/abc`
/// 3. **Hash**: The URL path with every leading `/` removed
/// 4. **Query and fragment**: Ignored
/// 5. **Nested paths**: Kept whole, so `/a/b` yields `a/b`
/// 6. **Normalization**: The path is read after URL normalization, so spaces are
///    percent-encoded and `.`/`..` segments are resolved
///
/// # Errors
///
/// Returns [`SkipReason::EmptyField`] for a blank value.
/// Returns [`SkipReason::InvalidBitlink`] if the URL cannot be parsed.
/// Returns [`SkipReason::NoIdentifier`] if the path is empty.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_identifier("http://bit.ly/2kkAHNs").unwrap(), "2kkAHNs");
/// assert_eq!(extract_identifier("bit.ly/2kkAHNs?ref=x").unwrap(), "2kkAHNs");
/// assert!(extract_identifier("http://bit.ly").is_err());
/// ```
pub fn extract_identifier(bitlink: &str) -> Result<String, SkipReason> {
    let trimmed = bitlink.trim();
    if trimmed.is_empty() {
        return Err(SkipReason::EmptyField("bitlink"));
    }

    let url = match Url::parse(trimmed) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{trimmed}")),
        parsed => parsed,
    }
    .map_err(|e| SkipReason::InvalidBitlink {
        value: trimmed.to_string(),
        message: e.to_string(),
    })?;

    let identifier = url.path().trim_start_matches('/');
    if identifier.is_empty() {
        return Err(SkipReason::NoIdentifier(trimmed.to_string()));
    }

    Ok(identifier.to_string())
}

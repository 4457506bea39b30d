//! Parsing helpers shared by the dataset readers.
//!
//! - [`bitlink`] - Short-link hash extraction from bitlink URLs
//! - [`timestamp`] - Offset-preserving ISO-8601 timestamp parsing

pub mod bitlink;
pub mod timestamp;

pub use bitlink::extract_identifier;
pub use timestamp::parse_timestamp;

//! Core domain entities representing the click report data model.
//!
//! Entities are plain data structures; the pipeline stages that build them
//! live in [`crate::application`].
//!
//! # Entity Types
//!
//! - [`LinkRecord`] / [`IdentifierMap`] - Short-link hash to destination URL
//! - [`ClickEvent`] - A validated click with its original timestamp offset
//! - [`ClickCountMap`] - Click tally per hash
//! - [`UrlClicks`] - A ranked report entry

pub mod click_counts;
pub mod click_event;
pub mod link_record;

pub use click_counts::{ClickCountMap, UrlClicks};
pub use click_event::ClickEvent;
pub use link_record::{IdentifierMap, LinkRecord};

//! Repository trait definitions for the domain layer.
//!
//! These traits abstract where the two datasets come from. Concrete file
//! readers live in `crate::infrastructure::files`; mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Hash to destination URL mappings (encodes)
//! - [`ClickRepository`] - Click events (decodes)

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;

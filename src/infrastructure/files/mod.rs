//! File-backed repository implementations.
//!
//! Each repository reads its whole file into memory before parsing.
//!
//! # Repositories
//!
//! - [`CsvLinkRepository`] - Encodes CSV (hash to long URL)
//! - [`JsonClickRepository`] - Decodes JSON (click events)

pub mod csv_link_repository;
pub mod json_click_repository;

pub use csv_link_repository::CsvLinkRepository;
pub use json_click_repository::JsonClickRepository;

//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete readers for the input datasets.
//!
//! # Modules
//!
//! - [`files`] - CSV and JSON file repository implementations

pub mod files;

//! Domain layer containing the report's data model and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Dataset access trait definitions
//! - [`skip`] - Per-record skip reasons and loader output
//! - [`diagnostics`] - Sink receiving skipped-record warnings
//!
//! The domain layer has no dependency on file formats; those are handled by
//! [`crate::infrastructure`].

pub mod diagnostics;
pub mod entities;
pub mod repositories;
pub mod skip;

pub use diagnostics::{DiagnosticsSink, TracingSink};
pub use skip::{Loaded, RecordSource, SkipReason, Skipped};

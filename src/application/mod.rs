//! Application layer implementing the report pipeline.
//!
//! Services consume repository traits and sequence the pure stages in
//! [`pipeline`], so the same logic runs against files or test doubles.
//!
//! # Contents
//!
//! - [`pipeline`] - Year filter, click counting, URL join and ranking
//! - [`services::report_service::ReportService`] - End-to-end report orchestration

pub mod pipeline;
pub mod services;

//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates the analysis engine and the ports:
//!
//! - [`analyze`]: extract, reflow, analyse and publish a batch of documents
//! - [`dto`]: the plan handed in by the outer layer
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod analyze;
pub mod dto;

pub use analyze::AnalyzeDocuments;
pub use dto::AnalysisPlan;

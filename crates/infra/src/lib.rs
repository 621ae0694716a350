// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod extraction;
pub mod layout;
pub mod output;
pub mod persistence;

pub use extraction::DocumentExtractor;
pub use layout::GraphemeReflow;
pub use output::{OutputTarget, ReportEmitter};

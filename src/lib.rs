// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cli;

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

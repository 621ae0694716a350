//! # chandas core
//!
//! Facade over the workspace crates: the analysis engine, the adapters and
//! the [`bootstrap`] wiring that the CLI drives.

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod config;
pub mod error;

pub use bootstrap::run_with_config;
pub use chandas_domain::config::MAX_NGRAM;
pub use chandas_domain::{
    AnalysisMode, GarblePolicy, NGramLimits, OutputFormat, PoemAnalysis, TextStatsAnalysis, Weight,
    analyze_prosody, analyze_statistics, analyze_statistics_with,
};
pub use chandas_ports::report::DocumentReport;
pub use config::{Config, ConfigBuilder};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

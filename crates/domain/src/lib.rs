//! # Domain
//!
//! The pure analysis engine. Every public entry point is a synchronous,
//! side-effect-free function of its input text:
//!
//! - [`script`]: Kannada Unicode classification tables and collation order
//! - [`prosody`]: syllabifier, Laghu/Guru classifier and line/word assembler
//! - [`statistics`]: sentence/word tokenizer, character and n-gram frequency
//! - [`analysis`]: the two top-level entry points
//! - [`options`]: run-level choices shared by the outer layers
//!
//! Nothing here performs I/O or fails; degenerate input maps to
//! well-defined empty results.

#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod config;
pub mod model;
pub mod options;
pub mod prosody;
pub mod script;
pub mod statistics;

pub use analysis::{analyze_prosody, analyze_statistics, analyze_statistics_with};
pub use config::NGramLimits;
pub use options::{AnalysisMode, GarblePolicy, OutputFormat};
pub use model::{
    CharFrequency, Line, NGram, PoemAnalysis, Syllable, TextStatsAnalysis, Weight, Word,
};

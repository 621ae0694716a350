// crates/domain/src/model.rs
pub mod poem;
pub mod text_stats;

pub use poem::{Line, PoemAnalysis, Syllable, Weight, Word};
pub use text_stats::{CharFrequency, NGram, TextStatsAnalysis};

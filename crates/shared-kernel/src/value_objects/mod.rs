// crates/shared-kernel/src/value_objects/mod.rs
pub mod average;
pub mod counts;

pub use average::Average;
pub use counts::{SentenceCount, SyllableCount, WordCount};

// crates/domain/src/prosody.rs
//! Syllabifier → classifier → line/word assembler.

pub mod assemble;
pub mod classify;
pub mod syllabify;

pub use assemble::{assemble_line, build_pattern, group_words};
pub use classify::{Rule, classify, classify_all};
pub use syllabify::{SyllableSpan, segment, segment_spans};

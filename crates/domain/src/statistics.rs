// crates/domain/src/statistics.rs
//! Corpus statistics over the unreformatted text.

pub mod frequency;
pub mod ngram;
pub mod tokenize;

use chandas_shared_kernel::{SentenceCount, WordCount};

pub use frequency::character_frequency;
pub use ngram::{ngram_frequencies, rank_ngrams};
pub use tokenize::{WORD_PUNCTUATION, sentences, words};

use crate::{config::NGramLimits, model::TextStatsAnalysis};

/// Computes word/sentence counts, averages, character and n-gram tables.
pub fn compute_stats(text: &str, limits: &NGramLimits) -> TextStatsAnalysis {
    let words = words(text);
    if words.is_empty() {
        return TextStatsAnalysis::empty();
    }

    // No terminator at all still counts as one sentence.
    let sentence_count = sentences(text).len().max(1);
    let word_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    TextStatsAnalysis::new(
        WordCount::new(words.len()),
        SentenceCount::new(sentence_count),
        word_chars,
        character_frequency(text),
        ngram_frequencies(&words, limits),
    )
}

// crates/domain/src/model/text_stats.rs
use std::collections::BTreeMap;

use chandas_shared_kernel::{Average, SentenceCount, WordCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharFrequency {
    pub character: char,
    pub count: usize,
}

/// A phrase of `n` space-joined words and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NGram {
    pub phrase: String,
    pub count: usize,
}

impl NGram {
    pub fn new(phrase: impl Into<String>, count: usize) -> Self {
        Self { phrase: phrase.into(), count }
    }
}

/// Result of [`crate::analyze_statistics`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatsAnalysis {
    total_words: WordCount,
    total_sentences: SentenceCount,
    average_words_per_sentence: Average,
    average_word_length: Average,
    character_frequency: Vec<CharFrequency>,
    n_gram_frequencies: BTreeMap<usize, Vec<NGram>>,
}

impl TextStatsAnalysis {
    /// The zero-valued result returned for text without words.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        total_words: WordCount,
        total_sentences: SentenceCount,
        total_word_chars: usize,
        character_frequency: Vec<CharFrequency>,
        n_gram_frequencies: BTreeMap<usize, Vec<NGram>>,
    ) -> Self {
        Self {
            total_words,
            total_sentences,
            average_words_per_sentence: Average::of(total_words.value(), total_sentences.value()),
            average_word_length: Average::of(total_word_chars, total_words.value()),
            character_frequency,
            n_gram_frequencies,
        }
    }

    pub const fn total_words(&self) -> WordCount {
        self.total_words
    }

    pub const fn total_sentences(&self) -> SentenceCount {
        self.total_sentences
    }

    pub const fn average_words_per_sentence(&self) -> Average {
        self.average_words_per_sentence
    }

    pub const fn average_word_length(&self) -> Average {
        self.average_word_length
    }

    /// Kannada characters in alphabetical order.
    pub fn character_frequency(&self) -> &[CharFrequency] {
        &self.character_frequency
    }

    /// Ranked phrase tables keyed by `n`; only populated sizes are present.
    pub fn n_gram_frequencies(&self) -> &BTreeMap<usize, Vec<NGram>> {
        &self.n_gram_frequencies
    }

    pub fn n_grams(&self, n: usize) -> &[NGram] {
        self.n_gram_frequencies.get(&n).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.total_words.is_zero()
    }
}

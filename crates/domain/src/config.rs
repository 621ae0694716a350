// crates/domain/src/config.rs
use chandas_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Largest phrase size the statistics engine ranks.
pub const MAX_NGRAM: usize = 15;

/// Size and truncation limits for the n-gram tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NGramLimits {
    /// Tables are built for n = 1..=max_n.
    pub max_n: usize,
    /// Entries kept in the 1-gram table.
    pub top_unigrams: usize,
    /// Entries kept in every n ≥ 2 table.
    pub top_ngrams: usize,
}

impl Default for NGramLimits {
    fn default() -> Self {
        Self { max_n: MAX_NGRAM, top_unigrams: 20, top_ngrams: 10 }
    }
}

impl NGramLimits {
    #[inline]
    pub const fn top_k(&self, n: usize) -> usize {
        if n == 1 { self.top_unigrams } else { self.top_ngrams }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(1..=MAX_NGRAM).contains(&self.max_n) {
            return Err(DomainError::RangeValidation {
                field: "max_n".to_string(),
                min: "1".to_string(),
                max: MAX_NGRAM.to_string(),
            });
        }
        if self.top_unigrams == 0 || self.top_ngrams == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "n-gram tables must keep at least one entry".to_string(),
            });
        }
        Ok(())
    }
}

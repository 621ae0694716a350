// crates/domain/src/statistics/frequency.rs
use hashbrown::HashMap;

use crate::{model::CharFrequency, script};

/// Counts every Kannada-block character of `text`, in Kannada alphabetical order.
pub fn character_frequency(text: &str) -> Vec<CharFrequency> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars().filter(|&c| script::is_kannada(c)) {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut table: Vec<CharFrequency> = counts
        .into_iter()
        .map(|(character, count)| CharFrequency { character, count })
        .collect();
    table.sort_by(|a, b| script::collate(a.character, b.character));
    table
}

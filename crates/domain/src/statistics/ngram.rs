// crates/domain/src/statistics/ngram.rs
use std::collections::BTreeMap;

use hashbrown::{HashMap, hash_map::Entry};

use crate::{config::NGramLimits, model::NGram};

/// n-gram 頻度表を n = 1..=max_n について作成する。
///
/// 単語数が n に満たなくなった時点で打ち切り、空の表は含めない。
pub fn ngram_frequencies(words: &[&str], limits: &NGramLimits) -> BTreeMap<usize, Vec<NGram>> {
    (1..=limits.max_n)
        .take_while(|&n| words.len() >= n)
        .map(|n| (n, rank_ngrams(words, n, limits.top_k(n))))
        .filter(|(_, table)| !table.is_empty())
        .collect()
}

/// 連続する n 語の窓を数え、出現回数の降順に並べて上位 `top_k` 件を返す。
///
/// 同数の場合は最初に出現した順序を保つ（安定ソート）。
pub fn rank_ngrams(words: &[&str], n: usize, top_k: usize) -> Vec<NGram> {
    if n == 0 {
        return Vec::new();
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: Vec<NGram> = Vec::new();

    for window in words.windows(n) {
        match index.entry(window.join(" ")) {
            Entry::Occupied(slot) => table[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                let phrase = slot.key().clone();
                slot.insert(table.len());
                table.push(NGram::new(phrase, 1));
            }
        }
    }

    table.sort_by(|a, b| b.count.cmp(&a.count));
    table.truncate(top_k);
    table
}

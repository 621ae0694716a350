// crates/domain/src/analysis.rs
use crate::{
    config::NGramLimits,
    model::{PoemAnalysis, TextStatsAnalysis},
    prosody::assemble_line,
    statistics::compute_stats,
};

/// Prosodic analysis of a poem, one [`crate::Line`] per non-blank input line.
///
/// Never fails: the empty string yields an analysis without lines and zero totals.
pub fn analyze_prosody(text: &str) -> PoemAnalysis {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| assemble_line(i + 1, line))
        .collect();

    let analysis = PoemAnalysis::from_lines(lines);
    log::debug!(
        "prosody: {} lines, {} laghu, {} guru",
        analysis.lines().len(),
        analysis.total_laghu(),
        analysis.total_guru()
    );
    analysis
}

/// Corpus statistics with the default n-gram limits.
pub fn analyze_statistics(text: &str) -> TextStatsAnalysis {
    analyze_statistics_with(text, &NGramLimits::default())
}

pub fn analyze_statistics_with(text: &str, limits: &NGramLimits) -> TextStatsAnalysis {
    let stats = compute_stats(text, limits);
    log::debug!(
        "statistics: {} words, {} sentences, {} n-gram tables",
        stats.total_words(),
        stats.total_sentences(),
        stats.n_gram_frequencies().len()
    );
    stats
}

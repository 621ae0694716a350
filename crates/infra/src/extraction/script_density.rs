// crates/infra/src/extraction/script_density.rs
//! 抽出テキストが文字化けしていないかの簡易判定。

use chandas_domain::script;

/// Kannada share below which text counts as garbled.
pub const GARBLE_THRESHOLD: f64 = 0.5;

/// Share of characters in the Kannada block, or `None` for blank text.
pub fn kannada_ratio(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    let (kannada, total) = text
        .chars()
        .fold((0usize, 0usize), |(k, t), c| (k + usize::from(script::is_kannada(c)), t + 1));
    Some(kannada as f64 / total as f64)
}

/// 文字化けと判定した場合のみ、カンナダ文字の割合 (%) を返す。
///
/// 空白のみのテキストは文字化けとはみなさない。
pub fn garbled_percent(text: &str) -> Option<f64> {
    kannada_ratio(text).filter(|ratio| *ratio < GARBLE_THRESHOLD).map(|ratio| ratio * 100.0)
}

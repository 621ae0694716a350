// crates/domain/src/statistics/tokenize.rs
use crate::script;

/// Characters treated as word separators in addition to whitespace.
pub const WORD_PUNCTUATION: [char; 20] = [
    '\u{0964}', '\u{0965}', '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'',
    '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}',
];

/// Non-blank sentences, split on runs of `।`, `॥` and `.`.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(script::is_sentence_terminal)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Word tokens with the punctuation set treated as whitespace.
pub fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || WORD_PUNCTUATION.contains(&c))
        .filter(|w| !w.is_empty())
        .collect()
}

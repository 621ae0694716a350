// crates/domain/src/prosody/assemble.rs
use crate::{
    model::{Line, Syllable, Weight, Word},
    prosody::{classify::classify_all, syllabify::{SyllableSpan, segment_spans}},
    script,
};

/// Segments, classifies and regroups one trimmed line.
pub fn assemble_line(index: usize, original_text: &str) -> Line {
    let spans = segment_spans(original_text);
    let texts: Vec<&str> = spans.iter().map(|span| span.text).collect();
    let weights = classify_all(&texts);

    let syllables: Vec<Syllable> = texts
        .iter()
        .zip(&weights)
        .map(|(text, weight)| Syllable::new(*text, *weight))
        .collect();

    let words = group_words(original_text, &syllables);
    let pattern = build_pattern(original_text, &spans, &weights);

    Line::new(index, original_text, syllables, words, pattern)
}

/// Distributes syllables over the whitespace-delimited tokens of the line.
///
/// Each token takes syllables in order until the char length of what it has
/// taken reaches the token's own char length. This is a length budget, not a
/// span match: a token carrying characters that never become syllable content
/// (digits, Latin letters, fused punctuation) has a budget larger than its
/// syllables and will pull the next token's leading syllables into itself.
/// Syllables still unassigned after the last token stay with the last word.
pub fn group_words(original_text: &str, syllables: &[Syllable]) -> Vec<Word> {
    let mut remaining = syllables.iter();
    let mut words: Vec<(&str, Vec<Syllable>)> = Vec::new();

    for token in original_text.split_whitespace() {
        let budget = token.chars().count();
        let mut consumed = 0;
        let mut taken = Vec::new();

        while consumed < budget {
            let Some(syllable) = remaining.next() else { break };
            consumed += syllable.char_len();
            taken.push(syllable.clone());
        }
        words.push((token, taken));
    }

    if let Some((_, last)) = words.last_mut() {
        last.extend(remaining.cloned());
    }

    words.into_iter().map(|(token, taken)| Word::new(token, taken)).collect()
}

/// Builds the display pattern: one marker per syllable, separated by a space,
/// or by a line break when the text between the two syllables holds a
/// sentence-terminal mark.
pub fn build_pattern(original_text: &str, spans: &[SyllableSpan<'_>], weights: &[Weight]) -> String {
    debug_assert_eq!(spans.len(), weights.len());

    let mut pattern = String::with_capacity(weights.len() * 2);
    for (i, weight) in weights.iter().enumerate() {
        pattern.push(weight.marker());
        if let (Some(current), Some(next)) = (spans.get(i), spans.get(i + 1)) {
            let interstitial = &original_text[current.end..next.start];
            if interstitial.chars().any(script::is_sentence_terminal) {
                pattern.push('\n');
            } else {
                pattern.push(' ');
            }
        }
    }

    pattern.truncate(pattern.trim_end().len());
    pattern
}

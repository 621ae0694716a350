// crates/domain/src/prosody/syllabify.rs
use crate::script;

/// A matched syllable together with its byte range in the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllableSpan<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Splits one line into its syllables, skipping everything that is not
/// syllable content (whitespace, punctuation, digits, other scripts).
pub fn segment(line: &str) -> Vec<&str> {
    segment_spans(line).into_iter().map(|span| span.text).collect()
}

/// Like [`segment`], but keeps the byte offsets of every match.
pub fn segment_spans(line: &str) -> Vec<SyllableSpan<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(c) = line[cursor..].chars().next() {
        match match_syllable(&line[cursor..]) {
            Some(len) => {
                let end = cursor + len;
                spans.push(SyllableSpan { text: &line[cursor..end], start: cursor, end });
                cursor = end;
            }
            None => cursor += c.len_utf8(),
        }
    }

    spans
}

/// Byte length of the syllable starting at the head of `input`, if any.
///
/// The consonant shape is tried first, then the independent vowel shape.
fn match_syllable(input: &str) -> Option<usize> {
    match_consonant_cluster(input).or_else(|| match_independent_vowel(input))
}

/// C(्C)* [vowel sign] [anusvara|visarga]
fn match_consonant_cluster(input: &str) -> Option<usize> {
    let first = input.chars().next().filter(|&c| script::is_consonant(c))?;
    let mut end = first.len_utf8();

    loop {
        let mut ahead = input[end..].chars();
        match (ahead.next(), ahead.next()) {
            (Some(v), Some(c)) if script::is_virama(v) && script::is_consonant(c) => {
                end += v.len_utf8() + c.len_utf8();
            }
            _ => break,
        }
    }

    end += leading_len(&input[end..], script::is_vowel_sign);
    end += leading_len(&input[end..], script::is_nasal_mark);
    Some(end)
}

/// V [anusvara|visarga]
fn match_independent_vowel(input: &str) -> Option<usize> {
    let first = input.chars().next().filter(|&c| script::is_independent_vowel(c))?;
    let end = first.len_utf8();
    Some(end + leading_len(&input[end..], script::is_nasal_mark))
}

fn leading_len(input: &str, accept: impl Fn(char) -> bool) -> usize {
    input.chars().next().filter(|&c| accept(c)).map_or(0, char::len_utf8)
}

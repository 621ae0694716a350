// crates/domain/src/script.rs
//! Kannada Unicode classification tables.
//!
//! All tables are `const` data; the predicates below are the only way the
//! rest of the crate inspects characters.

use std::{cmp::Ordering, ops::RangeInclusive};

/// The whole Kannada block, U+0C80..=U+0CFF.
pub const KANNADA_BLOCK: RangeInclusive<char> = '\u{0C80}'..='\u{0CFF}';

/// ಕ..ಹ
pub const CONSONANTS: RangeInclusive<char> = '\u{0C95}'..='\u{0CB9}';

/// ಅ..ಔ
pub const INDEPENDENT_VOWELS: RangeInclusive<char> = '\u{0C85}'..='\u{0C94}';

/// ಾ..ೌ, skipping the unassigned code points between the groups.
pub const VOWEL_SIGNS: [RangeInclusive<char>; 3] = [
    '\u{0CBE}'..='\u{0CC4}',
    '\u{0CC6}'..='\u{0CC8}',
    '\u{0CCA}'..='\u{0CCC}',
];

pub const VIRAMA: char = '\u{0CCD}';
pub const ANUSVARA: char = '\u{0C82}';
pub const VISARGA: char = '\u{0C83}';

/// ಿ ು ೃ ೆ ೊ
pub const SHORT_VOWEL_SIGNS: [char; 5] = ['\u{0CBF}', '\u{0CC1}', '\u{0CC3}', '\u{0CC6}', '\u{0CCA}'];

/// ಾ ೀ ೂ ೄ ೇ ೈ ೋ ೌ
pub const LONG_VOWEL_SIGNS: [char; 8] = [
    '\u{0CBE}', '\u{0CC0}', '\u{0CC2}', '\u{0CC4}', '\u{0CC7}', '\u{0CC8}', '\u{0CCB}', '\u{0CCC}',
];

/// ಅ ಇ ಉ ಋ ಎ ಒ
pub const SHORT_INDEPENDENT_VOWELS: [char; 6] =
    ['\u{0C85}', '\u{0C87}', '\u{0C89}', '\u{0C8B}', '\u{0C8E}', '\u{0C92}'];

/// ಆ ಈ ಊ ಌ ಏ ಐ ಓ ಔ
pub const LONG_INDEPENDENT_VOWELS: [char; 8] = [
    '\u{0C86}', '\u{0C88}', '\u{0C8A}', '\u{0C8C}', '\u{0C8F}', '\u{0C90}', '\u{0C93}', '\u{0C94}',
];

/// Danda, double danda and the ASCII full stop.
pub const SENTENCE_TERMINALS: [char; 3] = ['\u{0964}', '\u{0965}', '.'];

#[inline]
pub fn is_kannada(c: char) -> bool {
    KANNADA_BLOCK.contains(&c)
}

#[inline]
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

#[inline]
pub fn is_independent_vowel(c: char) -> bool {
    INDEPENDENT_VOWELS.contains(&c)
}

#[inline]
pub fn is_vowel_sign(c: char) -> bool {
    VOWEL_SIGNS.iter().any(|range| range.contains(&c))
}

#[inline]
pub fn is_virama(c: char) -> bool {
    c == VIRAMA
}

/// Anusvara or visarga.
#[inline]
pub fn is_nasal_mark(c: char) -> bool {
    c == ANUSVARA || c == VISARGA
}

#[inline]
pub fn is_long_vowel(c: char) -> bool {
    LONG_VOWEL_SIGNS.contains(&c) || LONG_INDEPENDENT_VOWELS.contains(&c)
}

#[inline]
pub fn is_short_vowel(c: char) -> bool {
    SHORT_VOWEL_SIGNS.contains(&c) || SHORT_INDEPENDENT_VOWELS.contains(&c)
}

#[inline]
pub fn is_sentence_terminal(c: char) -> bool {
    SENTENCE_TERMINALS.contains(&c)
}

// Kannada dictionary order: digits, various signs, vowels, consonants,
// dependent vowel signs, virama. Vocalic R/L and the archaic letters are
// placed next to their siblings rather than at their code point.
const COLLATION_ORDER: [char; 86] = [
    // digits ೦..೯
    '\u{0CE6}', '\u{0CE7}', '\u{0CE8}', '\u{0CE9}', '\u{0CEA}', '\u{0CEB}', '\u{0CEC}', '\u{0CED}',
    '\u{0CEE}', '\u{0CEF}',
    // signs
    '\u{0C80}', '\u{0C81}', '\u{0C82}', '\u{0C83}', '\u{0CBD}',
    // vowels
    '\u{0C85}', '\u{0C86}', '\u{0C87}', '\u{0C88}', '\u{0C89}', '\u{0C8A}', '\u{0C8B}', '\u{0CE0}',
    '\u{0C8C}', '\u{0CE1}', '\u{0C8E}', '\u{0C8F}', '\u{0C90}', '\u{0C92}', '\u{0C93}', '\u{0C94}',
    // consonants ಕ..ಙ, ಚ..ಞ, ಟ..ಣ, ತ..ನ (+ ೝ), ಪ..ಮ
    '\u{0C95}', '\u{0C96}', '\u{0C97}', '\u{0C98}', '\u{0C99}', '\u{0C9A}', '\u{0C9B}', '\u{0C9C}',
    '\u{0C9D}', '\u{0C9E}', '\u{0C9F}', '\u{0CA0}', '\u{0CA1}', '\u{0CA2}', '\u{0CA3}', '\u{0CA4}',
    '\u{0CA5}', '\u{0CA6}', '\u{0CA7}', '\u{0CA8}', '\u{0CDD}', '\u{0CAA}', '\u{0CAB}', '\u{0CAC}',
    '\u{0CAD}', '\u{0CAE}',
    // ಯ ರ ಱ ಲ ಳ ೞ ವ ಶ ಷ ಸ ಹ
    '\u{0CAF}', '\u{0CB0}', '\u{0CB1}', '\u{0CB2}', '\u{0CB3}', '\u{0CDE}', '\u{0CB5}', '\u{0CB6}',
    '\u{0CB7}', '\u{0CB8}', '\u{0CB9}',
    // dependent vowel signs
    '\u{0CBE}', '\u{0CBF}', '\u{0CC0}', '\u{0CC1}', '\u{0CC2}', '\u{0CC3}', '\u{0CC4}', '\u{0CE2}',
    '\u{0CE3}', '\u{0CC6}', '\u{0CC7}', '\u{0CC8}', '\u{0CCA}', '\u{0CCB}', '\u{0CCC}', '\u{0CD5}',
    '\u{0CD6}',
    // virama
    '\u{0CCD}',
];

const UNRANKED: u8 = u8::MAX;

const COLLATION_RANKS: [u8; 128] = build_collation_ranks();

const fn build_collation_ranks() -> [u8; 128] {
    let mut ranks = [UNRANKED; 128];
    let mut i = 0;
    while i < COLLATION_ORDER.len() {
        let offset = COLLATION_ORDER[i] as u32 - 0x0C80;
        ranks[offset as usize] = i as u8;
        i += 1;
    }
    ranks
}

fn collation_rank(c: char) -> u8 {
    if is_kannada(c) {
        COLLATION_RANKS[(c as u32 - 0x0C80) as usize]
    } else {
        UNRANKED
    }
}

/// Compares two characters in Kannada alphabetical order.
///
/// Characters without a rank (unassigned code points, anything outside the
/// block) sort after every ranked character, by code point.
pub fn collate(a: char, b: char) -> Ordering {
    collation_rank(a).cmp(&collation_rank(b)).then_with(|| a.cmp(&b))
}

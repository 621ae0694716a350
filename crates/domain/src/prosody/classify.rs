// crates/domain/src/prosody/classify.rs
use crate::{model::Weight, script};

/// The classification rule that decided a syllable's weight, in the order
/// the rules are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Long vowel sign or long independent vowel.
    LongVowel,
    /// Anusvara or visarga.
    Nasalization,
    /// Short vowel followed by a syllable that opens with a consonant cluster.
    ConjunctLookahead,
    Default,
}

impl Rule {
    /// Decides which rule applies to `syllable`, looking at most one syllable ahead.
    pub fn decide(syllable: &str, next: Option<&str>) -> Self {
        if syllable.chars().any(script::is_long_vowel) {
            return Self::LongVowel;
        }
        if syllable.chars().any(script::is_nasal_mark) {
            return Self::Nasalization;
        }
        if has_short_vowel(syllable) && next.is_some_and(|n| n.chars().any(script::is_virama)) {
            return Self::ConjunctLookahead;
        }
        Self::Default
    }

    pub const fn weight(self) -> Weight {
        match self {
            Self::LongVowel | Self::Nasalization | Self::ConjunctLookahead => Weight::Guru,
            Self::Default => Weight::Laghu,
        }
    }
}

/// Classifies one syllable as Laghu or Guru.
#[inline]
pub fn classify(syllable: &str, next: Option<&str>) -> Weight {
    Rule::decide(syllable, next).weight()
}

/// Classifies a whole line's syllables; the last one never looks past the line.
pub fn classify_all(syllables: &[&str]) -> Vec<Weight> {
    syllables
        .iter()
        .enumerate()
        .map(|(i, syllable)| {
            let next = syllables.get(i + 1).copied();
            let rule = Rule::decide(syllable, next);
            log::trace!("{syllable} -> {:?} ({rule:?})", rule.weight());
            rule.weight()
        })
        .collect()
}

// An explicit short vowel, or the inherent "a" of a syllable without any
// vowel sign, independent vowel or virama.
fn has_short_vowel(syllable: &str) -> bool {
    if syllable.chars().any(script::is_short_vowel) {
        return true;
    }
    !syllable
        .chars()
        .any(|c| script::is_vowel_sign(c) || script::is_independent_vowel(c) || script::is_virama(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_vowel_sign_is_guru() {
        assert_eq!(classify("ಕಾ", None), Weight::Guru);
        assert_eq!(Rule::decide("ಕಾ", Some("ತ್ತ")), Rule::LongVowel);
    }

    #[test]
    fn long_independent_vowel_is_guru() {
        assert_eq!(classify("ಆ", None), Weight::Guru);
        assert_eq!(classify("ಔ", None), Weight::Guru);
    }

    #[test]
    fn anusvara_is_guru() {
        assert_eq!(classify("ಕಂ", None), Weight::Guru);
        assert_eq!(Rule::decide("ಕಂ", None), Rule::Nasalization);
        assert_eq!(classify("ತಃ", None), Weight::Guru);
    }

    #[test]
    fn inherent_a_before_conjunct_is_guru() {
        assert_eq!(classify("ಕ", Some("ತ್ತ")), Weight::Guru);
        assert_eq!(Rule::decide("ಹ", Some("ಕ್ಕಿ")), Rule::ConjunctLookahead);
    }

    #[test]
    fn short_sign_before_conjunct_is_guru() {
        assert_eq!(classify("ಕಿ", Some("ತ್ತ")), Weight::Guru);
        assert_eq!(classify("ಅ", Some("ಕ್ಕ")), Weight::Guru);
    }

    #[test]
    fn short_vowel_without_conjunct_is_laghu() {
        assert_eq!(classify("ಕಿ", None), Weight::Laghu);
        assert_eq!(classify("ಕಿ", Some("ಮ")), Weight::Laghu);
        assert_eq!(classify("ನ", Some("ದಿ")), Weight::Laghu);
    }

    #[test]
    fn cluster_itself_does_not_make_syllable_heavy() {
        assert_eq!(classify("ಕ್ಕಿ", None), Weight::Laghu);
        assert_eq!(classify("ತ್ತ", Some("ಮ")), Weight::Laghu);
    }

    #[test]
    fn bare_virama_fragment_is_laghu() {
        assert_eq!(classify("ಕ್", Some("ತ್ತ")), Weight::Laghu);
    }

    #[test]
    fn last_syllable_never_uses_lookahead() {
        let weights = classify_all(&["ಹ", "ಕ್ಕಿ", "ಯ"]);
        assert_eq!(weights, vec![Weight::Guru, Weight::Laghu, Weight::Laghu]);
    }
}

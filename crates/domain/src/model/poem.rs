// crates/domain/src/model/poem.rs
use std::fmt;

use chandas_shared_kernel::SyllableCount;
use serde::{Deserialize, Serialize};

/// Metrical weight of a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weight {
    /// ಲಘು, light.
    #[serde(rename = "L")]
    Laghu,
    /// ಗುರು, heavy.
    #[serde(rename = "G")]
    Guru,
}

impl Weight {
    /// The single-letter marker used in patterns.
    #[inline]
    pub const fn marker(self) -> char {
        match self {
            Self::Laghu => 'L',
            Self::Guru => 'G',
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
    text: String,
    #[serde(rename = "type")]
    weight: Weight,
}

impl Syllable {
    pub fn new(text: impl Into<String>, weight: Weight) -> Self {
        Self { text: text.into(), weight }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// Length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One whitespace-delimited token of a line with the syllables attributed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    source_text: String,
    syllables: Vec<Syllable>,
}

impl Word {
    pub(crate) fn new(source_text: impl Into<String>, syllables: Vec<Syllable>) -> Self {
        Self { source_text: source_text.into(), syllables }
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// The word's own `L`/`G` markers, space separated.
    pub fn pattern(&self) -> String {
        let markers: Vec<String> = self.syllables.iter().map(|s| s.weight().to_string()).collect();
        markers.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    #[serde(rename = "lineNumber")]
    index: usize,
    original_text: String,
    syllables: Vec<Syllable>,
    words: Vec<Word>,
    pattern: String,
}

impl Line {
    pub(crate) fn new(
        index: usize,
        original_text: impl Into<String>,
        syllables: Vec<Syllable>,
        words: Vec<Word>,
        pattern: String,
    ) -> Self {
        Self { index, original_text: original_text.into(), syllables, words, pattern }
    }

    /// 1-based position among the non-blank lines of the input.
    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn count(&self, weight: Weight) -> SyllableCount {
        SyllableCount::new(self.syllables.iter().filter(|s| s.weight() == weight).count())
    }
}

/// Result of [`crate::analyze_prosody`].
///
/// The totals are computed from the lines at construction, so
/// `total_laghu + total_guru` always equals the number of syllables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemAnalysis {
    lines: Vec<Line>,
    total_laghu: SyllableCount,
    total_guru: SyllableCount,
}

impl PoemAnalysis {
    pub fn from_lines(lines: Vec<Line>) -> Self {
        let total_laghu = lines.iter().map(|l| l.count(Weight::Laghu)).sum();
        let total_guru = lines.iter().map(|l| l.count(Weight::Guru)).sum();
        Self { lines, total_laghu, total_guru }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub const fn total_laghu(&self) -> SyllableCount {
        self.total_laghu
    }

    pub const fn total_guru(&self) -> SyllableCount {
        self.total_guru
    }

    pub fn total_syllables(&self) -> SyllableCount {
        self.total_laghu + self.total_guru
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical case recovered from an inflectional ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Case {
    Nominative,
    Genitive,
    Partitive,
    Inessive,
    Elative,
    Illative,
    Adessive,
    Ablative,
    Allative,
    Essive,
    Translative,
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
}

/// Part of speech guessed from the shape of a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Noun,
    Verb,
    Adv,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pos::Noun => "NOUN",
            Pos::Verb => "VERB",
            Pos::Adv => "ADV",
        };
        f.write_str(name)
    }
}

/// Case and number diagnosed for one surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morphology {
    pub case: Case,
    pub number: Number,
}

impl Morphology {
    pub const fn new(case: Case, number: Number) -> Self {
        Morphology { case, number }
    }
}

impl fmt::Display for Morphology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.case, self.number)
    }
}

/// Full analysis of a single token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// The token exactly as it appeared in the input.
    pub original: String,
    /// Base form, always lowercased.
    pub lemma: String,
    pub pos: Pos,
    /// Absent when the caller asked for lemmas only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morphology: Option<Morphology>,
}

/// Per-token analyses for a whole text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub text: String,
    pub words: Vec<WordAnalysis>,
    pub word_count: usize,
}

/// How many words of a text carry each surface case marker.
///
/// Counted over raw token shapes, not over lemmatizer output, so one
/// word can land in several buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDistribution {
    pub nominative: usize,
    pub genitive: usize,
    pub partitive: usize,
    pub inessive: usize,
    pub elative: usize,
    pub illative: usize,
    pub adessive: usize,
    pub ablative: usize,
    pub allative: usize,
    pub essive: usize,
    pub translative: usize,
    pub other: usize,
}

/// Coarse difficulty band for a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityRating {
    Simple,
    Moderate,
    Complex,
}

/// Structural complexity measurements for a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityReport {
    pub text: String,
    pub sentence_count: usize,
    pub word_count: usize,
    pub clause_count: usize,
    /// 0-100, higher means heavier inflection and longer clauses.
    pub morphological_depth_score: f64,
    pub average_word_length: f64,
    /// Absent in summary mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_distribution: Option<CaseDistribution>,
    pub complexity_rating: ComplexityRating,
}

/// Severity band for a toxicity score. `None` is a real band, not an
/// absent value: every report carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

/// One profanity hit with its location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedWord {
    pub word: String,
    /// Character offset of the match in the lowercased text.
    pub position: usize,
    pub confidence: f64,
}

/// Toxicity screening result for a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfanityReport {
    pub text: String,
    pub is_toxic: bool,
    pub toxicity_score: f64,
    /// Absent unless the caller asked for the individual matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged_words: Option<Vec<FlaggedWord>>,
    pub severity: Severity,
}

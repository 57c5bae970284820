// Text-level analysis: split the input into tokens and analyze each one
// independently, preserving input order.

use lazy_static::lazy_static;
use regex::Regex;

use crate::lexicon::Lexicon;
use crate::morphology;
use crate::types::TextAnalysis;

lazy_static! {
    static ref WORD_RUN: Regex = Regex::new(r"\w+").unwrap();
}

/// Split text into maximal word-character runs. `\w` is Unicode-aware,
/// so "ä" and "ö" stay inside their words; punctuation and whitespace
/// are dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_RUN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Analyze every token of `text` in input order.
pub fn analyze_text(text: &str, lexicon: &Lexicon, include_morphology: bool) -> TextAnalysis {
    let words: Vec<_> = tokenize(text)
        .into_iter()
        .map(|token| morphology::analyze_word(token, lexicon, include_morphology))
        .collect();
    let word_count = words.len();
    TextAnalysis {
        text: text.to_string(),
        words,
        word_count,
    }
}

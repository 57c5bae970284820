// Surface-level complexity heuristics: sentence and clause counting plus
// crude regex counters for case endings. Deliberately independent of the
// lemmatizer, everything here reads raw token shapes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::text::tokenize;
use crate::types::{CaseDistribution, ComplexityRating, ComplexityReport};

/// Conjunctions and connectives that usually open a new clause.
const CLAUSE_MARKERS: &[&str] = &[
    "joka", "mikä", "että", "kun", "jos", "koska", "vaikka", "kuin", "kuten", "jotta", "kunnes",
    "siksi", "eli",
];

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

lazy_static! {
    static ref GENITIVE: Regex = Regex::new(r"\b\w+n\b").unwrap();
    static ref PARTITIVE: Regex = Regex::new(r"\b\w+(a|ä|ta|tä)\b").unwrap();
    static ref INESSIVE: Regex = Regex::new(r"\b\w+(ssa|ssä)\b").unwrap();
    static ref ELATIVE: Regex = Regex::new(r"\b\w+(sta|stä)\b").unwrap();
    static ref ILLATIVE: Regex = Regex::new(r"\b\w+(an|än|seen|hin|hon|hön)\b").unwrap();
    static ref ADESSIVE: Regex = Regex::new(r"\b\w+(lla|llä)\b").unwrap();
    static ref ABLATIVE: Regex = Regex::new(r"\b\w+(lta|ltä)\b").unwrap();
    static ref ALLATIVE: Regex = Regex::new(r"\b\w+lle\b").unwrap();
    static ref ESSIVE: Regex = Regex::new(r"\b\w+(na|nä)\b").unwrap();
    static ref TRANSLATIVE: Regex = Regex::new(r"\b\w+ksi\b").unwrap();
}

// ---------------------------------------------------------------------------
// Sentences and clauses
// ---------------------------------------------------------------------------

/// Split on ".", "!" and "?", keeping the terminator with its sentence.
/// An unterminated tail counts as a sentence of its own.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        current.push(c);
        if SENTENCE_TERMINATORS.contains(&c) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Clause estimate: one per sentence, plus one per clause marker and per
/// comma. Always at least one.
fn count_clauses(text: &str) -> usize {
    let mut clauses = split_sentences(text).len();
    let folded = text.to_lowercase();
    for marker in CLAUSE_MARKERS {
        clauses += folded.matches(&format!(" {marker} ")).count();
        clauses += folded.matches(&format!(",{marker} ")).count();
    }
    clauses += text.matches(',').count();
    clauses.max(1)
}

// ---------------------------------------------------------------------------
// Case counters
// ---------------------------------------------------------------------------

/// Count words whose shape matches each case ending. One word can land in
/// several buckets, and every word lands in the nominative bucket.
fn case_distribution(text: &str) -> CaseDistribution {
    let folded = text.to_lowercase();
    let count = |re: &Regex| re.find_iter(&folded).count();
    CaseDistribution {
        nominative: tokenize(&folded).len(),
        genitive: count(&GENITIVE),
        partitive: count(&PARTITIVE),
        inessive: count(&INESSIVE),
        elative: count(&ELATIVE),
        illative: count(&ILLATIVE),
        adessive: count(&ADESSIVE),
        ablative: count(&ABLATIVE),
        allative: count(&ALLATIVE),
        essive: count(&ESSIVE),
        translative: count(&TRANSLATIVE),
        other: 0,
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Depth score 0-100 from three capped factors: case variety (30),
/// average word length (30) and clause density (40).
fn morphological_depth(text: &str, cases: &CaseDistribution) -> f64 {
    let mut score = 0.0;

    // 3 points per distinct non-nominative case in use.
    let buckets = [
        cases.genitive,
        cases.partitive,
        cases.inessive,
        cases.elative,
        cases.illative,
        cases.adessive,
        cases.ablative,
        cases.allative,
        cases.essive,
        cases.translative,
    ];
    let cases_used = buckets.iter().filter(|&&n| n > 0).count();
    score += f64::min(cases_used as f64 * 3.0, 30.0);

    // 3 points per character of average word length.
    let words = tokenize(text);
    if !words.is_empty() {
        let total: usize = words.iter().map(|w| w.chars().count()).sum();
        score += f64::min(total as f64 / words.len() as f64 * 3.0, 30.0);
    }

    // 20 points per clause per sentence.
    let sentences = split_sentences(text);
    if !sentences.is_empty() {
        let density = count_clauses(text) as f64 / sentences.len() as f64;
        score += f64::min(density * 20.0, 40.0);
    }

    round2(f64::min(score, 100.0))
}

fn rating(depth: f64, clause_count: usize, word_count: usize) -> ComplexityRating {
    let clauses_per_10_words = clause_count as f64 / usize::max(word_count, 1) as f64 * 10.0;
    if depth > 70.0 || clauses_per_10_words > 3.0 {
        ComplexityRating::Complex
    } else if depth > 40.0 || clauses_per_10_words > 1.5 {
        ComplexityRating::Moderate
    } else {
        ComplexityRating::Simple
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Measure the structural complexity of `text`. Summary mode
/// (`detailed: false`) drops the case distribution from the report and
/// scores depth without the case-variety factor.
pub fn analyze_complexity(text: &str, detailed: bool) -> ComplexityReport {
    let words = tokenize(text);
    let sentence_count = split_sentences(text).len();
    let word_count = words.len();
    let clause_count = count_clauses(text);

    let case_distribution = if detailed {
        Some(case_distribution(text))
    } else {
        None
    };

    let scoring_cases = case_distribution.unwrap_or_default();
    let morphological_depth_score = morphological_depth(text, &scoring_cases);

    let average_word_length = if words.is_empty() {
        0.0
    } else {
        let total: usize = words.iter().map(|w| w.chars().count()).sum();
        round2(total as f64 / words.len() as f64)
    };

    let complexity_rating = rating(morphological_depth_score, clause_count, word_count);

    ComplexityReport {
        text: text.to_string(),
        sentence_count,
        word_count,
        clause_count,
        morphological_depth_score,
        average_word_length,
        case_distribution,
        complexity_rating,
    }
}

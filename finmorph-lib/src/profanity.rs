// Keyword and pattern based toxicity screening.
//
// Word patterns extend each base word with "\w*" so inflected variants
// match too. The phrase patterns and the word patterns are scanned
// separately and their hits are not deduplicated: "kuole" is both a
// profanity word and a toxic phrase, and scores twice.

use lazy_static::lazy_static;
use regex::Regex;

use crate::text::tokenize;
use crate::types::{FlaggedWord, ProfanityReport, Severity};

/// Base profanity vocabulary with per-word severity.
const PROFANITY_WORDS: &[(&str, f64)] = &[
    // Mild.
    ("perkele", 0.5),
    ("helvetti", 0.4),
    ("saatana", 0.5),
    ("jumalauta", 0.4),
    ("hitto", 0.3),
    ("pahus", 0.2),
    // Strong.
    ("vittu", 0.8),
    ("paska", 0.6),
    ("kusipää", 0.7),
    ("idiootti", 0.6),
    ("tyhmä", 0.4),
    // Aggression.
    ("vihaan", 0.7),
    ("tapan", 0.9),
    ("kuole", 0.8),
];

/// Multi-word insults and threats. All of them score [`PHRASE_SEVERITY`].
const TOXIC_PHRASES: &[&str] = &[
    r"ole\w*\s+tyhmä",
    r"vihaan\s+sinua",
    r"kuole\w*",
    r"tapan\s+sinut",
];

const PHRASE_SEVERITY: f64 = 0.8;

lazy_static! {
    static ref WORD_PATTERNS: Vec<(Regex, f64)> = PROFANITY_WORDS
        .iter()
        .map(|&(word, severity)| {
            let pattern = format!(r"\b{word}\w*\b");
            (Regex::new(&pattern).unwrap(), severity)
        })
        .collect();
    static ref PHRASE_PATTERNS: Vec<Regex> = TOXIC_PHRASES
        .iter()
        .map(|&pattern| Regex::new(pattern).unwrap())
        .collect();
}

/// Collect every hit in vocabulary order, then phrase order. Positions
/// are character offsets into the lowercased text.
fn find_profanity(text: &str) -> Vec<FlaggedWord> {
    let folded = text.to_lowercase();
    let mut findings = Vec::new();

    for (pattern, severity) in WORD_PATTERNS.iter() {
        for m in pattern.find_iter(&folded) {
            findings.push(FlaggedWord {
                word: m.as_str().to_string(),
                position: folded[..m.start()].chars().count(),
                confidence: *severity,
            });
        }
    }

    for pattern in PHRASE_PATTERNS.iter() {
        for m in pattern.find_iter(&folded) {
            findings.push(FlaggedWord {
                word: m.as_str().to_string(),
                position: folded[..m.start()].chars().count(),
                confidence: PHRASE_SEVERITY,
            });
        }
    }

    findings
}

/// Blend the average severity of the hits with their density in the
/// text: 70% severity, 30% density, capped at 1.
fn toxicity_score(findings: &[FlaggedWord], word_count: usize) -> f64 {
    if findings.is_empty() {
        return 0.0;
    }
    let total: f64 = findings.iter().map(|f| f.confidence).sum();
    let avg_severity = total / findings.len() as f64;
    let density =
        f64::min(findings.len() as f64 / usize::max(word_count, 1) as f64 * 10.0, 1.0);
    let toxicity = f64::min(avg_severity * 0.7 + density * 0.3, 1.0);
    round3(toxicity)
}

fn severity_band(score: f64) -> Severity {
    if score >= 0.7 {
        Severity::High
    } else if score >= 0.4 {
        Severity::Medium
    } else if score >= 0.2 {
        Severity::Low
    } else {
        Severity::None
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Screen `text` for profanity. `is_toxic` compares the score against
/// `threshold`; the severity band is independent of the threshold.
pub fn detect_profanity(text: &str, return_flagged_words: bool, threshold: f64) -> ProfanityReport {
    let findings = find_profanity(text);
    let word_count = tokenize(text).len();

    let score = toxicity_score(&findings, word_count);
    let is_toxic = score >= threshold;
    let severity = severity_band(score);

    let flagged_words = if return_flagged_words && !findings.is_empty() {
        Some(findings)
    } else {
        None
    };

    ProfanityReport {
        text: text.to_string(),
        is_toxic,
        toxicity_score: score,
        flagged_words,
        severity,
    }
}

// Finnish case-suffix table shared by the lemma reducer and the feature
// extractor.
//
// The table is scanned top to bottom and the first matching suffix wins,
// so the declared order is normative:
//   - plural rows come before singular rows, otherwise a plural marker
//     like "-issa" would be claimed by the shorter singular "-ssa";
//   - the bare genitive "-n" comes last because almost every longer
//     suffix also ends in "n";
//   - order inside a row matters too. Illative plural lists "ihin"
//     before "oihin" so that "kissoihin" strips to "kisso" and the
//     plural stem repair can restore "kissa". Sorting a row by length
//     changes observable output.

use crate::types::{Case, Number};

use Case::*;
use Number::*;

/// One row of the suffix table: every suffix that marks `case` + `number`.
#[derive(Debug, Clone, Copy)]
pub struct SuffixRule {
    pub case: Case,
    pub number: Number,
    pub suffixes: &'static [&'static str],
}

const fn rule(case: Case, number: Number, suffixes: &'static [&'static str]) -> SuffixRule {
    SuffixRule {
        case,
        number,
        suffixes,
    }
}

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

pub const CASE_RULES: &[SuffixRule] = &[
    // Plural rows first.
    rule(Partitive, Plural, &["oja", "öjä", "ita", "itä", "ia", "iä"]),
    rule(
        Genitive,
        Plural,
        &["iden", "itten", "ojen", "öjen", "jen", "ien", "en"],
    ),
    rule(Inessive, Plural, &["issa", "issä"]),
    rule(Elative, Plural, &["ista", "istä"]),
    rule(Illative, Plural, &["isiin", "ihin", "oihin", "öihin"]),
    rule(Adessive, Plural, &["oilla", "öillä", "illa", "illä"]),
    rule(Ablative, Plural, &["oilta", "öiltä", "ilta", "iltä"]),
    rule(Allative, Plural, &["oille", "öille", "ille"]),
    rule(Essive, Plural, &["oina", "öinä", "ina", "inä"]),
    rule(Translative, Plural, &["oiksi", "öiksi", "iksi"]),
    // Singular rows.
    rule(
        Illative,
        Singular,
        &["seen", "siin", "hin", "hon", "hön", "hun", "hyn"],
    ),
    rule(Inessive, Singular, &["ssa", "ssä"]),
    rule(Elative, Singular, &["sta", "stä"]),
    rule(Adessive, Singular, &["lla", "llä"]),
    rule(Ablative, Singular, &["lta", "ltä"]),
    rule(Allative, Singular, &["lle"]),
    rule(Translative, Singular, &["ksi"]),
    rule(Essive, Singular, &["na", "nä"]),
    rule(Partitive, Singular, &["aa", "ää", "ta", "tä", "a", "ä"]),
    // Bare genitive "-n" last, it is the most ambiguous ending of all.
    rule(Genitive, Singular, &["n"]),
];

// ---------------------------------------------------------------------------
// Vowel inventory
// ---------------------------------------------------------------------------

pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'ä', 'ö'];
pub const BACK_VOWELS: &[char] = &['a', 'o', 'u'];
pub const FRONT_VOWELS: &[char] = &['ä', 'ö', 'y'];

/// Doubled vowels that collapse to a single one after suffix removal
/// ("taloo" from "taloon" becomes "talo").
pub const LONG_VOWELS: &[&str] = &["aa", "ää", "ee", "ii", "oo", "öö", "uu", "yy"];

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Extra characters a word must keep beyond a suffix before the reducer
/// may strip it.
pub const MIN_EXCESS_STRIP: usize = 2;

/// Extra characters required when a suffix is only read for case/number,
/// not removed.
pub const MIN_EXCESS_DIAGNOSE: usize = 1;

/// A successful hit in the suffix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    pub case: Case,
    pub number: Number,
    pub suffix: &'static str,
}

/// Scan the table in declared order and return the first suffix that ends
/// `word` while leaving more than `min_excess` characters of word behind.
/// Lengths are counted in characters, not bytes, so "ä" and "ö" weigh the
/// same as any other letter.
pub fn match_suffix(word: &str, min_excess: usize) -> Option<SuffixMatch> {
    let word_len = word.chars().count();
    for rule in CASE_RULES {
        for &suffix in rule.suffixes {
            if word.ends_with(suffix) && word_len > suffix.chars().count() + min_excess {
                return Some(SuffixMatch {
                    case: rule.case,
                    number: rule.number,
                    suffix,
                });
            }
        }
    }
    None
}

/// Collapse a trailing doubled vowel left behind by suffix removal.
pub fn collapse_long_vowel(stem: &mut String) {
    if LONG_VOWELS.iter().any(|v| stem.ends_with(v)) {
        stem.pop();
    }
}

// Rule-based reduction of inflected Finnish forms to dictionary lemmas.
//
// Reduction tries the most specific strategy first and stops at the first
// one that claims the word:
//   1. lexicon lookup, authoritative for irregular paradigms
//   2. "-nen" class reconstruction (naisessa -> nainen)
//   3. bare "-t" nominative plural removal
//   4. general suffix table plus plural stem repair
//   5. identity, the word is unknown or already a base form
//
// Everything below works on lowercased input and counts characters, not
// bytes.

use crate::features;
use crate::lexicon::Lexicon;
use crate::rules::{self, BACK_VOWELS, FRONT_VOWELS, VOWELS};
use crate::types::{Number, Pos, WordAnalysis};

// ---------------------------------------------------------------------------
// Lemma reduction
// ---------------------------------------------------------------------------

/// Reduce a token to its dictionary base form. Always produces a
/// lowercased best-effort lemma; a word no strategy claims comes back
/// folded but otherwise untouched.
pub fn reduce(token: &str, lexicon: &Lexicon) -> String {
    let word = token.to_lowercase();

    if let Some(lemma) = lexicon.lookup(&word) {
        return lemma.to_string();
    }

    if let Some(lemma) = reduce_nen(&word) {
        return lemma;
    }

    // Bare "-t" marks the nominative plural, sometimes on a lengthened
    // stem vowel that has to be shortened back.
    if word.ends_with('t') && word.chars().count() > 3 {
        let mut stem = word[..word.len() - 1].to_string();
        rules::collapse_long_vowel(&mut stem);
        return stem;
    }

    if let Some(m) = rules::match_suffix(&word, rules::MIN_EXCESS_STRIP) {
        let mut stem = word[..word.len() - m.suffix.len()].to_string();
        if m.number == Number::Plural {
            repair_plural_stem(&mut stem);
        }
        rules::collapse_long_vowel(&mut stem);
        return stem;
    }

    word
}

/// Reconstruct a "-nen" lemma from an inflected form, or decline.
///
/// The "-nen" class inflects on an extended "-se-" stem except in the
/// partitive singular, which contracts to "-s-" (naisessa = naise+ssa,
/// but naista = nais+ta).
fn reduce_nen(word: &str) -> Option<String> {
    // Contracted partitive singular: strip "ta"/"tä" together with the
    // stem-final "s" it sits on.
    if word.chars().count() > 4 {
        if let Some(base) = word.strip_suffix("sta").or_else(|| word.strip_suffix("stä")) {
            return Some(format!("{base}nen"));
        }
    }

    // Extended stem under a regular case ending: peel the ending, then
    // "ise"/"se", and rebuild the nominative.
    if (word.contains("ise") || word.ends_with("se")) && word.chars().count() > 5 {
        for rule in rules::CASE_RULES {
            for &suffix in rule.suffixes {
                if let Some(stem) = word.strip_suffix(suffix) {
                    if let Some(base) = stem.strip_suffix("ise") {
                        return Some(format!("{base}nen"));
                    }
                    if let Some(base) = stem.strip_suffix("se") {
                        return Some(format!("{base}nen"));
                    }
                }
            }
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Plural stem repair
// ---------------------------------------------------------------------------

/// Undo plural formation on a freshly stripped stem: drop the "i"/"j"
/// plural markers, then restore a stem-final "o"/"ö" to the "a"/"ä" it
/// replaced.
fn repair_plural_stem(stem: &mut String) {
    // Plural "i" only comes off after a consonant; a vowel before the
    // "i" means it belongs to the stem (hiiri, pieni).
    if stem.ends_with('i')
        && stem.chars().count() > 2
        && second_last(stem).map_or(false, |c| !VOWELS.contains(&c))
    {
        stem.pop();
    }
    if stem.ends_with('j') && stem.chars().count() > 2 {
        stem.pop();
    }

    // A plural stem in "-o"/"-ö" usually replaced a final "-a"/"-ä"
    // (kisso- from kissa). Restore it, picking the variant by the vowel
    // harmony of the stem.
    if stem.chars().count() > 2 {
        let last = stem.chars().last();
        let prev = second_last(stem);
        if (last == Some('o') && prev != Some('o')) || (last == Some('ö') && prev != Some('ö')) {
            let replacement = if is_front_harmony(stem) { 'ä' } else { 'a' };
            stem.pop();
            stem.push(replacement);
        }
    }
}

/// True when the stem carries front vowels and no back vowels.
fn is_front_harmony(stem: &str) -> bool {
    let has_front = stem.chars().any(|c| FRONT_VOWELS.contains(&c));
    let has_back = stem.chars().any(|c| BACK_VOWELS.contains(&c));
    has_front && !has_back
}

/// Second to last character, if there is one.
fn second_last(s: &str) -> Option<char> {
    s.chars().rev().nth(1)
}

// ---------------------------------------------------------------------------
// Part of speech
// ---------------------------------------------------------------------------

/// Infinitive-style endings that mark a lemma as a verb.
const VERB_ENDINGS: &[&str] = &["da", "dä", "ta", "tä", "la", "lä", "ra", "rä", "na", "nä"];

/// Classify a lemma by its ending: "-sti" marks an adverb and an
/// infinitive-style ending marks a verb, everything else counts as a
/// noun. Classification always reads the lemma, never the inflected
/// surface form, so "kirjalla" and "kirja" agree.
pub fn classify_pos(lemma: &str) -> Pos {
    if lemma.ends_with("sti") {
        return Pos::Adv;
    }
    if VERB_ENDINGS.iter().any(|ending| lemma.ends_with(ending)) {
        return Pos::Verb;
    }
    Pos::Noun
}

// ---------------------------------------------------------------------------
// Single-token analysis
// ---------------------------------------------------------------------------

/// Analyze one token: lemma, part of speech and, on request, the
/// case/number diagnosis.
pub fn analyze_word(token: &str, lexicon: &Lexicon, include_morphology: bool) -> WordAnalysis {
    let lemma = reduce(token, lexicon);
    let morphology = if include_morphology {
        Some(features::extract_features(token, &lemma))
    } else {
        None
    };
    let pos = classify_pos(&lemma);
    WordAnalysis {
        original: token.to_string(),
        lemma,
        pos,
        morphology,
    }
}

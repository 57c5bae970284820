// Case and number diagnosis for a surface form, given its lemma.
//
// This is a second, independent matching pass. The lemma may have come
// straight from the lexicon, so the surface form still needs its
// case/number read off the ending from scratch.

use crate::rules::{self, CASE_RULES};
use crate::types::{Case, Morphology, Number};

/// Diagnose the case and number that produced `original`. Forms nothing
/// explains come back as nominative singular.
pub fn extract_features(original: &str, lemma: &str) -> Morphology {
    let original = original.to_lowercase();

    if original == lemma {
        return Morphology::new(Case::Nominative, Number::Singular);
    }

    if let Some(m) = match_nen_paradigm(&original, lemma) {
        return m;
    }

    // Bare "-t" on the unchanged lemma is the nominative plural.
    if original.chars().count() > 2
        && original.strip_suffix('t').map_or(false, |stem| stem == lemma)
    {
        return Morphology::new(Case::Nominative, Number::Plural);
    }

    if let Some(m) = rules::match_suffix(&original, rules::MIN_EXCESS_DIAGNOSE) {
        return Morphology::new(m.case, m.number);
    }

    Morphology::new(Case::Nominative, Number::Singular)
}

/// Match a "-nen" word against its two stems: extended "-se-" for most
/// cases, contracted "-s-" for the partitive singular. `None` hands the
/// form back to the general pass.
fn match_nen_paradigm(original: &str, lemma: &str) -> Option<Morphology> {
    let base = lemma.strip_suffix("nen")?;
    let extended = format!("{base}se");
    let contracted = format!("{base}s");

    if original == format!("{contracted}ta") || original == format!("{contracted}tä") {
        return Some(Morphology::new(Case::Partitive, Number::Singular));
    }

    if original.contains(&extended) {
        if original == format!("{extended}n") {
            return Some(Morphology::new(Case::Genitive, Number::Singular));
        }
        if original == format!("{extended}t") {
            return Some(Morphology::new(Case::Nominative, Number::Plural));
        }
        for rule in CASE_RULES {
            for &suffix in rule.suffixes {
                if original == format!("{extended}{suffix}") {
                    return Some(Morphology::new(rule.case, rule.number));
                }
            }
        }
    }

    None
}

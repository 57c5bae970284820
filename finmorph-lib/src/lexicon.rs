// Built-in lexicon of irregular and high-frequency Finnish words.
//
// Covers the paradigms the suffix rules cannot model: "-nen" alternating
// stems, gradation pairs like paras/parhaa-, and frequent verbs whose
// finite forms share little surface with the infinitive. A lexicon hit is
// authoritative and bypasses every rule.

use std::collections::HashMap;

/// Lemma plus the closed set of surface forms it is known to produce.
/// Every lemma lists itself, so base forms reduce to themselves.
const KNOWN_WORDS: &[(&str, &[&str])] = &[
    (
        // "-nen" class, alternating stem ihmise-/ihmis-.
        "ihminen",
        &[
            "ihminen", "ihmisen", "ihmistä", "ihmisessä", "ihmisestä", "ihmiseen", "ihmisellä",
            "ihmiseltä", "ihmiselle", "ihmisenä", "ihmiseksi", "ihmiset", "ihmisten", "ihmisiä",
            "ihmisissä", "ihmisistä", "ihmisiin", "ihmisillä", "ihmisiltä", "ihmisille",
            "ihmisinä", "ihmisiksi",
        ],
    ),
    (
        // "-nen" class, alternating stem naise-/nais-.
        "nainen",
        &[
            "nainen", "naisen", "naista", "naisessa", "naisesta", "naiseen", "naisella",
            "naiselta", "naiselle", "naisena", "naiseksi", "naiset", "naisten", "naisia",
            "naisissa", "naisista", "naisiin", "naisilla", "naisilta", "naisille", "naisina",
            "naisiksi",
        ],
    ),
    (
        // Irregular adjective, stem parhaa-.
        "paras",
        &[
            "paras", "parhaan", "parasta", "parhaassa", "parhaasta", "parhaaseen", "parhaalla",
            "parhaalta", "parhaalle", "parhaana", "parhaaksi", "parhaat", "parhaiden",
            "parhaita", "parhaissa", "parhaista", "parhaisiin", "parhailla", "parhailta",
            "parhaille", "parhaina", "parhaiksi",
        ],
    ),
    (
        "hyvä",
        &[
            "hyvä", "hyvän", "hyvää", "hyvässä", "hyvästä", "hyvään", "hyvällä", "hyvältä",
            "hyvälle", "hyvänä", "hyväksi", "hyvät", "hyvien", "hyviä", "hyvissä", "hyvistä",
            "hyviin", "hyvillä", "hyviltä", "hyville", "hyvinä", "hyviksi",
        ],
    ),
    (
        "kissa",
        &[
            // singular
            "kissa", "kissan", "kissaa", "kissassa", "kissasta", "kissaan", "kissalla",
            "kissalta", "kissalle", "kissana", "kissaksi",
            // plural
            "kissat", "kissojen", "kissoja", "kissoissa", "kissoista", "kissoihin", "kissoilla",
            "kissoilta", "kissoille", "kissoina", "kissoiksi",
        ],
    ),
    (
        "koira",
        &[
            // singular
            "koira", "koiran", "koiraa", "koirassa", "koirasta", "koiraan", "koiralla",
            "koiralta", "koiralle", "koirana", "koiraksi",
            // plural
            "koirat", "koirien", "koiria", "koirissa", "koirista", "koiriin", "koirilla",
            "koirilta", "koirille", "koirina", "koiriksi",
        ],
    ),
    (
        "talo",
        &[
            // singular
            "talo", "talon", "taloa", "talossa", "talosta", "taloon", "talolla", "talolta",
            "talolle", "talona", "taloksi",
            // plural
            "talot", "talojen", "taloja", "taloissa", "taloista", "taloihin", "taloilla",
            "taloilta", "taloille", "taloina", "taloiksi",
        ],
    ),
    (
        "auto",
        &[
            // singular
            "auto", "auton", "autoa", "autossa", "autosta", "autoon", "autolla", "autolta",
            "autolle", "autona", "autoksi",
            // plural
            "autot", "autojen", "autoja", "autoissa", "autoista", "autoihin", "autoilla",
            "autoilta", "autoille", "autoina", "autoiksi",
        ],
    ),
    (
        // Stem alternation hiire-/hiir-.
        "hiiri",
        &[
            // singular
            "hiiri", "hiiren", "hiirtä", "hiiressä", "hiirestä", "hiireen", "hiirellä",
            "hiireltä", "hiirelle", "hiirenä", "hiireksi",
            // plural
            "hiiret", "hiirten", "hiiriä", "hiirissä", "hiiristä", "hiiriin", "hiirillä",
            "hiiriltä", "hiirille", "hiirinä", "hiiriksi",
        ],
    ),
    (
        "puutarha",
        &[
            "puutarha", "puutarhan", "puutarhaa", "puutarhassa", "puutarhasta", "puutarhaan",
        ],
    ),
    // Verbs: finite forms plus the infinitive.
    ("syödä", &["syö", "söi", "söivät", "syödä"]),
    ("juosta", &["juokse", "juoksi", "juoksee", "juoksivat", "juosta"]),
    ("olla", &["on", "oli", "ovat", "olivat", "olla"]),
    // Adjectives.
    ("nopea", &["nopea", "nopean", "nopeaa", "nopeasti"]),
    ("iso", &["iso", "ison", "isoa", "isossa"]),
    ("pieni", &["pieni", "pienen", "pientä"]),
];

/// Surface-form index over [`KNOWN_WORDS`]. Built once at startup and
/// shared read-only by every reduction.
pub struct Lexicon {
    forms: HashMap<&'static str, &'static str>,
}

impl Lexicon {
    pub fn new() -> Self {
        let mut forms = HashMap::new();
        for (lemma, surface) in KNOWN_WORDS {
            for form in *surface {
                // First paradigm wins if two entries ever share a form.
                forms.entry(*form).or_insert(*lemma);
            }
        }
        Lexicon { forms }
    }

    /// Lemma for a case-folded surface form, if the form is attested.
    pub fn lookup(&self, word: &str) -> Option<&'static str> {
        self.forms.get(word).copied()
    }

    /// Whether the case-folded form is attested at all.
    pub fn contains(&self, word: &str) -> bool {
        self.forms.contains_key(word)
    }

    /// Every (lemma, surface forms) pair, in declaration order.
    pub fn entries() -> &'static [(&'static str, &'static [&'static str])] {
        KNOWN_WORDS
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflected_forms_resolve_to_their_lemma() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.lookup("kissan"), Some("kissa"));
        assert_eq!(lexicon.lookup("naista"), Some("nainen"));
        assert_eq!(lexicon.lookup("parhaisiin"), Some("paras"));
        assert_eq!(lexicon.lookup("söivät"), Some("syödä"));
        assert_eq!(lexicon.lookup("ovat"), Some("olla"));
    }

    #[test]
    fn lemmas_resolve_to_themselves() {
        let lexicon = Lexicon::new();
        for (lemma, _) in Lexicon::entries() {
            assert_eq!(lexicon.lookup(lemma), Some(*lemma), "lemma {lemma}");
        }
    }

    #[test]
    fn unknown_words_miss() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.lookup("verkko"), None);
        assert_eq!(lexicon.lookup(""), None);
        assert!(!lexicon.contains("Kissa"), "lookup is exact, callers fold case first");
    }

    #[test]
    fn every_lemma_lists_itself() {
        for (lemma, forms) in Lexicon::entries() {
            assert!(
                forms.contains(lemma),
                "{lemma} must appear in its own surface forms"
            );
        }
    }
}

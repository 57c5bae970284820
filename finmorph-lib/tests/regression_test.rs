// Regression tests for known analyses, report arithmetic and the
// serialized shape of each response type.

use finmorph_lib::types::{Case, ComplexityRating, Morphology, Number, Pos, Severity};
use finmorph_lib::{
    analyze_complexity, analyze_text, analyze_word, detect_profanity, extract_features, reduce,
    Lexicon,
};

fn lexicon() -> Lexicon {
    Lexicon::new()
}

fn tags(case: Case, number: Number) -> Morphology {
    Morphology::new(case, number)
}

#[test]
fn kissan_is_genitive_singular() {
    let lex = lexicon();
    let analysis = analyze_word("kissan", &lex, true);
    assert_eq!(analysis.lemma, "kissa");
    assert_eq!(analysis.pos, Pos::Noun);
    assert_eq!(
        analysis.morphology,
        Some(tags(Case::Genitive, Number::Singular))
    );
}

#[test]
fn taloissa_is_inessive_plural() {
    let lex = lexicon();
    let analysis = analyze_word("taloissa", &lex, true);
    assert_eq!(analysis.lemma, "talo");
    assert_eq!(
        analysis.morphology,
        Some(tags(Case::Inessive, Number::Plural))
    );
}

#[test]
fn naisessa_reads_off_the_extended_stem() {
    let lex = lexicon();
    let analysis = analyze_word("naisessa", &lex, true);
    assert_eq!(analysis.lemma, "nainen");
    assert_eq!(
        analysis.morphology,
        Some(tags(Case::Inessive, Number::Singular))
    );
}

#[test]
fn naista_reads_off_the_contracted_stem() {
    let lex = lexicon();
    let analysis = analyze_word("naista", &lex, true);
    assert_eq!(analysis.lemma, "nainen");
    assert_eq!(
        analysis.morphology,
        Some(tags(Case::Partitive, Number::Singular))
    );
}

#[test]
fn kissat_is_nominative_plural() {
    let lex = lexicon();
    let analysis = analyze_word("kissat", &lex, true);
    assert_eq!(analysis.lemma, "kissa");
    assert_eq!(
        analysis.morphology,
        Some(tags(Case::Nominative, Number::Plural))
    );
}

#[test]
fn verbs_fall_outside_the_case_system() {
    let lex = lexicon();
    let analysis = analyze_word("söi", &lex, true);
    assert_eq!(analysis.lemma, "syödä");
    assert_eq!(analysis.pos, Pos::Verb);
    // A past tense carries no case ending, so the diagnosis falls back
    // to the nominative singular default.
    assert_eq!(
        analysis.morphology,
        Some(tags(Case::Nominative, Number::Singular))
    );
}

// ---------------------------------------------------------------------------
// Whole-text analysis
// ---------------------------------------------------------------------------

#[test]
fn sentence_words_are_lemmatized_in_order() {
    let lex = lexicon();
    let analysis = analyze_text("Kissa söi hiiren", &lex, true);
    assert_eq!(analysis.text, "Kissa söi hiiren");
    assert_eq!(analysis.word_count, 3);
    let lemmas: Vec<&str> = analysis.words.iter().map(|w| w.lemma.as_str()).collect();
    assert_eq!(lemmas, ["kissa", "syödä", "hiiri"]);
    assert_eq!(analysis.words[0].original, "Kissa");
    assert_eq!(analysis.words[1].pos, Pos::Verb);
}

// ---------------------------------------------------------------------------
// Serialized shapes
// ---------------------------------------------------------------------------

#[test]
fn lemma_only_json_omits_morphology() {
    let lex = lexicon();
    let value = serde_json::to_value(analyze_word("kissan", &lex, false)).unwrap();
    assert!(value.get("morphology").is_none());
    assert_eq!(value["original"], "kissan");
    assert_eq!(value["lemma"], "kissa");
    assert_eq!(value["pos"], "NOUN");
}

#[test]
fn morphology_json_spells_out_case_and_number() {
    let lex = lexicon();
    let value = serde_json::to_value(analyze_word("kissan", &lex, true)).unwrap();
    assert_eq!(value["morphology"]["case"], "Genitive");
    assert_eq!(value["morphology"]["number"], "Singular");
}

#[test]
fn summary_complexity_json_omits_the_distribution() {
    let value = serde_json::to_value(analyze_complexity("Kissa söi.", false)).unwrap();
    assert!(value.get("case_distribution").is_none());
    assert_eq!(value["complexity_rating"], "Complex");
}

#[test]
fn clean_text_json_keeps_the_none_band() {
    let report = detect_profanity("Tämä on mukava päivä", true, 0.5);
    let value = serde_json::to_value(report).unwrap();
    assert_eq!(
        value["severity"], "None",
        "a clean text gets the None band, not a null"
    );
    assert_eq!(value["is_toxic"], false);
    assert_eq!(value["toxicity_score"], 0.0);
    assert!(value.get("flagged_words").is_none());
}

// ---------------------------------------------------------------------------
// Pinned scoring arithmetic
// ---------------------------------------------------------------------------

#[test]
fn subordinate_clause_sentence_scores_complex() {
    let report = analyze_complexity("Kissa, joka söi hiiren, juoksi.", true);
    assert_eq!(report.sentence_count, 1);
    assert_eq!(report.word_count, 5);
    assert_eq!(report.clause_count, 4, "sentence + joka + two commas");
    assert_eq!(report.average_word_length, 4.8);
    // Three case buckets (9) + average length (14.4) + clause density
    // capped at 40.
    assert_eq!(report.morphological_depth_score, 63.4);
    assert_eq!(report.complexity_rating, ComplexityRating::Complex);

    let cases = report
        .case_distribution
        .expect("detailed mode keeps the distribution");
    assert_eq!(cases.nominative, 5, "nominative counts every token");
    assert_eq!(cases.genitive, 1);
    assert_eq!(cases.partitive, 2, "kissa and joka both end in -a");
    assert_eq!(cases.translative, 1, "juoksi ends in -ksi");
    assert_eq!(cases.inessive, 0);
    assert_eq!(cases.other, 0);

    // Summary mode drops the distribution and with it the case points.
    let summary = analyze_complexity("Kissa, joka söi hiiren, juoksi.", false);
    assert_eq!(summary.morphological_depth_score, 54.4);
    assert_eq!(summary.complexity_rating, ComplexityRating::Complex);
}

#[test]
fn insult_phrase_flags_word_and_phrase() {
    let report = detect_profanity("olet tyhmä", true, 0.5);
    assert!(report.is_toxic);
    assert_eq!(report.toxicity_score, 0.72);
    assert_eq!(report.severity, Severity::High);

    let flagged = report.flagged_words.expect("matches were requested");
    assert_eq!(flagged.len(), 2, "the word hit and the phrase hit both count");
    assert_eq!(flagged[0].word, "tyhmä");
    assert_eq!(flagged[0].position, 5);
    assert_eq!(flagged[0].confidence, 0.4);
    assert_eq!(flagged[1].word, "olet tyhmä");
    assert_eq!(flagged[1].position, 0);
    assert_eq!(flagged[1].confidence, 0.8);
}

// ---------------------------------------------------------------------------
// Pinned reduction quirks
// ---------------------------------------------------------------------------

#[test]
fn genitive_plural_en_outranks_the_bare_n() {
    // Every "-en" word is claimed by the genitive plural row before the
    // bare "-n" is ever tried, including true singulars like "hiiren".
    assert_eq!(
        extract_features("hiiren", "hiiri"),
        tags(Case::Genitive, Number::Plural)
    );
}

#[test]
fn unlisted_sta_words_contract_to_nen() {
    let lex = lexicon();
    // "-sta"/"-stä" always reads as a contracted "-nen" partitive when
    // the lexicon does not know better.
    assert_eq!(reduce("puistosta", &lex), "puistonen");
    assert_eq!(reduce("talosta", &lex), "talo");
}

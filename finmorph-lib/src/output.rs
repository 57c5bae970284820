// Plain-text rendering of analyses.

use crate::types::{TextAnalysis, WordAnalysis};

/// One line per word: `original → lemma (POS, Case Number)`. The
/// case/number pair is left out when the analysis was lemma-only.
pub fn annotate_word(word: &WordAnalysis) -> String {
    match &word.morphology {
        Some(m) => format!("{} → {} ({}, {})", word.original, word.lemma, word.pos, m),
        None => format!("{} → {} ({})", word.original, word.lemma, word.pos),
    }
}

/// Annotate every word of an analysis, one line per word.
pub fn annotate_text(analysis: &TextAnalysis) -> String {
    analysis
        .words
        .iter()
        .map(annotate_word)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::text::analyze_text;
    use crate::types::{Case, Morphology, Number, Pos};

    #[test]
    fn annotates_with_morphology() {
        let word = WordAnalysis {
            original: "Kissan".to_string(),
            lemma: "kissa".to_string(),
            pos: Pos::Noun,
            morphology: Some(Morphology::new(Case::Genitive, Number::Singular)),
        };
        assert_eq!(
            annotate_word(&word),
            "Kissan → kissa (NOUN, Genitive Singular)"
        );
    }

    #[test]
    fn annotates_without_morphology() {
        let word = WordAnalysis {
            original: "söi".to_string(),
            lemma: "syödä".to_string(),
            pos: Pos::Verb,
            morphology: None,
        };
        assert_eq!(annotate_word(&word), "söi → syödä (VERB)");
    }

    #[test]
    fn text_annotation_is_one_line_per_word() {
        let lexicon = Lexicon::new();
        let analysis = analyze_text("Kissa söi", &lexicon, true);
        let rendered = annotate_text(&analysis);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Kissa → kissa (NOUN, Nominative Singular)");
        assert_eq!(lines[1], "söi → syödä (VERB, Nominative Singular)");
    }
}

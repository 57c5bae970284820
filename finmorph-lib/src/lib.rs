pub mod complexity;
pub mod features;
pub mod lexicon;
pub mod morphology;
pub mod output;
pub mod profanity;
pub mod rules;
pub mod text;
pub mod types;

pub use complexity::analyze_complexity;
pub use features::extract_features;
pub use lexicon::Lexicon;
pub use morphology::{analyze_word, classify_pos, reduce};
pub use profanity::detect_profanity;
pub use text::{analyze_text, tokenize};
pub use types::{
    Case, CaseDistribution, ComplexityRating, ComplexityReport, FlaggedWord, Morphology, Number,
    Pos, ProfanityReport, Severity, TextAnalysis, WordAnalysis,
};

//! Descriptive text statistics.
//!
//! [`TextStatistics`] collects the basic counts over a document and two
//! derived ratios. Division-by-zero cases are guarded fallbacks to zero, not
//! errors: an empty document has an average sentence length and a lexical
//! diversity of 0.
//!
//! # Examples
//!
//! ```
//! use sagitta::analysis::statistics::TextStatistics;
//! use sagitta::annotation::Annotator;
//! use sagitta::annotation::simple::SimpleAnnotator;
//!
//! let doc = SimpleAnnotator::new().annotate("One two three. Four five.").unwrap();
//! let stats = TextStatistics::compute(&doc);
//!
//! assert_eq!(stats.total_sentences, 2);
//! assert_eq!(stats.total_words, 5);
//! assert_eq!(stats.avg_sentence_length, 2.5);
//! ```

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Counts and derived ratios for a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Characters in the raw source text.
    pub total_characters: usize,

    /// Tokens that are not whitespace.
    pub total_tokens: usize,

    /// Tokens that are neither punctuation nor whitespace.
    pub total_words: usize,

    /// Distinct word surface forms, compared case-insensitively.
    pub unique_words: usize,

    /// Number of sentences.
    pub total_sentences: usize,

    /// `total_words / total_sentences`, 0 if there are no sentences.
    pub avg_sentence_length: f64,

    /// `unique_words / total_words`, 0 if there are no words.
    pub lexical_diversity: f64,
}

impl TextStatistics {
    /// Compute statistics for a document.
    pub fn compute(doc: &Document) -> Self {
        let total_characters = doc.text().chars().count();
        let total_tokens = doc.tokens().iter().filter(|t| !t.is_space).count();
        let total_words = doc.words().count();
        let total_sentences = doc.sentences().len();

        let unique: AHashSet<String> = doc.words().map(|t| t.text.to_lowercase()).collect();
        let unique_words = unique.len();

        let avg_sentence_length = if total_sentences > 0 {
            total_words as f64 / total_sentences as f64
        } else {
            0.0
        };
        let lexical_diversity = if total_words > 0 {
            unique_words as f64 / total_words as f64
        } else {
            0.0
        };

        TextStatistics {
            total_characters,
            total_tokens,
            total_words,
            unique_words,
            total_sentences,
            avg_sentence_length,
            lexical_diversity,
        }
    }
}

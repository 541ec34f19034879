//! Noun-phrase frequency ranking.
//!
//! [`NounPhraseRanker`] counts the materialized surface text of the
//! document's noun-phrase spans, case-sensitively and by exact string match,
//! with the same ordering discipline as the token frequency analyzer:
//! descending count, ties broken by first occurrence. Overlap policy between
//! spans is the annotation provider's concern; the ranker counts whatever
//! spans it is given.
//!
//! # Examples
//!
//! ```
//! use sagitta::analysis::noun_phrase::NounPhraseRanker;
//! use sagitta::annotation::Annotator;
//! use sagitta::annotation::simple::SimpleAnnotator;
//!
//! let doc = SimpleAnnotator::new()
//!     .annotate("A gray wolf watched a gray wolf. One gray fox watched.")
//!     .unwrap();
//! let top = NounPhraseRanker::new().analyze(&doc);
//!
//! // Counting is case-sensitive: "A gray wolf" and "a gray wolf" are
//! // distinct keys, so the tie resolves to the first occurrence.
//! assert_eq!(top[0].key, "A gray wolf");
//! assert_eq!(top[0].count, 1);
//! ```

use crate::analysis::frequency::{DEFAULT_LIMIT, FrequencyEntry, ranked_counts};
use crate::document::Document;
use crate::error::{Result, SagittaError};

/// Ranks noun-phrase spans by surface-text occurrence count.
#[derive(Clone, Debug)]
pub struct NounPhraseRanker {
    limit: usize,
}

impl NounPhraseRanker {
    /// Create a ranker with the default limit of 10.
    pub fn new() -> Self {
        NounPhraseRanker {
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the maximum number of entries returned.
    ///
    /// Returns [`SagittaError::InvalidArgument`] for a zero limit.
    pub fn with_limit(mut self, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(SagittaError::invalid_argument(
                "noun phrase limit must be greater than zero",
            ));
        }
        self.limit = limit;
        Ok(self)
    }

    /// Rank the document's noun phrases.
    ///
    /// A document without noun-phrase spans yields an empty vector.
    pub fn analyze(&self, doc: &Document) -> Vec<FrequencyEntry> {
        let keys = doc.noun_phrases().iter().map(|span| span.text.clone());
        ranked_counts(keys, self.limit)
    }
}

impl Default for NounPhraseRanker {
    fn default() -> Self {
        NounPhraseRanker::new()
    }
}

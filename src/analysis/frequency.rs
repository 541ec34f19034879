//! Token and lemma frequency ranking.
//!
//! [`FrequencyAnalyzer`] counts content tokens (everything that is not a stop
//! word, punctuation, or whitespace) and returns the most frequent keys in
//! descending count order. Entries with equal counts keep their
//! first-occurrence order in the document; the sort key is explicitly
//! `(descending count, first-seen position)`, never map iteration order.
//!
//! # Examples
//!
//! ```
//! use sagitta::analysis::frequency::{FrequencyAnalyzer, TokenField};
//! use sagitta::document::{Document, Token};
//!
//! let tokens = vec![
//!     Token::word("b", "b", "NOUN", 0),
//!     Token::word("a", "a", "NOUN", 1),
//!     Token::word("b", "b", "NOUN", 2),
//!     Token::word("a", "a", "NOUN", 3),
//!     Token::word("c", "c", "NOUN", 4),
//! ];
//! let doc = Document::new("b a b a c".to_string(), tokens, vec![], vec![]).unwrap();
//!
//! let analyzer = FrequencyAnalyzer::new(TokenField::Text);
//! let top = analyzer.analyze(&doc);
//!
//! // "b" precedes "a": tied at 2, but "b" occurs first.
//! assert_eq!(top[0].key, "b");
//! assert_eq!(top[1].key, "a");
//! assert_eq!(top[2].key, "c");
//! ```

use std::cmp::Reverse;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{Result, SagittaError};

/// Default maximum number of entries returned by ranking components.
pub const DEFAULT_LIMIT: usize = 10;

/// Which token field a [`FrequencyAnalyzer`] counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenField {
    /// The surface text, counted verbatim.
    Text,
    /// The lemma, lowercased before counting.
    Lemma,
}

/// One ranked entry: a key and its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// The counted key (surface text, lemma, or noun-phrase text).
    pub key: String,

    /// Number of occurrences in the document.
    pub count: usize,
}

/// Count keys in encounter order and return the top `limit` entries.
///
/// Ties on count are broken by the index of the key's first occurrence in
/// the input iterator, which for document-derived iterators is document
/// order.
pub(crate) fn ranked_counts(
    keys: impl Iterator<Item = String>,
    limit: usize,
) -> Vec<FrequencyEntry> {
    let mut counts: AHashMap<String, (usize, usize)> = AHashMap::new();
    for (index, key) in keys.enumerate() {
        let entry = counts.entry(key).or_insert((0, index));
        entry.0 += 1;
    }

    let mut entries: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(key, (count, first_seen))| (key, count, first_seen))
        .collect();
    entries.sort_by_key(|&(_, count, first_seen)| (Reverse(count), first_seen));
    entries
        .into_iter()
        .take(limit)
        .map(|(key, count, _)| FrequencyEntry { key, count })
        .collect()
}

/// Ranks content tokens by occurrence count.
#[derive(Clone, Debug)]
pub struct FrequencyAnalyzer {
    field: TokenField,
    limit: usize,
}

impl FrequencyAnalyzer {
    /// Create an analyzer over the given field with the default limit of 10.
    pub fn new(field: TokenField) -> Self {
        FrequencyAnalyzer {
            field,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the maximum number of entries returned.
    ///
    /// Returns [`SagittaError::InvalidArgument`] for a zero limit.
    pub fn with_limit(mut self, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(SagittaError::invalid_argument(
                "frequency limit must be greater than zero",
            ));
        }
        self.limit = limit;
        Ok(self)
    }

    /// The field this analyzer counts.
    pub fn field(&self) -> TokenField {
        self.field
    }

    /// Rank the document's content tokens.
    ///
    /// An empty filtered token set yields an empty vector.
    pub fn analyze(&self, doc: &Document) -> Vec<FrequencyEntry> {
        let field = self.field;
        let keys = doc.content_tokens().map(move |token| match field {
            TokenField::Text => token.text.clone(),
            TokenField::Lemma => token.lemma.to_lowercase(),
        });
        ranked_counts(keys, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Token;

    fn doc_from_words(words: &[&str]) -> Document {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::word(*w, w.to_lowercase(), "NOUN", i))
            .collect();
        Document::new(words.join(" "), tokens, vec![], vec![]).unwrap()
    }

    #[test]
    fn test_descending_counts() {
        let doc = doc_from_words(&["x", "y", "x", "x", "y", "z"]);
        let top = FrequencyAnalyzer::new(TokenField::Text).analyze(&doc);
        assert_eq!(
            top,
            vec![
                FrequencyEntry { key: "x".to_string(), count: 3 },
                FrequencyEntry { key: "y".to_string(), count: 2 },
                FrequencyEntry { key: "z".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_tie_break_by_first_occurrence() {
        let doc = doc_from_words(&["b", "a", "b", "a", "c"]);
        let top = FrequencyAnalyzer::new(TokenField::Text).analyze(&doc);
        assert_eq!(top[0].key, "b");
        assert_eq!(top[1].key, "a");
        assert_eq!(top[2].key, "c");
    }

    #[test]
    fn test_limit_truncates() {
        let doc = doc_from_words(&["a", "b", "c", "d", "e"]);
        let analyzer = FrequencyAnalyzer::new(TokenField::Text)
            .with_limit(2)
            .unwrap();
        assert_eq!(analyzer.analyze(&doc).len(), 2);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = FrequencyAnalyzer::new(TokenField::Text).with_limit(0);
        assert!(matches!(result, Err(SagittaError::InvalidArgument(_))));
    }

    #[test]
    fn test_filters_non_content_tokens() {
        let tokens = vec![
            Token::word("rust", "rust", "NOUN", 0),
            Token::stop_word("the", "the", "DET", 1),
            Token::punct(".", 2),
            Token::space("\n", 3),
        ];
        let doc = Document::new("rust the .\n".to_string(), tokens, vec![], vec![]).unwrap();
        let top = FrequencyAnalyzer::new(TokenField::Text).analyze(&doc);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].key, "rust");
    }

    #[test]
    fn test_lemma_field_lowercases() {
        let tokens = vec![
            Token::word("Running", "Run", "VERB", 0),
            Token::word("runs", "run", "VERB", 1),
        ];
        let doc = Document::new("Running runs".to_string(), tokens, vec![], vec![]).unwrap();
        let top = FrequencyAnalyzer::new(TokenField::Lemma).analyze(&doc);
        assert_eq!(top, vec![FrequencyEntry { key: "run".to_string(), count: 2 }]);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new(String::new(), vec![], vec![], vec![]).unwrap();
        assert!(FrequencyAnalyzer::new(TokenField::Text).analyze(&doc).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let doc = doc_from_words(&["b", "a", "b", "a", "c"]);
        let analyzer = FrequencyAnalyzer::new(TokenField::Text);
        assert_eq!(analyzer.analyze(&doc), analyzer.analyze(&doc));
    }
}

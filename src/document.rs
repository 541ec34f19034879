//! The annotated document model.
//!
//! This module defines the value types every analytic component consumes:
//! [`Token`], [`Sentence`], [`NounPhraseSpan`], and the [`Document`] that ties
//! them together with the raw source text.
//!
//! A `Document` is produced once by an annotation provider (see
//! [`crate::annotation`]) and is read-only afterwards. Every analytic
//! operation is a pure function of a `&Document` plus scalar parameters, so a
//! single instance can be shared across threads freely.
//!
//! # Examples
//!
//! Building a document by hand (tests and custom providers do this):
//!
//! ```
//! use sagitta::document::{Document, Sentence, Token};
//!
//! let tokens = vec![
//!     Token::word("Hello", "hello", "INTJ", 0),
//!     Token::punct(",", 1),
//!     Token::word("world", "world", "NOUN", 2),
//! ];
//! let sentences = vec![Sentence::new(0, 3)];
//! let doc = Document::new("Hello, world".to_string(), tokens, sentences, vec![]).unwrap();
//!
//! assert_eq!(doc.len(), 3);
//! assert_eq!(doc.words().count(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SagittaError};

/// A single annotated token: surface text plus grammatical metadata.
///
/// `position` is the token's zero-based index in document order. Positions
/// are assigned by the annotation provider and validated by
/// [`Document::new`]; they never change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface text of the token.
    pub text: String,

    /// The canonical base form (e.g. "running" -> "run").
    pub lemma: String,

    /// Coarse part-of-speech tag (e.g. "NOUN", "VERB", "PUNCT").
    pub pos_tag: String,

    /// Whether this token is a stop word.
    pub is_stop: bool,

    /// Whether this token is punctuation.
    pub is_punct: bool,

    /// Whether this token is a whitespace run.
    pub is_space: bool,

    /// Zero-based index of the token in document order.
    pub position: usize,
}

impl Token {
    /// Create a fully specified token.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos_tag: impl Into<String>,
        is_stop: bool,
        is_punct: bool,
        is_space: bool,
        position: usize,
    ) -> Self {
        Token {
            text: text.into(),
            lemma: lemma.into(),
            pos_tag: pos_tag.into(),
            is_stop,
            is_punct,
            is_space,
            position,
        }
    }

    /// Create a non-stop word token.
    pub fn word(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos_tag: impl Into<String>,
        position: usize,
    ) -> Self {
        Token::new(text, lemma, pos_tag, false, false, false, position)
    }

    /// Create a stop-word token.
    pub fn stop_word(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos_tag: impl Into<String>,
        position: usize,
    ) -> Self {
        Token::new(text, lemma, pos_tag, true, false, false, position)
    }

    /// Create a punctuation token.
    pub fn punct(text: impl Into<String>, position: usize) -> Self {
        let text = text.into();
        let lemma = text.clone();
        Token::new(text, lemma, "PUNCT", false, true, false, position)
    }

    /// Create a whitespace token.
    pub fn space(text: impl Into<String>, position: usize) -> Self {
        let text = text.into();
        let lemma = text.clone();
        Token::new(text, lemma, "SPACE", false, false, true, position)
    }

    /// Whether this token counts as a word (not punctuation, not whitespace).
    pub fn is_word(&self) -> bool {
        !self.is_punct && !self.is_space
    }

    /// Whether this token carries content (a word that is not a stop word).
    pub fn is_content(&self) -> bool {
        self.is_word() && !self.is_stop
    }
}

/// A sentence as a half-open range `[start, end)` over token positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position of the first token in the sentence.
    pub start: usize,

    /// One past the position of the last token in the sentence.
    pub end: usize,
}

impl Sentence {
    /// Create a sentence range.
    pub fn new(start: usize, end: usize) -> Self {
        Sentence { start, end }
    }

    /// Number of tokens covered by the sentence.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the sentence covers no tokens.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A contiguous noun-phrase span with its materialized surface text.
///
/// The text is the concatenation of the covered tokens' surface text,
/// including any internal punctuation, as produced by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounPhraseSpan {
    /// Position of the first token in the span.
    pub start: usize,

    /// One past the position of the last token in the span.
    pub end: usize,

    /// Materialized surface text of the span.
    pub text: String,
}

impl NounPhraseSpan {
    /// Create a noun-phrase span.
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        NounPhraseSpan {
            start,
            end,
            text: text.into(),
        }
    }
}

/// An immutable annotated document.
///
/// Holds the raw source text, the ordered token sequence, the sentence
/// ranges, and the noun-phrase spans. Constructed once by an annotation
/// provider; the analytic components only ever read it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
    noun_phrases: Vec<NounPhraseSpan>,
}

impl Document {
    /// Create a document, validating the provider's invariants.
    ///
    /// Token positions must be strictly increasing and contiguous from 0,
    /// and every sentence range must be valid against the token sequence.
    /// Violations indicate a buggy provider and are reported as
    /// [`SagittaError::Annotation`].
    pub fn new(
        text: String,
        tokens: Vec<Token>,
        sentences: Vec<Sentence>,
        noun_phrases: Vec<NounPhraseSpan>,
    ) -> Result<Self> {
        for (index, token) in tokens.iter().enumerate() {
            if token.position != index {
                return Err(SagittaError::annotation(format!(
                    "token position {} found at index {index}, positions must be contiguous from 0",
                    token.position
                )));
            }
        }

        for sentence in &sentences {
            if sentence.start > sentence.end || sentence.end > tokens.len() {
                return Err(SagittaError::annotation(format!(
                    "sentence range [{}, {}) is invalid for a document of {} tokens",
                    sentence.start,
                    sentence.end,
                    tokens.len()
                )));
            }
        }

        for span in &noun_phrases {
            if span.start >= span.end || span.end > tokens.len() {
                return Err(SagittaError::annotation(format!(
                    "noun phrase range [{}, {}) is invalid for a document of {} tokens",
                    span.start,
                    span.end,
                    tokens.len()
                )));
            }
        }

        Ok(Document {
            text,
            tokens,
            sentences,
            noun_phrases,
        })
    }

    /// The raw source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All tokens in document order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Sentence ranges in document order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Noun-phrase spans in document order.
    pub fn noun_phrases(&self) -> &[NounPhraseSpan] {
        &self.noun_phrases
    }

    /// Total number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens that are neither punctuation nor whitespace.
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_word())
    }

    /// Tokens that are words and not stop words.
    pub fn content_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_validates_positions() {
        let tokens = vec![Token::word("a", "a", "NOUN", 0), Token::word("b", "b", "NOUN", 2)];
        let result = Document::new("a b".to_string(), tokens, vec![], vec![]);
        assert!(matches!(result, Err(SagittaError::Annotation(_))));
    }

    #[test]
    fn test_document_validates_sentence_ranges() {
        let tokens = vec![Token::word("a", "a", "NOUN", 0)];
        let result = Document::new(
            "a".to_string(),
            tokens,
            vec![Sentence::new(0, 5)],
            vec![],
        );
        assert!(matches!(result, Err(SagittaError::Annotation(_))));
    }

    #[test]
    fn test_document_validates_noun_phrase_ranges() {
        let tokens = vec![Token::word("a", "a", "NOUN", 0)];
        let result = Document::new(
            "a".to_string(),
            tokens,
            vec![],
            vec![NounPhraseSpan::new(1, 1, "a")],
        );
        assert!(matches!(result, Err(SagittaError::Annotation(_))));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new(String::new(), vec![], vec![], vec![]).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.words().count(), 0);
        assert_eq!(doc.content_tokens().count(), 0);
    }

    #[test]
    fn test_token_filters() {
        let tokens = vec![
            Token::word("Rust", "rust", "PROPN", 0),
            Token::stop_word("is", "be", "AUX", 1),
            Token::word("fast", "fast", "ADJ", 2),
            Token::punct(".", 3),
            Token::space("\n", 4),
        ];
        let doc = Document::new(
            "Rust is fast.\n".to_string(),
            tokens,
            vec![Sentence::new(0, 4)],
            vec![],
        )
        .unwrap();

        assert_eq!(doc.len(), 5);
        assert_eq!(doc.words().count(), 3);
        assert_eq!(doc.content_tokens().count(), 2);
        assert_eq!(doc.sentences()[0].len(), 4);
    }
}

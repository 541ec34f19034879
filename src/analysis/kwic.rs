//! Keyword-in-context concordance search.
//!
//! [`KwicSearcher`] finds every token whose surface text equals the keyword
//! (case-insensitive, exact match, never substring) and emits the joined
//! surface text of a window of tokens around each hit. Windows are silently
//! clipped at the document boundaries, never padded. Results come back in
//! document order, capped at the first 10 matches.
//!
//! The searcher performs no keyword validation; rejecting an empty keyword
//! is the caller's responsibility.
//!
//! # Examples
//!
//! ```
//! use sagitta::analysis::kwic::KwicSearcher;
//! use sagitta::document::{Document, Token};
//!
//! let words = ["the", "quick", "brown", "fox"];
//! let tokens: Vec<Token> = words
//!     .iter()
//!     .enumerate()
//!     .map(|(i, w)| Token::word(*w, *w, "NOUN", i))
//!     .collect();
//! let doc = Document::new(words.join(" "), tokens, vec![], vec![]).unwrap();
//!
//! let searcher = KwicSearcher::new().with_window(1);
//! assert_eq!(searcher.search(&doc, "brown"), vec!["quick brown fox"]);
//! ```

use crate::document::Document;

/// Default number of context tokens on each side of a match.
pub const DEFAULT_WINDOW: usize = 3;

/// Maximum number of matches returned per search.
pub const MAX_MATCHES: usize = 10;

/// Bounded-window concordance searcher.
#[derive(Clone, Debug)]
pub struct KwicSearcher {
    window: usize,
}

impl KwicSearcher {
    /// Create a searcher with the default window of 3 tokens per side.
    pub fn new() -> Self {
        KwicSearcher {
            window: DEFAULT_WINDOW,
        }
    }

    /// Set the context window size (tokens on each side).
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Find the keyword and return each match's context line.
    ///
    /// Matching compares lowercased token text against the lowercased
    /// keyword. The window `[i - w, i + w + 1)` is clipped to the document;
    /// token texts are joined with single spaces. No match yields an empty
    /// vector.
    pub fn search(&self, doc: &Document, keyword: &str) -> Vec<String> {
        let needle = keyword.to_lowercase();
        let tokens = doc.tokens();
        let mut results = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if token.text.to_lowercase() != needle {
                continue;
            }
            let start = index.saturating_sub(self.window);
            let end = usize::min(tokens.len(), index + self.window + 1);
            let context = tokens[start..end]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            results.push(context);
            if results.len() == MAX_MATCHES {
                break;
            }
        }

        results
    }
}

impl Default for KwicSearcher {
    fn default() -> Self {
        KwicSearcher::new()
    }
}

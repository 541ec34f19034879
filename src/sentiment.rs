//! Sentiment scoring.
//!
//! The analytic components treat sentiment as an external, deterministic
//! function from a span of text to a [`SentimentScore`]. This module defines
//! the [`SentimentScorer`] seam and ships a lexicon-based implementation,
//! [`LexiconScorer`](lexicon::LexiconScorer).
//!
//! # Examples
//!
//! ```
//! use sagitta::sentiment::SentimentScorer;
//! use sagitta::sentiment::lexicon::LexiconScorer;
//!
//! let scorer = LexiconScorer::new();
//! let score = scorer.score("a wonderful day").unwrap();
//! assert!(score.polarity > 0.0);
//! ```

pub mod lexicon;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A polarity/subjectivity pair.
///
/// Polarity is in `[-1.0, 1.0]` (negative to positive sentiment);
/// subjectivity is in `[0.0, 1.0]` (fact to opinion).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Signed sentiment strength in `[-1.0, 1.0]`.
    pub polarity: f64,

    /// Degree of opinion vs. fact in `[0.0, 1.0]`.
    pub subjectivity: f64,
}

impl SentimentScore {
    /// Create a score.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        SentimentScore {
            polarity,
            subjectivity,
        }
    }

    /// The neutral score `(0.0, 0.0)`.
    pub fn neutral() -> Self {
        SentimentScore::new(0.0, 0.0)
    }
}

/// Scores a span of text for sentiment.
///
/// Implementations must be deterministic for identical input and free of
/// side effects; the aggregation layer may call `score` once per distinct
/// surface string and reuse the result.
pub trait SentimentScorer: Send + Sync {
    /// Score a span of text.
    fn score(&self, text: &str) -> Result<SentimentScore>;

    /// Name of this scorer, for diagnostics.
    fn name(&self) -> &'static str;
}

//! # Sagitta
//!
//! A document analytics library for Rust.
//!
//! Sagitta takes a single natural-language document and reports lexical,
//! statistical, sentiment, and structural summaries. Annotation (tokens,
//! sentence boundaries, noun-phrase spans) and sentiment scoring sit behind
//! trait seams with built-in rule-based implementations; the analytic engine
//! itself is a set of pure, order-sensitive computations over the annotated
//! document.
//!
//! ## Features
//!
//! - Token and lemma frequency ranking with stable tie-breaking
//! - Whole-document and per-lemma sentiment aggregation
//! - Descriptive statistics and lexical diversity
//! - Part-of-speech distribution
//! - Flesch Reading Ease scoring
//! - Noun-phrase ranking
//! - Keyword-in-context concordance search
//! - Fixed-order plain-text report assembly
//!
//! ## Example
//!
//! ```
//! use sagitta::prelude::*;
//!
//! let annotator = SimpleAnnotator::new();
//! let doc = annotator.annotate("A quick example. It works nicely.").unwrap();
//!
//! let stats = TextStatistics::compute(&doc);
//! assert_eq!(stats.total_sentences, 2);
//!
//! let scorer = LexiconScorer::new();
//! let report = ReportAssembler::new().assemble(&doc, &scorer).unwrap();
//! assert!(report.starts_with("TEXT ANALYSIS REPORT"));
//! ```

pub mod analysis;
pub mod annotation;
pub mod cli;
pub mod document;
pub mod error;
pub mod sentiment;

pub mod prelude {
    //! Convenient re-exports of the commonly used types.

    pub use crate::analysis::frequency::{FrequencyAnalyzer, FrequencyEntry, TokenField};
    pub use crate::analysis::kwic::KwicSearcher;
    pub use crate::analysis::noun_phrase::NounPhraseRanker;
    pub use crate::analysis::pos::{PosDistribution, PosEntry};
    pub use crate::analysis::readability::{count_syllables, flesch_reading_ease};
    pub use crate::analysis::report::ReportAssembler;
    pub use crate::analysis::sentiment::{SentimentAggregator, SentimentRankMode, TokenSentiment};
    pub use crate::analysis::statistics::TextStatistics;
    pub use crate::annotation::Annotator;
    pub use crate::annotation::simple::SimpleAnnotator;
    pub use crate::document::{Document, NounPhraseSpan, Sentence, Token};
    pub use crate::error::{Result, SagittaError};
    pub use crate::sentiment::{SentimentScore, SentimentScorer};
    pub use crate::sentiment::lexicon::LexiconScorer;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Document-level and per-lemma sentiment aggregation.
//!
//! [`SentimentAggregator`] wraps an external
//! [`SentimentScorer`](crate::sentiment::SentimentScorer) and offers two
//! operations: whole-document scoring (one scorer call on the raw text,
//! returned unchanged) and per-lemma extremal ranking.
//!
//! The per-lemma ranking scores every content token's *surface text* (not
//! its lemma), groups tokens by lowercased lemma, and keeps one
//! representative per group: the surface form whose polarity has the
//! greatest absolute value, first seen winning exact ties. Scoring the
//! surface form keeps inflection nuance; grouping by lemma keeps near
//! duplicates out of the ranking. Scorer calls are memoized per distinct
//! surface string within a single aggregation, since repeated words dominate
//! the cost.
//!
//! # Examples
//!
//! ```
//! use sagitta::analysis::sentiment::{SentimentAggregator, SentimentRankMode};
//! use sagitta::annotation::Annotator;
//! use sagitta::annotation::simple::SimpleAnnotator;
//! use sagitta::sentiment::lexicon::LexiconScorer;
//!
//! let doc = SimpleAnnotator::new()
//!     .annotate("A wonderful morning, then terrible news.")
//!     .unwrap();
//! let scorer = LexiconScorer::new();
//! let aggregator = SentimentAggregator::new(&scorer);
//!
//! let top = aggregator
//!     .extreme_tokens(&doc, SentimentRankMode::Highest, 5)
//!     .unwrap();
//! assert_eq!(top[0].text, "wonderful");
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{Result, SagittaError};
use crate::sentiment::{SentimentScore, SentimentScorer};

/// Direction of the per-lemma extremal ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentRankMode {
    /// Most positive first (descending signed polarity).
    Highest,
    /// Most negative first (ascending signed polarity).
    Lowest,
}

/// A surface form and the polarity of its text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenSentiment {
    /// The token's surface text.
    pub text: String,

    /// Polarity of the surface text in `[-1.0, 1.0]`.
    pub polarity: f64,
}

/// Aggregates sentiment over a document using an external scorer.
pub struct SentimentAggregator<'a> {
    scorer: &'a dyn SentimentScorer,
}

impl<'a> SentimentAggregator<'a> {
    /// Create an aggregator over the given scorer.
    pub fn new(scorer: &'a dyn SentimentScorer) -> Self {
        SentimentAggregator { scorer }
    }

    /// Score the whole document text.
    ///
    /// Invokes the scorer once on the raw text and returns its result
    /// unchanged; scorer failures surface to the caller.
    pub fn document_sentiment(&self, doc: &Document) -> Result<SentimentScore> {
        self.scorer.score(doc.text())
    }

    /// Rank lemma groups by their extremal surface-form polarity.
    ///
    /// Returns at most `limit` entries, sorted by signed polarity: descending
    /// for [`SentimentRankMode::Highest`], ascending for
    /// [`SentimentRankMode::Lowest`]. Both sorts are stable, so groups with
    /// equal polarity keep first-occurrence order.
    pub fn extreme_tokens(
        &self,
        doc: &Document,
        mode: SentimentRankMode,
        limit: usize,
    ) -> Result<Vec<TokenSentiment>> {
        if limit == 0 {
            return Err(SagittaError::invalid_argument(
                "sentiment ranking limit must be greater than zero",
            ));
        }

        // One scorer call per distinct surface string; repeated words are
        // the dominant cost, and the scorer contract is deterministic so
        // reuse is sound.
        let mut memo: AHashMap<&str, f64> = AHashMap::new();
        // Representatives in first-encounter order so that equal-polarity
        // groups rank deterministically.
        let mut representatives: Vec<TokenSentiment> = Vec::new();
        let mut index_by_lemma: AHashMap<String, usize> = AHashMap::new();

        for token in doc.content_tokens() {
            let polarity = match memo.get(token.text.as_str()) {
                Some(polarity) => *polarity,
                None => {
                    let polarity = self.scorer.score(&token.text)?.polarity;
                    memo.insert(&token.text, polarity);
                    polarity
                }
            };

            let lemma = token.lemma.to_lowercase();
            match index_by_lemma.get(&lemma) {
                Some(&index) => {
                    // First seen wins on exact absolute-value ties.
                    if polarity.abs() > representatives[index].polarity.abs() {
                        representatives[index] = TokenSentiment {
                            text: token.text.clone(),
                            polarity,
                        };
                    }
                }
                None => {
                    index_by_lemma.insert(lemma, representatives.len());
                    representatives.push(TokenSentiment {
                        text: token.text.clone(),
                        polarity,
                    });
                }
            }
        }

        match mode {
            SentimentRankMode::Highest => {
                representatives.sort_by(|a, b| b.polarity.total_cmp(&a.polarity));
            }
            SentimentRankMode::Lowest => {
                representatives.sort_by(|a, b| a.polarity.total_cmp(&b.polarity));
            }
        }
        representatives.truncate(limit);
        Ok(representatives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Token;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scores fixed polarities by word, counting invocations.
    struct TableScorer {
        calls: AtomicUsize,
    }

    impl TableScorer {
        fn new() -> Self {
            TableScorer {
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SentimentScorer for TableScorer {
        fn score(&self, text: &str) -> Result<SentimentScore> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let polarity = match text {
                "great" => 0.8,
                "goodish" => 0.5,
                "baddish" => -0.8,
                "awful" => -1.0,
                _ => 0.0,
            };
            Ok(SentimentScore::new(polarity, polarity.abs()))
        }

        fn name(&self) -> &'static str {
            "table"
        }
    }

    fn doc_from(tokens: Vec<Token>) -> Document {
        let text = tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Document::new(text, tokens, vec![], vec![]).unwrap()
    }

    #[test]
    fn test_document_sentiment_passthrough() {
        let scorer = TableScorer::new();
        let doc = doc_from(vec![Token::word("great", "great", "ADJ", 0)]);
        let aggregator = SentimentAggregator::new(&scorer);
        let score = aggregator.document_sentiment(&doc).unwrap();
        // The whole raw text goes to the scorer in one call.
        assert_eq!(scorer.call_count(), 1);
        assert_eq!(score.polarity, 0.8);
    }

    #[test]
    fn test_greatest_absolute_polarity_represents_group() {
        // Both tokens share the lemma "good"; -0.8 beats 0.5 on absolute value.
        let scorer = TableScorer::new();
        let doc = doc_from(vec![
            Token::word("goodish", "good", "ADJ", 0),
            Token::word("baddish", "good", "ADJ", 1),
        ]);
        let aggregator = SentimentAggregator::new(&scorer);
        let ranked = aggregator
            .extreme_tokens(&doc, SentimentRankMode::Highest, 10)
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].text, "baddish");
        assert_eq!(ranked[0].polarity, -0.8);
    }

    #[test]
    fn test_first_seen_wins_absolute_ties() {
        let scorer = TableScorer::new();
        // "great" (0.8) and "baddish" (-0.8) tie on absolute value.
        let doc = doc_from(vec![
            Token::word("great", "same", "ADJ", 0),
            Token::word("baddish", "same", "ADJ", 1),
        ]);
        let aggregator = SentimentAggregator::new(&scorer);
        let ranked = aggregator
            .extreme_tokens(&doc, SentimentRankMode::Highest, 10)
            .unwrap();
        assert_eq!(ranked[0].text, "great");
    }

    #[test]
    fn test_rank_modes() {
        let scorer = TableScorer::new();
        let doc = doc_from(vec![
            Token::word("awful", "awful", "ADJ", 0),
            Token::word("great", "great", "ADJ", 1),
            Token::word("plain", "plain", "ADJ", 2),
        ]);
        let aggregator = SentimentAggregator::new(&scorer);

        let highest = aggregator
            .extreme_tokens(&doc, SentimentRankMode::Highest, 10)
            .unwrap();
        assert_eq!(highest[0].text, "great");
        assert_eq!(highest[2].text, "awful");

        let lowest = aggregator
            .extreme_tokens(&doc, SentimentRankMode::Lowest, 10)
            .unwrap();
        assert_eq!(lowest[0].text, "awful");
        assert_eq!(lowest[2].text, "great");
    }

    #[test]
    fn test_scorer_calls_memoized_per_surface_form() {
        let scorer = TableScorer::new();
        let doc = doc_from(vec![
            Token::word("great", "great", "ADJ", 0),
            Token::word("great", "great", "ADJ", 1),
            Token::word("great", "great", "ADJ", 2),
            Token::word("awful", "awful", "ADJ", 3),
        ]);
        let aggregator = SentimentAggregator::new(&scorer);
        aggregator
            .extreme_tokens(&doc, SentimentRankMode::Highest, 10)
            .unwrap();
        // Two distinct surface strings, two scorer calls.
        assert_eq!(scorer.call_count(), 2);
    }

    #[test]
    fn test_stop_punct_space_excluded() {
        let scorer = TableScorer::new();
        let doc = doc_from(vec![
            Token::stop_word("the", "the", "DET", 0),
            Token::word("great", "great", "ADJ", 1),
            Token::punct("!", 2),
        ]);
        let aggregator = SentimentAggregator::new(&scorer);
        let ranked = aggregator
            .extreme_tokens(&doc, SentimentRankMode::Highest, 10)
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].text, "great");
    }

    #[test]
    fn test_truncation_and_zero_limit() {
        let scorer = TableScorer::new();
        let doc = doc_from(vec![
            Token::word("great", "great", "ADJ", 0),
            Token::word("awful", "awful", "ADJ", 1),
        ]);
        let aggregator = SentimentAggregator::new(&scorer);
        let ranked = aggregator
            .extreme_tokens(&doc, SentimentRankMode::Highest, 1)
            .unwrap();
        assert_eq!(ranked.len(), 1);

        let result = aggregator.extreme_tokens(&doc, SentimentRankMode::Highest, 0);
        assert!(matches!(result, Err(SagittaError::InvalidArgument(_))));
    }
}

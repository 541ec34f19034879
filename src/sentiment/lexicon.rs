//! Lexicon-based sentiment scorer.
//!
//! [`LexiconScorer`] scores text by averaging per-word polarity and
//! subjectivity values from a static lexicon, with a simple negation rule: a
//! negator ("not", "no", "never", "without", or an "n't" contraction)
//! immediately before a lexicon word flips its polarity and halves the
//! strength. Words outside the lexicon contribute nothing; text with no
//! lexicon hits scores neutral `(0.0, 0.0)`.
//!
//! # Examples
//!
//! ```
//! use sagitta::sentiment::SentimentScorer;
//! use sagitta::sentiment::lexicon::LexiconScorer;
//!
//! let scorer = LexiconScorer::new();
//! assert!(scorer.score("great").unwrap().polarity > 0.0);
//! assert!(scorer.score("not great").unwrap().polarity < 0.0);
//! assert_eq!(scorer.score("table chair").unwrap().polarity, 0.0);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::sentiment::{SentimentScore, SentimentScorer};

/// Word -> (polarity, subjectivity) entries.
const LEXICON_ENTRIES: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("boring", -1.0, 1.0),
    ("brilliant", 0.9, 0.9),
    ("broken", -0.4, 0.4),
    ("calm", 0.3, 0.75),
    ("cheap", -0.4, 0.7),
    ("clean", 0.37, 0.55),
    ("clever", 0.6, 0.8),
    ("cold", -0.6, 0.9),
    ("comfortable", 0.5, 0.7),
    ("cruel", -0.8, 0.9),
    ("dangerous", -0.6, 0.9),
    ("dark", -0.15, 0.4),
    ("dead", -0.2, 0.4),
    ("delicious", 1.0, 1.0),
    ("difficult", -0.5, 1.0),
    ("dirty", -0.6, 0.8),
    ("disappointing", -0.6, 0.7),
    ("dreadful", -1.0, 1.0),
    ("dull", -0.4, 0.6),
    ("easy", 0.43, 0.83),
    ("evil", -1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.45, 0.8),
    ("fail", -0.5, 0.5),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("fine", 0.42, 0.78),
    ("friendly", 0.47, 0.75),
    ("fun", 0.3, 0.2),
    ("gentle", 0.4, 0.7),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hate", -0.8, 0.9),
    ("helpful", 0.5, 0.6),
    ("honest", 0.6, 0.9),
    ("horrible", -1.0, 1.0),
    ("hurt", -0.5, 0.6),
    ("interesting", 0.5, 0.5),
    ("kind", 0.6, 0.9),
    ("lazy", -0.4, 0.8),
    ("lonely", -0.5, 0.8),
    ("love", 0.5, 0.6),
    ("lovely", 0.75, 0.95),
    ("lucky", 0.55, 0.75),
    ("mean", -0.4, 0.6),
    ("miserable", -1.0, 1.0),
    ("nasty", -0.8, 0.9),
    ("nice", 0.6, 1.0),
    ("painful", -0.7, 0.8),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.6, 0.8),
    ("poor", -0.4, 0.6),
    ("pretty", 0.5, 1.0),
    ("quick", 0.33, 0.54),
    ("quiet", 0.1, 0.6),
    ("rich", 0.38, 0.58),
    ("rude", -0.6, 0.9),
    ("sad", -0.5, 1.0),
    ("safe", 0.5, 0.5),
    ("scary", -0.6, 0.9),
    ("sick", -0.7, 0.9),
    ("simple", 0.0, 0.36),
    ("slow", -0.3, 0.4),
    ("smart", 0.6, 0.8),
    ("strange", -0.05, 0.9),
    ("strong", 0.43, 0.73),
    ("stupid", -0.8, 0.9),
    ("sweet", 0.35, 0.65),
    ("terrible", -1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 0.9),
    ("unhappy", -0.6, 0.8),
    ("useful", 0.3, 0.2),
    ("useless", -0.5, 0.6),
    ("warm", 0.6, 0.8),
    ("weak", -0.4, 0.7),
    ("wise", 0.7, 0.9),
    ("wonderful", 1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.5),
];

static LEXICON: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    LEXICON_ENTRIES
        .iter()
        .map(|(word, polarity, subjectivity)| (*word, (*polarity, *subjectivity)))
        .collect()
});

const NEGATORS: &[&str] = &["not", "no", "never", "without"];

/// A deterministic lexicon-based sentiment scorer.
///
/// See the [module documentation](self) for the scoring rules.
#[derive(Clone, Debug, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    /// Create a new lexicon scorer.
    pub fn new() -> Self {
        LexiconScorer
    }

    fn is_negator(word: &str) -> bool {
        NEGATORS.contains(&word) || word.ends_with("n't")
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;
        let mut negated = false;

        for word in text.unicode_words() {
            let lower = word.to_lowercase();
            if Self::is_negator(&lower) {
                negated = true;
                continue;
            }
            if let Some((polarity, subjectivity)) = LEXICON.get(lower.as_str()) {
                let polarity = if negated { polarity * -0.5 } else { *polarity };
                polarity_sum += polarity;
                subjectivity_sum += subjectivity;
                hits += 1;
            }
            negated = false;
        }

        if hits == 0 {
            return Ok(SentimentScore::neutral());
        }

        let count = hits as f64;
        Ok(SentimentScore::new(
            (polarity_sum / count).clamp(-1.0, 1.0),
            (subjectivity_sum / count).clamp(0.0, 1.0),
        ))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

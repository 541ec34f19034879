//! Part-of-speech distribution.
//!
//! [`PosDistribution`] counts tags over every token that is neither
//! punctuation nor whitespace, and derives a ranking with percentages. The
//! ranking follows the same discipline as the frequency analyzer: descending
//! by count, ties broken by the order in which tags first appear in the
//! document.
//!
//! # Examples
//!
//! ```
//! use sagitta::analysis::pos::PosDistribution;
//! use sagitta::annotation::Annotator;
//! use sagitta::annotation::simple::SimpleAnnotator;
//!
//! let doc = SimpleAnnotator::new().annotate("The cat sat on the mat.").unwrap();
//! let distribution = PosDistribution::compute(&doc);
//!
//! assert_eq!(distribution.count("DET"), 2);
//! assert!(distribution.ranked()[0].percentage > 0.0);
//! ```

use std::cmp::Reverse;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// One ranked tag with its count and share of all tagged tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PosEntry {
    /// The part-of-speech tag.
    pub tag: String,

    /// Number of tagged tokens carrying this tag.
    pub count: usize,

    /// `count / total * 100`.
    pub percentage: f64,
}

/// Tag counts over the document's non-punctuation, non-whitespace tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PosDistribution {
    // Tags in first-appearance order, with their counts.
    entries: Vec<(String, usize)>,
    total: usize,
}

impl PosDistribution {
    /// Count tags for a document.
    pub fn compute(doc: &Document) -> Self {
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut index_by_tag: AHashMap<String, usize> = AHashMap::new();
        let mut total = 0;

        for token in doc.words() {
            total += 1;
            match index_by_tag.get(&token.pos_tag) {
                Some(&index) => entries[index].1 += 1,
                None => {
                    index_by_tag.insert(token.pos_tag.clone(), entries.len());
                    entries.push((token.pos_tag.clone(), 1));
                }
            }
        }

        PosDistribution { entries, total }
    }

    /// Number of tagged tokens.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether no tokens were tagged.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Count for a single tag (0 if absent).
    pub fn count(&self, tag: &str) -> usize {
        self.entries
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Tags and counts in first-appearance order.
    pub fn counts(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Ranked entries: descending count, ties by first appearance.
    ///
    /// Empty when the document has no tagged tokens; the percentage
    /// computation is skipped rather than dividing by zero.
    pub fn ranked(&self) -> Vec<PosEntry> {
        if self.total == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // Stable sort: equal counts keep first-appearance order.
        ranked.sort_by_key(|(_, count)| Reverse(*count));

        let total = self.total as f64;
        ranked
            .into_iter()
            .map(|(tag, count)| PosEntry {
                tag: tag.clone(),
                count: *count,
                percentage: *count as f64 / total * 100.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Token;

    fn doc_with_tags(tags: &[&str]) -> Document {
        let tokens: Vec<Token> = tags
            .iter()
            .enumerate()
            .map(|(i, tag)| Token::word(format!("w{i}"), format!("w{i}"), *tag, i))
            .collect();
        Document::new(String::new(), tokens, vec![], vec![]).unwrap()
    }

    #[test]
    fn test_counts_and_total() {
        let doc = doc_with_tags(&["NOUN", "VERB", "NOUN", "ADJ"]);
        let distribution = PosDistribution::compute(&doc);
        assert_eq!(distribution.total(), 4);
        assert_eq!(distribution.count("NOUN"), 2);
        assert_eq!(distribution.count("VERB"), 1);
        assert_eq!(distribution.count("X"), 0);
    }

    #[test]
    fn test_ranked_order_and_percentages() {
        let doc = doc_with_tags(&["VERB", "NOUN", "NOUN", "ADJ", "VERB", "NOUN"]);
        let ranked = PosDistribution::compute(&doc).ranked();

        assert_eq!(ranked[0].tag, "NOUN");
        assert_eq!(ranked[0].count, 3);
        assert!((ranked[0].percentage - 50.0).abs() < 1e-12);
        assert_eq!(ranked[1].tag, "VERB");
        assert_eq!(ranked[2].tag, "ADJ");
    }

    #[test]
    fn test_tie_break_by_first_appearance() {
        let doc = doc_with_tags(&["ADV", "NOUN", "ADV", "NOUN"]);
        let ranked = PosDistribution::compute(&doc).ranked();
        assert_eq!(ranked[0].tag, "ADV");
        assert_eq!(ranked[1].tag, "NOUN");
    }

    #[test]
    fn test_punct_and_space_excluded() {
        let tokens = vec![
            Token::word("dog", "dog", "NOUN", 0),
            Token::punct(".", 1),
            Token::space("\n", 2),
        ];
        let doc = Document::new("dog.\n".to_string(), tokens, vec![], vec![]).unwrap();
        let distribution = PosDistribution::compute(&doc);
        assert_eq!(distribution.total(), 1);
        assert_eq!(distribution.count("PUNCT"), 0);
    }

    #[test]
    fn test_empty_distribution() {
        let doc = Document::new(String::new(), vec![], vec![], vec![]).unwrap();
        let distribution = PosDistribution::compute(&doc);
        assert!(distribution.is_empty());
        assert!(distribution.ranked().is_empty());
    }
}

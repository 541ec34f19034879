//! Plain-text report assembly.
//!
//! [`ReportAssembler`] composes the other analytic components into one
//! line-structured report with a fixed block order: statistics, top-20
//! frequent tokens (1-indexed), sentiment (3 decimal places), and the
//! part-of-speech distribution (percentages to 1 decimal place). Consumers
//! parse this layout, so the order and line shapes must not change.
//!
//! Assembly has no side effects on the document or any analyzer state; it
//! returns the serialized content and leaves the decision of where to write
//! it to the caller.
//!
//! # Examples
//!
//! ```
//! use sagitta::analysis::report::ReportAssembler;
//! use sagitta::annotation::Annotator;
//! use sagitta::annotation::simple::SimpleAnnotator;
//! use sagitta::sentiment::lexicon::LexiconScorer;
//!
//! let doc = SimpleAnnotator::new().annotate("A short text. It is fine.").unwrap();
//! let report = ReportAssembler::new().assemble(&doc, &LexiconScorer::new()).unwrap();
//!
//! assert!(report.starts_with("TEXT ANALYSIS REPORT"));
//! assert!(report.contains("SENTIMENT ANALYSIS:"));
//! ```

use crate::analysis::frequency::{FrequencyAnalyzer, TokenField};
use crate::analysis::pos::PosDistribution;
use crate::analysis::sentiment::SentimentAggregator;
use crate::analysis::statistics::TextStatistics;
use crate::document::Document;
use crate::error::Result;
use crate::sentiment::SentimentScorer;

/// Number of frequent tokens listed in the report.
pub const TOP_TOKEN_COUNT: usize = 20;

const RULE_WIDTH: usize = 50;

/// Assembles the fixed-order analysis report.
#[derive(Clone, Debug, Default)]
pub struct ReportAssembler;

impl ReportAssembler {
    /// Create a report assembler.
    pub fn new() -> Self {
        ReportAssembler
    }

    /// Serialize the full report for a document.
    ///
    /// The only fallible step is sentiment scoring; scorer failures surface
    /// unchanged.
    pub fn assemble(&self, doc: &Document, scorer: &dyn SentimentScorer) -> Result<String> {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str("TEXT ANALYSIS REPORT\n");
        out.push_str(&rule);
        out.push_str("\n\n");

        let stats = TextStatistics::compute(doc);
        out.push_str("TEXT STATISTICS:\n");
        out.push_str(&format!("Total Characters: {}\n", stats.total_characters));
        out.push_str(&format!("Total Tokens: {}\n", stats.total_tokens));
        out.push_str(&format!("Total Words: {}\n", stats.total_words));
        out.push_str(&format!("Unique Words: {}\n", stats.unique_words));
        out.push_str(&format!("Total Sentences: {}\n", stats.total_sentences));
        out.push_str(&format!(
            "Avg Sentence Length: {:.2}\n",
            stats.avg_sentence_length
        ));
        out.push_str(&format!(
            "Lexical Diversity: {:.2}\n",
            stats.lexical_diversity
        ));

        out.push('\n');
        out.push_str(&rule);
        out.push_str("\n\n");

        out.push_str("MOST FREQUENT TOKENS:\n");
        let top_tokens = FrequencyAnalyzer::new(TokenField::Text)
            .with_limit(TOP_TOKEN_COUNT)?
            .analyze(doc);
        for (rank, entry) in top_tokens.iter().enumerate() {
            out.push_str(&format!("{}. {}: {}\n", rank + 1, entry.key, entry.count));
        }

        out.push('\n');
        out.push_str(&rule);
        out.push_str("\n\n");

        let sentiment = SentimentAggregator::new(scorer).document_sentiment(doc)?;
        out.push_str("SENTIMENT ANALYSIS:\n");
        out.push_str(&format!("Polarity: {:.3}\n", sentiment.polarity));
        out.push_str(&format!("Subjectivity: {:.3}\n", sentiment.subjectivity));

        out.push('\n');
        out.push_str(&rule);
        out.push_str("\n\n");

        out.push_str("PART-OF-SPEECH DISTRIBUTION:\n");
        for entry in PosDistribution::compute(doc).ranked() {
            out.push_str(&format!(
                "{}: {} ({:.1}%)\n",
                entry.tag, entry.count, entry.percentage
            ));
        }

        Ok(out)
    }
}

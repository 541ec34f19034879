//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::frequency::FrequencyEntry;
use crate::analysis::pos::PosEntry;
use crate::analysis::sentiment::TokenSentiment;
use crate::analysis::statistics::TextStatistics;
use crate::cli::args::{OutputFormat, SagittaArgs};
use crate::error::Result;
use crate::sentiment::SentimentScore;

/// Result structure for frequency and noun-phrase rankings.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankingResult {
    pub entries: Vec<FrequencyEntry>,
}

/// Result structure for document-level sentiment.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSentimentResult {
    pub score: SentimentScore,
}

/// Result structure for per-lemma sentiment ranking.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentRankingResult {
    pub entries: Vec<TokenSentiment>,
}

/// Result structure for text statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub statistics: TextStatistics,
}

/// Result structure for the POS distribution.
#[derive(Debug, Serialize, Deserialize)]
pub struct PosResult {
    pub entries: Vec<PosEntry>,
    pub total: usize,
}

/// Result structure for readability scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadabilityResult {
    pub flesch_reading_ease: f64,
}

/// Result structure for KWIC search.
#[derive(Debug, Serialize, Deserialize)]
pub struct KwicResult {
    pub keyword: String,
    pub matches: Vec<String>,
}

/// Result structure for report export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResult {
    pub path: String,
    pub bytes_written: usize,
}

/// Emit a command result in the format the user asked for.
///
/// Human output is the prepared text; JSON output serializes the result
/// structure, pretty-printed when `--pretty` is set.
pub fn emit<T: Serialize>(human: &str, value: &T, args: &SagittaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{human}");
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

/// Render a ranking as numbered lines.
pub fn format_ranking(entries: &[FrequencyEntry]) -> String {
    if entries.is_empty() {
        return "(no entries)".to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(rank, entry)| format!("{}. {}: {}", rank + 1, entry.key, entry.count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render per-lemma sentiment entries as numbered lines.
pub fn format_sentiment_ranking(entries: &[TokenSentiment]) -> String {
    if entries.is_empty() {
        return "(no entries)".to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(rank, entry)| format!("{}. {}: {:+.3}", rank + 1, entry.text, entry.polarity))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render statistics as aligned lines.
pub fn format_statistics(stats: &TextStatistics) -> String {
    format!(
        "Total Characters: {}\n\
         Total Tokens: {}\n\
         Total Words: {}\n\
         Unique Words: {}\n\
         Total Sentences: {}\n\
         Avg Sentence Length: {:.2}\n\
         Lexical Diversity: {:.2}",
        stats.total_characters,
        stats.total_tokens,
        stats.total_words,
        stats.unique_words,
        stats.total_sentences,
        stats.avg_sentence_length,
        stats.lexical_diversity
    )
}

/// Render the POS distribution as `TAG: count (pct%)` lines.
pub fn format_pos(entries: &[PosEntry]) -> String {
    if entries.is_empty() {
        return "(no tagged tokens)".to_string();
    }
    entries
        .iter()
        .map(|entry| format!("{}: {} ({:.1}%)", entry.tag, entry.count, entry.percentage))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ranking() {
        let entries = vec![
            FrequencyEntry { key: "day".to_string(), count: 3 },
            FrequencyEntry { key: "night".to_string(), count: 1 },
        ];
        assert_eq!(format_ranking(&entries), "1. day: 3\n2. night: 1");
        assert_eq!(format_ranking(&[]), "(no entries)");
    }

    #[test]
    fn test_format_sentiment_ranking_signs() {
        let entries = vec![
            TokenSentiment { text: "great".to_string(), polarity: 0.8 },
            TokenSentiment { text: "awful".to_string(), polarity: -1.0 },
        ];
        let rendered = format_sentiment_ranking(&entries);
        assert!(rendered.contains("+0.800"));
        assert!(rendered.contains("-1.000"));
    }

    #[test]
    fn test_format_pos() {
        let entries = vec![PosEntry {
            tag: "NOUN".to_string(),
            count: 2,
            percentage: 50.0,
        }];
        assert_eq!(format_pos(&entries), "NOUN: 2 (50.0%)");
    }
}

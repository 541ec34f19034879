//! Command line argument parsing for the Sagitta CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analysis::frequency::DEFAULT_LIMIT;
use crate::analysis::kwic::DEFAULT_WINDOW;
use crate::analysis::sentiment::SentimentRankMode;

/// Sagitta - document analytics from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "sagitta")]
#[command(about = "Analyze a text file: frequency, sentiment, readability, and more")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SagittaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SagittaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text for terminals
    Human,
    /// JSON for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the full analysis report
    Report(InputArgs),

    /// Write the full analysis report to a file
    Export(ExportArgs),

    /// Rank the most frequent tokens or lemmas
    Frequency(FrequencyArgs),

    /// Document sentiment, or per-lemma extremes with --rank
    Sentiment(SentimentArgs),

    /// Text statistics
    Stats(InputArgs),

    /// Part-of-speech distribution
    Pos(InputArgs),

    /// Flesch Reading Ease score
    Readability(InputArgs),

    /// Rank the most common noun phrases
    Phrases(PhrasesArgs),

    /// Keyword-in-context search
    Kwic(KwicArgs),
}

/// Arguments shared by commands that only need an input file
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Path to the text file to analyze
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

/// Arguments for exporting the report
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Path to the text file to analyze
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output path for the report
    #[arg(short, long, default_value = "text_analysis_report.txt")]
    pub output: PathBuf,
}

/// Arguments for frequency ranking
#[derive(Parser, Debug, Clone)]
pub struct FrequencyArgs {
    /// Path to the text file to analyze
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Count lowercased lemmas instead of surface tokens
    #[arg(short, long)]
    pub lemmas: bool,

    /// Maximum number of entries
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

/// Arguments for sentiment analysis
#[derive(Parser, Debug, Clone)]
pub struct SentimentArgs {
    /// Path to the text file to analyze
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Rank per-lemma extremes instead of scoring the whole document
    #[arg(short, long, value_enum)]
    pub rank: Option<RankDirection>,

    /// Maximum number of ranked entries
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

/// Direction for per-lemma sentiment ranking
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    /// Most positive first
    Highest,
    /// Most negative first
    Lowest,
}

impl From<RankDirection> for SentimentRankMode {
    fn from(direction: RankDirection) -> Self {
        match direction {
            RankDirection::Highest => SentimentRankMode::Highest,
            RankDirection::Lowest => SentimentRankMode::Lowest,
        }
    }
}

/// Arguments for noun-phrase ranking
#[derive(Parser, Debug, Clone)]
pub struct PhrasesArgs {
    /// Path to the text file to analyze
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Maximum number of entries
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

/// Arguments for keyword-in-context search
#[derive(Parser, Debug, Clone)]
pub struct KwicArgs {
    /// Path to the text file to analyze
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Keyword to locate (exact token match, case-insensitive)
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Context window size (tokens on each side)
    #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_command() {
        let args = SagittaArgs::try_parse_from(["sagitta", "report", "input.txt"]).unwrap();
        assert!(matches!(args.command, Command::Report(_)));
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_parse_kwic_with_window() {
        let args =
            SagittaArgs::try_parse_from(["sagitta", "kwic", "input.txt", "fox", "-w", "5"])
                .unwrap();
        match args.command {
            Command::Kwic(kwic) => {
                assert_eq!(kwic.keyword, "fox");
                assert_eq!(kwic.window, 5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            SagittaArgs::try_parse_from(["sagitta", "-q", "-vv", "stats", "input.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_default_limits() {
        let args =
            SagittaArgs::try_parse_from(["sagitta", "frequency", "input.txt"]).unwrap();
        match args.command {
            Command::Frequency(freq) => {
                assert_eq!(freq.limit, DEFAULT_LIMIT);
                assert!(!freq.lemmas);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

//! Command implementations for the Sagitta CLI.

use std::fs;
use std::path::Path;

use crate::analysis::frequency::{FrequencyAnalyzer, TokenField};
use crate::analysis::kwic::KwicSearcher;
use crate::analysis::noun_phrase::NounPhraseRanker;
use crate::analysis::pos::PosDistribution;
use crate::analysis::readability::flesch_reading_ease;
use crate::analysis::report::ReportAssembler;
use crate::analysis::sentiment::SentimentAggregator;
use crate::analysis::statistics::TextStatistics;
use crate::annotation::Annotator;
use crate::annotation::simple::SimpleAnnotator;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::Document;
use crate::error::{Result, SagittaError};
use crate::sentiment::lexicon::LexiconScorer;

/// Execute a CLI command.
pub fn execute_command(args: &SagittaArgs) -> Result<()> {
    match &args.command {
        Command::Report(input) => report(input, args),
        Command::Export(export_args) => export(export_args, args),
        Command::Frequency(freq_args) => frequency(freq_args, args),
        Command::Sentiment(sentiment_args) => sentiment(sentiment_args, args),
        Command::Stats(input) => stats(input, args),
        Command::Pos(input) => pos(input, args),
        Command::Readability(input) => readability(input, args),
        Command::Phrases(phrases_args) => phrases(phrases_args, args),
        Command::Kwic(kwic_args) => kwic(kwic_args, args),
    }
}

/// Load and annotate the input file.
fn load_document(path: &Path, cli_args: &SagittaArgs) -> Result<Document> {
    if cli_args.verbosity() > 1 {
        println!("Analyzing: {}", path.display());
    }
    let text = fs::read_to_string(path)?;
    SimpleAnnotator::new().annotate(&text)
}

fn report(input: &InputArgs, cli_args: &SagittaArgs) -> Result<()> {
    let doc = load_document(&input.input, cli_args)?;
    let report = ReportAssembler::new().assemble(&doc, &LexiconScorer::new())?;
    // The report is already line-structured text; JSON mode wraps it as-is.
    let payload = serde_json::json!({ "report": &report });
    emit(&report, &payload, cli_args)
}

fn export(args: &ExportArgs, cli_args: &SagittaArgs) -> Result<()> {
    let doc = load_document(&args.input, cli_args)?;
    let report = ReportAssembler::new().assemble(&doc, &LexiconScorer::new())?;
    fs::write(&args.output, &report)?;

    let result = ExportResult {
        path: args.output.to_string_lossy().to_string(),
        bytes_written: report.len(),
    };
    emit(
        &format!("Report written to {}", result.path),
        &result,
        cli_args,
    )
}

fn frequency(args: &FrequencyArgs, cli_args: &SagittaArgs) -> Result<()> {
    let doc = load_document(&args.input, cli_args)?;
    let field = if args.lemmas {
        TokenField::Lemma
    } else {
        TokenField::Text
    };
    let entries = FrequencyAnalyzer::new(field)
        .with_limit(args.limit)?
        .analyze(&doc);

    emit(
        &format_ranking(&entries),
        &RankingResult { entries },
        cli_args,
    )
}

fn sentiment(args: &SentimentArgs, cli_args: &SagittaArgs) -> Result<()> {
    let doc = load_document(&args.input, cli_args)?;
    let scorer = LexiconScorer::new();
    let aggregator = SentimentAggregator::new(&scorer);

    match args.rank {
        Some(direction) => {
            let entries = aggregator.extreme_tokens(&doc, direction.into(), args.limit)?;
            emit(
                &format_sentiment_ranking(&entries),
                &SentimentRankingResult { entries },
                cli_args,
            )
        }
        None => {
            let score = aggregator.document_sentiment(&doc)?;
            emit(
                &format!(
                    "Polarity: {:.3}\nSubjectivity: {:.3}",
                    score.polarity, score.subjectivity
                ),
                &DocumentSentimentResult { score },
                cli_args,
            )
        }
    }
}

fn stats(input: &InputArgs, cli_args: &SagittaArgs) -> Result<()> {
    let doc = load_document(&input.input, cli_args)?;
    let statistics = TextStatistics::compute(&doc);
    emit(
        &format_statistics(&statistics),
        &StatisticsResult { statistics },
        cli_args,
    )
}

fn pos(input: &InputArgs, cli_args: &SagittaArgs) -> Result<()> {
    let doc = load_document(&input.input, cli_args)?;
    let distribution = PosDistribution::compute(&doc);
    let entries = distribution.ranked();
    emit(
        &format_pos(&entries),
        &PosResult {
            entries,
            total: distribution.total(),
        },
        cli_args,
    )
}

fn readability(input: &InputArgs, cli_args: &SagittaArgs) -> Result<()> {
    let doc = load_document(&input.input, cli_args)?;
    let score = flesch_reading_ease(&doc);
    emit(
        &format!("Flesch Reading Ease: {score:.2}"),
        &ReadabilityResult {
            flesch_reading_ease: score,
        },
        cli_args,
    )
}

fn phrases(args: &PhrasesArgs, cli_args: &SagittaArgs) -> Result<()> {
    let doc = load_document(&args.input, cli_args)?;
    let entries = NounPhraseRanker::new()
        .with_limit(args.limit)?
        .analyze(&doc);
    emit(
        &format_ranking(&entries),
        &RankingResult { entries },
        cli_args,
    )
}

fn kwic(args: &KwicArgs, cli_args: &SagittaArgs) -> Result<()> {
    // The searcher itself performs no keyword validation; reject blank
    // keywords here at the boundary.
    if args.keyword.trim().is_empty() {
        return Err(SagittaError::invalid_argument("keyword must not be empty"));
    }

    let doc = load_document(&args.input, cli_args)?;
    let matches = KwicSearcher::new()
        .with_window(args.window)
        .search(&doc, &args.keyword);

    let human = if matches.is_empty() {
        format!("No matches for \"{}\"", args.keyword)
    } else {
        matches.join("\n")
    };
    emit(
        &human,
        &KwicResult {
            keyword: args.keyword.clone(),
            matches,
        },
        cli_args,
    )
}

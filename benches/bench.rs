//! Criterion benchmarks for the Sagitta analytics pipeline.
//!
//! Covers the stages that dominate real workloads:
//! - Annotation (tokenization, tagging, chunking)
//! - Frequency ranking
//! - Syllable estimation / readability
//! - Sentiment aggregation with per-token scoring

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use sagitta::analysis::frequency::{FrequencyAnalyzer, TokenField};
use sagitta::analysis::readability::{count_syllables, flesch_reading_ease};
use sagitta::analysis::sentiment::{SentimentAggregator, SentimentRankMode};
use sagitta::annotation::Annotator;
use sagitta::annotation::simple::SimpleAnnotator;
use sagitta::sentiment::lexicon::LexiconScorer;

/// Build a synthetic document of roughly `sentences` sentences.
fn generate_text(sentences: usize) -> String {
    let patterns = [
        "The quick brown fox jumps over the lazy dog.",
        "A terrible storm ruined the beautiful garden yesterday.",
        "Good friends shared a wonderful meal together.",
        "The old machine produced strange noises all night.",
        "Happy children played near the quiet river bank.",
    ];
    (0..sentences)
        .map(|i| patterns[i % patterns.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_annotation(c: &mut Criterion) {
    let text = generate_text(200);
    let annotator = SimpleAnnotator::new();

    let mut group = c.benchmark_group("annotation");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("annotate_200_sentences", |b| {
        b.iter(|| annotator.annotate(black_box(&text)).unwrap());
    });
    group.finish();
}

fn bench_frequency(c: &mut Criterion) {
    let text = generate_text(200);
    let doc = SimpleAnnotator::new().annotate(&text).unwrap();
    let analyzer = FrequencyAnalyzer::new(TokenField::Text);

    c.bench_function("frequency_ranking", |b| {
        b.iter(|| analyzer.analyze(black_box(&doc)));
    });
}

fn bench_readability(c: &mut Criterion) {
    let text = generate_text(200);
    let doc = SimpleAnnotator::new().annotate(&text).unwrap();

    c.bench_function("syllable_estimation", |b| {
        b.iter(|| count_syllables(black_box("extraordinary")));
    });
    c.bench_function("flesch_reading_ease", |b| {
        b.iter(|| flesch_reading_ease(black_box(&doc)));
    });
}

fn bench_sentiment_aggregation(c: &mut Criterion) {
    let text = generate_text(200);
    let doc = SimpleAnnotator::new().annotate(&text).unwrap();
    let scorer = LexiconScorer::new();
    let aggregator = SentimentAggregator::new(&scorer);

    c.bench_function("extreme_tokens", |b| {
        b.iter(|| {
            aggregator
                .extreme_tokens(black_box(&doc), SentimentRankMode::Highest, 10)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_annotation,
    bench_frequency,
    bench_readability,
    bench_sentiment_aggregation
);
criterion_main!(benches);

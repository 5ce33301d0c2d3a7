//! Criterion benchmarks for the Verbena classifier.
//!
//! Covers the hot paths: text analysis, the corpus transform pass, and
//! Complement Naive Bayes training.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use verbena::analysis::PipelineAnalyzer;
use verbena::classifier::{Classifier, TrainerConfig};
use verbena::corpus::Corpus;
use verbena::document::Document;
use verbena::transform::{TransformConfig, TransformPipeline};

/// Generate labeled test documents for benchmarking.
fn generate_documents(count: usize) -> Vec<(String, String)> {
    let spam_words = [
        "buy", "cheap", "offer", "discount", "deal", "free", "winner", "cash", "prize", "click",
    ];
    let ham_words = [
        "meeting", "agenda", "notes", "report", "project", "review", "schedule", "budget",
        "draft", "summary",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let (words, label) = if i % 2 == 0 {
            (&spam_words, "spam")
        } else {
            (&ham_words, "ham")
        };
        let doc_length = 20 + (i % 30);
        let text: Vec<&str> = (0..doc_length).map(|j| words[(i + j) % words.len()]).collect();
        documents.push((text.join(" "), label.to_string()));
    }
    documents
}

fn build_corpus(count: usize) -> Corpus {
    let analyzer = PipelineAnalyzer::standard();
    Corpus::from_documents(
        generate_documents(count)
            .iter()
            .map(|(text, label)| Document::labeled(text, label.as_str(), &analyzer).unwrap())
            .collect(),
    )
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = PipelineAnalyzer::standard();
    let documents = generate_documents(100);

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("count_terms_100_docs", |b| {
        b.iter(|| {
            for (text, _) in &documents {
                black_box(analyzer.count_terms(text).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let corpus = build_corpus(500);
    let pipeline = TransformPipeline::fit(&corpus, TransformConfig::default()).unwrap();

    let mut group = c.benchmark_group("transform");
    group.throughput(Throughput::Elements(corpus.len() as u64));
    group.bench_function("apply_500_docs", |b| {
        b.iter(|| {
            let mut corpus = corpus.clone();
            pipeline.apply(&mut corpus).unwrap();
            black_box(corpus);
        })
    });
    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20);
    group.bench_function("train_500_docs", |b| {
        b.iter(|| {
            let classifier = Classifier::train(
                build_corpus(500),
                PipelineAnalyzer::standard(),
                TransformConfig::default(),
                TrainerConfig {
                    // Uniform synthetic vocabulary: pruning would empty it.
                    prune_fraction: None,
                    ..TrainerConfig::default()
                },
            )
            .unwrap();
            black_box(classifier);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_analysis, bench_transform, bench_training);
criterion_main!(benches);

//! Benchmarks for keyword extraction, sentence ranking and chunking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notesum::{
    ChunkCapacity, Chunker, EngineOptions, KeywordExtractor, Language, ParagraphChunker,
    SentenceRanker, SummaryEngine, SummaryKind,
};

fn sample_note(size: usize) -> String {
    let sentences = [
        "Ownership gives every value in Rust a single owner. ",
        "Borrowing lets code use a value without taking ownership. ",
        "The borrow checker rejects references that outlive their data. ",
        "Traits describe shared behavior across different types. ",
        "Iterators compose lazily and compile to tight loops. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
        if i % 7 == 0 {
            text.push_str("\n\n");
        }
    }
    text
}

fn bench_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("keywords");
    let extractor = KeywordExtractor::new(Language::English);

    for size in [1_000, 8_000, 32_000] {
        let text = sample_note(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", size), &text, |b, text| {
            b.iter(|| extractor.extract(black_box(text), 50));
        });
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    let ranker = SentenceRanker::new();

    for size in [1_000, 8_000] {
        let text = sample_note(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("rank", size), &text, |b, text| {
            b.iter(|| ranker.summarize(black_box(text), 5));
        });
    }

    group.finish();
}

fn bench_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunking");
    let chunker = ParagraphChunker::new(ChunkCapacity::for_max(8000));

    for size in [10_000, 100_000] {
        let text = sample_note(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("paragraph", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)));
        });
    }

    group.finish();
}

fn bench_mixed_summary(c: &mut Criterion) {
    let engine = SummaryEngine::new(EngineOptions {
        language: Language::English,
        ..EngineOptions::default()
    });
    let text = sample_note(8_000);

    c.bench_function("mixed_summary_8k", |b| {
        b.iter(|| engine.summarize(black_box(&text), SummaryKind::Mixed));
    });
}

criterion_group!(
    benches,
    bench_keywords,
    bench_ranking,
    bench_chunking,
    bench_mixed_summary
);
criterion_main!(benches);

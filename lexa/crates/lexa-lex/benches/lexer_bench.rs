//! Tokenizer benchmarks.
//!
//! Run with: `cargo bench --package lexa-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexa_lex::{tokenize, Tokenizer};

fn token_count(source: &str) -> usize {
    tokenize(source).map(|tokens| tokens.len()).unwrap_or(0)
}

fn bench_tokenize_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let source = "x = 10 + 20; y = (x * 3) / 4 - x;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_assignment", |b| {
        b.iter(|| token_count(black_box("x=10+20;")))
    });

    group.bench_function("two_statements", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_tokenize_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_large");

    let source = "total = (alpha1 + 12345) * beta2 / 7;\n".repeat(1000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("fresh_tokenizer", |b| {
        b.iter(|| token_count(black_box(&source)))
    });

    group.bench_function("reused_tokenizer", |b| {
        let mut tokenizer = Tokenizer::new();
        b.iter(|| {
            tokenizer
                .tokenize(black_box(&source))
                .map(|tokens| tokens.len())
                .unwrap_or(0)
        })
    });

    group.finish();
}

fn bench_buffered_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_buffered");

    group.bench_function("long_ident", |b| {
        let source = "a".repeat(4096);
        b.iter(|| token_count(black_box(&source)))
    });

    group.bench_function("long_number", |b| {
        let source = "7".repeat(4096);
        b.iter(|| token_count(black_box(&source)))
    });

    group.bench_function("early_error", |b| {
        b.iter(|| token_count(black_box("x = 1 @ 2 + 3 + 4 + 5;")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenize_statements,
    bench_tokenize_large,
    bench_buffered_tokens
);
criterion_main!(benches);

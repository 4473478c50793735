//! Criterion benchmarks for Wordgate.
//!
//! Covers the two per-token hot paths:
//! - Word set lookups, case-sensitive and case-folding
//! - Whitelist filtering of a tokenized document

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use wordgate::analysis::char_array_set::{CaseFoldScratch, CharArraySet};
use wordgate::analysis::token_filter::WhitelistFilter;
use wordgate::analysis::token_stream::TokenStream;
use wordgate::analysis::tokenizer::UnicodeWordTokenStream;

const WORDS: &[&str] = &[
    "search",
    "engine",
    "full",
    "text",
    "index",
    "query",
    "document",
    "field",
    "term",
    "phrase",
    "boolean",
    "vector",
    "similarity",
    "relevance",
    "score",
    "analysis",
    "tokenization",
    "stemming",
    "normalization",
    "clustering",
];

/// Generate a document mixing whitelisted and other words.
fn generate_document(words: usize) -> String {
    (0..words)
        .map(|i| {
            if i % 3 == 0 {
                format!("Other{i}")
            } else {
                WORDS[i % WORDS.len()].to_uppercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("char_array_set");
    let probes: Vec<Vec<char>> = WORDS
        .iter()
        .map(|w| w.to_uppercase().chars().collect())
        .collect();
    group.throughput(Throughput::Elements(probes.len() as u64));

    let sensitive = CharArraySet::from_words(WORDS, false);
    group.bench_function("contains_case_sensitive", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|probe| sensitive.contains(black_box(probe)))
                .count()
        })
    });

    let folding = CharArraySet::from_words(WORDS, true);
    let mut scratch = CaseFoldScratch::with_capacity(32);
    group.bench_function("contains_with_ignore_case", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|probe| folding.contains_with(black_box(probe), &mut scratch))
                .count()
        })
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("whitelist_filter");
    let document = generate_document(10_000);
    group.throughput(Throughput::Elements(10_000));

    let words = Arc::new(CharArraySet::from_words(WORDS, true));
    let mut filter = WhitelistFilter::whitelist(UnicodeWordTokenStream::new(document), words);
    group.bench_function("filter_10k_tokens", |b| {
        b.iter(|| {
            filter.reset().unwrap();
            let mut kept = 0;
            while filter.advance().unwrap() {
                kept += black_box(filter.token()).len();
            }
            kept
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_filter);
criterion_main!(benches);

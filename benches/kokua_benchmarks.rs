//! Kokua Trie Benchmarks
//!
//! Criterion benchmarks for the hot paths of the trie: insertion, membership
//! checks, prefix enumeration, and lazy first-suggestion latency.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use kokua_trie_lib::bench::{synthetic_lexicon, synthetic_word};
use kokua_trie_lib::trie::KokuaTrie;

/// Benchmark word insertion across word lengths.
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("kokua_trie_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for word_length in [8, 16, 32, 64].iter() {
        group.bench_with_input(
            BenchmarkId::new("insert", word_length),
            word_length,
            |b, &length| {
                let words: Vec<String> =
                    (0..1000).map(|index| synthetic_word(index, length)).collect();
                let mut trie = KokuaTrie::new();

                let mut index = 0;
                b.iter(|| {
                    // Cycle through words; after the first pass this also
                    // exercises the duplicate-insert path.
                    let word = &words[index % words.len()];
                    index += 1;
                    black_box(trie.insert(word).unwrap());
                });
            },
        );
    }

    group.finish();
}

/// Benchmark membership checks and prefix enumeration on a populated trie.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("kokua_trie_lookup");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    group.bench_function("contains", |b| {
        let words = synthetic_lexicon(1000, 8);
        let mut trie = KokuaTrie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }

        let mut index = 0;
        b.iter(|| {
            let word = &words[index % words.len()];
            index += 1;
            black_box(trie.contains(word).unwrap());
        });
    });

    group.bench_function("autocomplete_subtree", |b| {
        let words = synthetic_lexicon(1000, 8);
        let mut trie = KokuaTrie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }
        // Six-letter prefixes split the lexicon into small subtrees, the
        // typical interactive query shape.
        let prefixes: Vec<String> = words.iter().map(|word| word[..6].to_string()).collect();

        let mut index = 0;
        b.iter(|| {
            let prefix = &prefixes[index % prefixes.len()];
            index += 1;
            black_box(trie.autocomplete(prefix).unwrap());
        });
    });

    group.bench_function("first_completion", |b| {
        let words = synthetic_lexicon(10_000, 8);
        let mut trie = KokuaTrie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }

        // The lazy iterator should pay for one path, not the whole subtree.
        b.iter(|| {
            black_box(trie.completions("a").unwrap().next());
        });
    });

    group.finish();
}

/// Benchmark whole-lexicon enumeration across lexicon sizes.
fn bench_full_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("kokua_trie_enumeration");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("enumerate_all", size),
            size,
            |b, &size| {
                let words = synthetic_lexicon(size, 8);
                let mut trie = KokuaTrie::new();
                for word in &words {
                    trie.insert(word).unwrap();
                }

                b.iter(|| {
                    black_box(trie.autocomplete("").unwrap());
                });
            },
        );
    }

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_insert, bench_lookup, bench_full_enumeration
}

criterion_main!(benches);

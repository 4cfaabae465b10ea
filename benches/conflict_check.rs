//! Benchmarks for the conflict check.
//!
//! Benchmark targets:
//! - Check against a 1k-entry corpus: <5ms
//! - Levenshtein on typical name lengths: <1us

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use lorecheck::models::EntryRef;
use lorecheck::services::conflict::{NameConflictDetector, levenshtein, normalize};

const SYLLABLES: &[&str] = &[
    "ka", "el", "en", "pe", "tro", "nai", "sha", "dow", "fen", "em", "ber", "thor", "ne", "iro",
    "wood", "val", "mir",
];

/// Builds a deterministic corpus of pseudo-fantasy names.
fn corpus(size: usize) -> Vec<EntryRef> {
    (0..size)
        .map(|i| {
            let name: String = (0..3)
                .map(|k| SYLLABLES[(i * 7 + k * 13 + i / 5) % SYLLABLES.len()])
                .collect();
            EntryRef::new(i.to_string(), name, "characters")
        })
        .collect()
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflict_check");
    group.measurement_time(Duration::from_secs(5));
    let detector = NameConflictDetector::default();

    for size in [100, 1_000, 10_000] {
        let entries = corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("corpus", size), &entries, |b, entries| {
            b.iter(|| detector.check(black_box("Kaelenthor"), black_box(entries)));
        });
    }

    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("  Kael'en, the Bold of Shadowfen! ")));
    });

    group.bench_function("levenshtein_short", |b| {
        b.iter(|| levenshtein(black_box("kaelen"), black_box("kaelan")));
    });

    group.bench_function("levenshtein_long", |b| {
        b.iter(|| levenshtein(black_box("ember thorn of the west"), black_box("ember throne of the east")));
    });

    group.finish();
}

criterion_group!(benches, bench_check, bench_primitives);
criterion_main!(benches);

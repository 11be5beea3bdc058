// Criterion benchmarks for harmoni-tr.
//
// Run:
//   cargo bench -p harmoni-tr

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use harmoni_core::PartOfSpeech;
use harmoni_tr::lexicon::{default_roots, default_suffix_table};

/// Every default root with the first suffix of each of its categories.
fn bench_synthesize_all_roots(c: &mut Criterion) {
    let table = default_suffix_table();
    let roots = default_roots();
    let selections: Vec<(String, Vec<&harmoni_core::SuffixDescriptor>)> = roots
        .all()
        .iter()
        .map(|root| {
            let suffixes = root
                .pos
                .categories()
                .iter()
                .filter_map(|&category| table.by_category(root.pos, category).first().copied())
                .map(|e| &e.descriptor)
                .collect();
            (root.root.clone(), suffixes)
        })
        .collect();

    c.bench_function("synthesize_all_roots", |b| {
        b.iter(|| {
            for (root, suffixes) in &selections {
                black_box(harmoni_tr::synthesize(black_box(root), suffixes.iter().copied()));
            }
        })
    });
}

/// Table lookup and ordering on top of synthesis.
fn bench_table_synthesize(c: &mut Criterion) {
    let table = default_suffix_table();
    let ids = ["noun-case-abl", "noun-poss-1pl", "noun-plural"];

    c.bench_function("table_synthesize_evlerimizden", |b| {
        b.iter(|| black_box(table.synthesize(black_box("ev"), &ids)))
    });
}

/// Traced synthesis over every verb tense.
fn bench_traced_verbs(c: &mut Criterion) {
    let table = default_suffix_table();
    let tenses: Vec<_> = table
        .by_pos(PartOfSpeech::Verb)
        .into_iter()
        .map(|e| &e.descriptor)
        .collect();

    c.bench_function("synthesize_traced_verbs", |b| {
        b.iter(|| {
            for suffix in &tenses {
                black_box(harmoni_tr::synthesize_traced(black_box("bekle"), [*suffix]));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_synthesize_all_roots,
    bench_table_synthesize,
    bench_traced_verbs
);
criterion_main!(benches);

//! Performance benchmarks for tokenization, classification and presets
//!
//! Run with: cargo bench --bench analysis_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shabda_core::evidence::{evaluate, BlockingQuery, Classifier, ClassifierConfig, Mode};
use shabda_core::state::{complete, create_state, MorphologyRequest};
use shabda_core::{tokenize, Operation};
use std::hint::black_box;

/// Generate text of roughly the requested size in bytes
fn generate_text(base: &str, size: usize) -> String {
    let mut text = String::with_capacity(size + base.len());
    while text.len() < size {
        text.push_str(base);
    }
    text
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for (name, base) in [
        ("latin", "rāmaḥ vanaṃ gacchati kauravāḥ bhāṣante "),
        ("devanagari", "रामः वनं गच्छति कौरवाः भाषन्ते "),
        ("mixed", "rāmaḥ रामः gacchati गच्छति "),
    ] {
        for size in [1024, 10_240, 102_400] {
            let text = generate_text(base, size);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| tokenize(black_box(text)));
            });
        }
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let config = ClassifierConfig::default();

    for mode in [Mode::Lookup, Mode::RulesOnly] {
        group.bench_function(BenchmarkId::new("evaluate", mode), |b| {
            b.iter(|| evaluate(black_box("gam"), black_box("ya"), mode, &config));
        });
    }

    let queries: Vec<BlockingQuery> = ["gam", "sad", "han", "budh", "kṛ", "man", "pac", "nī"]
        .iter()
        .cycle()
        .zip(["kta", "ya", "tṛc", "ktvā"].iter().cycle())
        .take(1000)
        .map(|(root, affix)| BlockingQuery::new(*root, *affix))
        .collect();
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("batch_1000", |b| {
        let mut classifier = Classifier::default();
        b.iter(|| classifier.classify_batch(black_box(&queries)));
    });

    group.finish();
}

fn bench_presets(c: &mut Criterion) {
    let config = ClassifierConfig::default();
    let request = MorphologyRequest::new("gam", "ya", Operation::Guna);
    let state = create_state("gam");

    c.bench_function("complete_preset", |b| {
        b.iter(|| complete(black_box(&state), &request, &config).unwrap());
    });
}

criterion_group!(benches, bench_tokenize, bench_classify, bench_presets);
criterion_main!(benches);

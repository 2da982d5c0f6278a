use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mathmaster_core::answer::{answers_match, normalize};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("integer", |b| b.iter(|| normalize(black_box("1234"))));
    group.bench_function("decimal", |b| b.iter(|| normalize(black_box("12.345"))));
    group.bench_function("fraction", |b| b.iter(|| normalize(black_box("355/113"))));
    group.bench_function("garbage", |b| b.iter(|| normalize(black_box("not a number"))));

    group.finish();
}

fn bench_answers_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("answers_match");

    group.bench_function("exact_string", |b| {
        b.iter(|| answers_match(black_box("3/4"), black_box("3/4")))
    });
    group.bench_function("equivalent_fractions", |b| {
        b.iter(|| answers_match(black_box("2/4"), black_box("1/2")))
    });
    group.bench_function("decimal_vs_fraction", |b| {
        b.iter(|| answers_match(black_box("0.5"), black_box("1/2")))
    });
    group.bench_function("mismatch", |b| {
        b.iter(|| answers_match(black_box("0.51"), black_box("1/2")))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_answers_match);
criterion_main!(benches);

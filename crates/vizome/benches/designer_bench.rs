//! Criterion benchmarks for the arrow designer.
//! Focus sizes: n in {1, 100, 10_000} arrows per batch.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use vizome::designer::{ArrowDesigner, ArrowInput};

fn random_spans(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let start = rng.gen_range(0.0..1e5);
            // Mix of short (head-only / tapering) and long arrows, both strands.
            let len = rng.gen_range(1.0..2_000.0) * if rng.gen::<bool>() { 1.0 } else { -1.0 };
            (start, start + len)
        })
        .collect()
}

fn bench_designer(c: &mut Criterion) {
    let designer = ArrowDesigner::default();
    let mut group = c.benchmark_group("designer");
    for &n in &[1usize, 100, 10_000] {
        group.bench_with_input(BenchmarkId::new("calculate", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    random_spans(n, 42)
                        .into_iter()
                        .map(|(s, e)| (s - e).abs())
                        .collect::<Vec<_>>()
                },
                |lengths| {
                    let _out = designer.calculate(&lengths).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("design_spans", n), &n, |b, &n| {
            b.iter_batched(
                || ArrowInput::Spans(random_spans(n, 43)),
                |input| {
                    let _out = designer.design(&input).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("outline_each", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    random_spans(n, 44)
                        .into_iter()
                        .map(|(s, e)| (s - e).abs())
                        .collect::<Vec<_>>()
                },
                |lengths| {
                    let _out: Vec<_> = lengths.iter().map(|&l| designer.outline(l)).collect();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_designer);
criterion_main!(benches);

//! Criterion benches for brush geometry.
//! Focus sizes: stroke samples in {8, 32, 128}.
//! Results land under target/criterion.

use annogeom::hull::build_brush_hull;
use annogeom::sample::{random_walk_stroke, ReplayToken, WalkCfg};
use annogeom::stroke::brush_stroke_to_polygon;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn stroke(samples: usize, index: u64) -> Vec<annogeom::Point> {
    let cfg = WalkCfg {
        samples,
        ..WalkCfg::default()
    };
    random_walk_stroke(cfg, ReplayToken { seed: 43, index })
}

fn bench_brush(c: &mut Criterion) {
    let mut group = c.benchmark_group("brush");
    for &n in &[8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("stroke_to_polygon", n), &n, |b, &n| {
            b.iter_batched(
                || stroke(n, 0),
                |pts| {
                    let _ring = brush_stroke_to_polygon(&pts, 6.0, 0.0);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("build_brush_hull", n), &n, |b, &n| {
            b.iter_batched(
                || stroke(n, 1),
                |pts| {
                    let _hull = build_brush_hull(&pts, 6.0, 0.0);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_brush);
criterion_main!(benches);

//! Benchmarks for the decimation and view pipeline on large series.
//!
//! Run with: `cargo bench --package ohlczoom-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ohlczoom_bench::synthetic_series;
use ohlczoom_lib::{
    ChartView, GestureEvent, LabelPolicy, ViewConfig, VisibilityFlags, compose, compute_ticks,
    decimate,
};
use std::hint::black_box;

const SIZES: &[usize] = &[10_000, 100_000, 1_000_000];

fn decimate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimate");

    for &size in SIZES {
        let series = synthetic_series(size);
        group.throughput(Throughput::Elements(size as u64));

        for factor in [1.0, 4.0, 64.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("factor-{factor}"), size),
                &series,
                |b, series| b.iter(|| decimate(black_box(series), black_box(factor))),
            );
        }
    }

    group.finish();
}

fn ticks_and_compose_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for &size in SIZES {
        let series = synthetic_series(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ticks", size), &series, |b, series| {
            b.iter(|| compute_ticks(black_box(series)));
        });

        group.bench_with_input(BenchmarkId::new("compose", size), &series, |b, series| {
            b.iter(|| {
                compose(
                    black_box(series),
                    &VisibilityFlags::all(),
                    LabelPolicy::FirstVisible,
                )
            });
        });
    }

    group.finish();
}

fn gesture_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");
    let series = synthetic_series(1_000_000);
    let view = ChartView::with_series(ViewConfig::default(), series);

    // 60 live updates per pinch, then one commit
    group.bench_function("pinch-commit-1m", |b| {
        b.iter_batched(
            || view.clone(),
            |mut view| {
                view.handle_gesture(GestureEvent::Start);
                for i in 1..=60 {
                    view.handle_gesture(GestureEvent::Update {
                        scale_delta: 1.0 + f64::from(i) * 0.05,
                    });
                }
                view.handle_gesture(GestureEvent::End);
                view
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    decimate_benchmark,
    ticks_and_compose_benchmark,
    gesture_benchmark
);
criterion_main!(benches);

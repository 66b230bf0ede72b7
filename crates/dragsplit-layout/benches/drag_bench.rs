//! Benchmarks for the drag fold and the split panel pipeline.
//!
//! Run with: cargo bench -p dragsplit-layout

use std::hint::black_box;
use std::time::Duration;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dragsplit_layout::{
    DragTrack, FlowHost, LayoutReconciler, Orientation, PointerInput, SplitConfig, SplitPanel,
    fold_step,
};
use web_time::Instant;

fn host(panes: usize) -> FlowHost {
    let mut host = FlowHost::new(Orientation::Horizontal);
    for _ in 0..panes {
        host.push_pane(100.0, 100.0);
    }
    host
}

/// Zig-zag positions around the bar at x = 100, staying in range.
fn positions(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 + ((i % 160) as f64 - 80.0)).collect()
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/fold");
    group.bench_function("fold_step", |b| {
        b.iter(|| black_box(fold_step(black_box([100.0, 100.0]), black_box(-37.5))))
    });

    for n in [16, 256, 4096] {
        let stream = positions(n);
        group.bench_with_input(BenchmarkId::new("track_stream", n), &stream, |b, stream| {
            b.iter_batched(
                || DragTrack::start(0, [100.0, 100.0], 100.0),
                |mut track| {
                    for &p in stream {
                        black_box(track.step(p));
                    }
                    track
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/reconcile");
    for panes in [2, 8, 32] {
        let host = host(panes);
        group.bench_with_input(BenchmarkId::new("grab_bars", panes), &host, |b, host| {
            let mut reconciler = LayoutReconciler::new(Orientation::Horizontal, 8.0);
            reconciler.recompute_container_rect(host);
            b.iter(|| black_box(reconciler.recompute_grab_bars(host).len()))
        });
    }
    group.finish();
}

fn bench_panel(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/panel");
    for panes in [2, 32] {
        let stream = positions(256);
        group.bench_with_input(BenchmarkId::new("gesture_256_moves", panes), &stream, |b, stream| {
            b.iter_batched(
                || SplitPanel::new(host(panes), SplitConfig::default()).expect("valid config"),
                |mut panel| {
                    let mut now = Instant::now();
                    let target = panel.bar_target(0).expect("bar 0");
                    panel.handle(PointerInput::Down { target }, now);
                    for &x in stream {
                        now += Duration::from_millis(8);
                        black_box(panel.pointer_move(x, 1.0, now));
                    }
                    panel.pointer_up(now)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fold, bench_reconcile, bench_panel);
criterion_main!(benches);

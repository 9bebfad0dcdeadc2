//! Benchmarks for the size solver and arrange pass.
//!
//! Run with: cargo bench -p splitkit-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use splitkit_core::{PaneLength, Point, Size};
use splitkit_layout::{PaneDeclaration, PaneList, SplitterEngine, compute_sizes};
use std::hint::black_box;

/// Build a pane list with `n` panes of mixed sizing kinds.
fn make_panes(n: usize) -> PaneList {
    PaneList::new((0..n).map(|i| match i % 4 {
        0 => PaneDeclaration::flexible().with_size(PaneLength::absolute(120.0).unwrap()),
        1 => PaneDeclaration::flexible().with_size(PaneLength::percent(15.0).unwrap()),
        2 => PaneDeclaration::flexible()
            .with_min_size(PaneLength::absolute(40.0).unwrap())
            .with_max_size(PaneLength::absolute(300.0).unwrap()),
        _ => PaneDeclaration::flexible(),
    }))
}

fn bench_compute_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver/compute_sizes");

    for n in [2, 4, 8, 16, 64] {
        let panes = make_panes(n);
        let handles = n.saturating_sub(1);
        group.bench_with_input(BenchmarkId::new("mixed", n), &panes, |b, panes| {
            b.iter(|| black_box(compute_sizes(panes, 1920.0, handles, 4.0)))
        });
    }

    group.finish();
}

fn bench_arrange(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/arrange");

    for n in [2, 8, 32] {
        group.bench_with_input(BenchmarkId::new("mixed", n), &n, |b, &n| {
            let mut engine = SplitterEngine::new(make_panes(n)).with_handle_spacing(4.0);
            b.iter(|| black_box(engine.arrange(Size::new(1920.0, 1080.0))))
        });
    }

    group.finish();
}

fn bench_drag_tick(c: &mut Criterion) {
    let mut engine = SplitterEngine::new(make_panes(8)).with_handle_spacing(4.0);
    engine.arrange(Size::new(1920.0, 1080.0));
    engine.on_drag_started(3, Point::ZERO);

    let mut offset = 0.0;
    c.bench_function("engine/drag_delta", |b| {
        b.iter(|| {
            offset = if offset > 40.0 { -40.0 } else { offset + 1.0 };
            black_box(engine.on_drag_delta(Point::new(offset, 0.0)))
        })
    });
}

criterion_group!(benches, bench_compute_sizes, bench_arrange, bench_drag_tick);
criterion_main!(benches);

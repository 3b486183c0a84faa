//! Benchmarks for card list filtering.
//!
//! Run with: cargo bench -p collab-runtime

use collab_core::catalog::{PROJECTS, STUDENTS};
use collab_runtime::filter::{ListFilter, Predicate};
use collab_runtime::memory_view::MemoryView;
use collab_runtime::view::View;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn rendered() -> MemoryView {
    let mut view = MemoryView::new().with_card_grids();
    let _ = view.render_students(STUDENTS);
    let _ = view.render_projects(PROJECTS);
    view
}

fn bench_text_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/text");
    let mut view = rendered();

    for query in ["", "a", "arjun", "python", "no-such-skill"] {
        group.bench_with_input(BenchmarkId::new("students", query), &query, |b, q| {
            let mut filter = ListFilter::students(STUDENTS);
            b.iter(|| {
                // Reset between applications so every iteration flips cards.
                black_box(filter.apply(Predicate::text(q), &mut view));
                black_box(filter.apply(Predicate::All, &mut view));
            });
        });
    }
    group.finish();
}

fn bench_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/category");
    let mut view = rendered();
    let mut filter = ListFilter::projects(PROJECTS);

    group.bench_function("cycle", |b| {
        b.iter(|| {
            for token in ["frontend", "backend", "design", "all"] {
                black_box(filter.apply(Predicate::category(token), &mut view));
            }
        });
    });
    group.finish();
}

fn bench_build_records(c: &mut Criterion) {
    c.bench_function("filter/build_students", |b| {
        b.iter(|| black_box(ListFilter::students(black_box(STUDENTS))));
    });
}

criterion_group!(benches, bench_text_search, bench_category, bench_build_records);
criterion_main!(benches);

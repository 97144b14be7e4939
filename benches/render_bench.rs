//! Benchmarks for chart building and rendering
//!
//! Run with: cargo bench

use cardash::chart::{build_chart, ThemeRegistry};
use cardash::dataset::Column;
use cardash::page::{initial_plot, render_page};
use cardash::render::render;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");

    group.bench_function("build", |b| {
        b.iter(|| build_chart(black_box("Displacement"), black_box("Cylinders")).unwrap())
    });

    group.bench_function("build_all_pairs", |b| {
        b.iter(|| {
            for x in Column::ALL {
                for y in Column::ALL {
                    build_chart(black_box(x.name()), black_box(y.name())).unwrap();
                }
            }
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let themes = ThemeRegistry::dashboard();
    let spec = build_chart("Miles_per_Gallon", "Displacement").unwrap();

    group.bench_function("document", |b| {
        b.iter(|| render(black_box(&spec), themes.active()).unwrap())
    });

    let srcdoc = initial_plot(themes.active()).unwrap();
    group.bench_function("page", |b| b.iter(|| render_page(black_box(&srcdoc))));

    group.finish();
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);

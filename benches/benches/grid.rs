// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use planar_geometry::{AffineTransform, Matrix2, Rectangle, Vec2};
use planar_grid::{GridSpec, grid_lines, warped_grid};
use planar_plot::sample_graph;

fn bench_grid_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_lines");
    let view = Rectangle::new(-16.0, -9.0, 16.0, 9.0);

    let axis_aligned = view.to_polygon();
    group.bench_function("axis_aligned", |b| {
        b.iter(|| black_box(grid_lines(black_box(&axis_aligned), 0.1)));
    });

    let rotated = axis_aligned.transform(&AffineTransform::linear(Matrix2::rotation(0.4)));
    group.bench_function("rotated", |b| {
        b.iter(|| black_box(grid_lines(black_box(&rotated), 0.1)));
    });
    group.finish();
}

fn bench_warped_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("warped_grid");
    let lattice = Rectangle::new(-4.0, -3.0, 4.0, 3.0);
    let square = |v: Vec2| v.complex_mul(v);
    for &subdivisions in &[1_usize, 8, 32] {
        group.bench_function(format!("complex_square(subdivisions={subdivisions})"), |b| {
            b.iter(|| black_box(warped_grid(square, lattice, 0.5, subdivisions)));
        });
    }
    let spec = GridSpec::new(0.5).with_margin(2);
    group.bench_function("complex_square(margin=2)", |b| {
        b.iter(|| black_box(spec.warped(square, lattice, 8)));
    });
    group.finish();
}

fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_graph");
    let bounds = Rectangle::new(-16.0, -9.0, 16.0, 9.0);
    group.bench_function("tan(samples=4096)", |b| {
        b.iter(|| {
            black_box(sample_graph(
                |x| {
                    let y = x.tan();
                    (y.abs() < 1e3).then_some(y)
                },
                bounds,
                4_096,
            ))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_grid_lines, bench_warped_grid, bench_graph);
criterion_main!(benches);

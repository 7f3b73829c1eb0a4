// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use planar_geometry::{Line, Polygon, Rectangle, Vec2};
use planar_solve::inverse_2d;

fn regular_polygon(sides: usize) -> Polygon {
    let step = core::f64::consts::TAU / sides as f64;
    (0..sides)
        .map(|k| Vec2::from_polar(10.0, k as f64 * step))
        .collect()
}

fn bench_intersect_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_intersect_line");
    let line = Line::new(Vec2::new(0.5, -0.25), Vec2::new(1.0, 0.3)).unwrap();

    let rect = Rectangle::new(-8.0, -6.0, 8.0, 6.0).to_polygon();
    group.bench_function("rectangle", |b| {
        b.iter(|| black_box(rect.intersect_line(black_box(&line))));
    });

    for &sides in &[16_usize, 256, 4_096] {
        let polygon = regular_polygon(sides);
        group.bench_function(format!("regular(n={sides})"), |b| {
            b.iter(|| black_box(polygon.intersect_line(black_box(&line))));
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("newton_inverse");
    let swirl = |v: Vec2| {
        let r = v.magnitude();
        Vec2::from_polar(r, v.angle() + 0.3 * r)
    };
    let inverse = inverse_2d(swirl);
    group.bench_function("swirl", |b| {
        b.iter(|| black_box(inverse(black_box(Vec2::new(1.5, -0.75)))));
    });

    let square = |v: Vec2| v.complex_mul(v);
    let sqrt = inverse_2d(square);
    group.bench_function("complex_square", |b| {
        b.iter(|| black_box(sqrt(black_box(Vec2::new(-3.0, 4.0)))));
    });
    group.finish();
}

criterion_group!(benches, bench_intersect_line, bench_inverse);
criterion_main!(benches);

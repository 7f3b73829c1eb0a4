// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use planar_geometry::Vec2;
use planar_view::{EventQueue, KeyModifiers, ViewConfig, ViewController, ViewEvent, Viewport};

fn bench_apply_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");
    let config = ViewConfig::default();
    let zoom = config.zoom_matrix();
    let viewport = Viewport::new(Vec2::new(1920.0, 1080.0));
    let anchor = viewport.screen_to_world(Vec2::new(400.0, 300.0));

    group.bench_function("apply_zoom", |b| {
        b.iter_batched(
            || viewport,
            |mut vp| {
                let _ = vp.apply_zoom(black_box(zoom), black_box(anchor));
                black_box(vp)
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("visible_world_polygon", |b| {
        b.iter(|| black_box(viewport.visible_world_polygon(black_box(8.0))));
    });
    group.finish();
}

fn bench_event_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_controller");
    let controller =
        ViewController::new(Vec2::new(1920.0, 1080.0), ViewConfig::default()).unwrap();

    let mut events = vec![ViewEvent::PointerDown {
        position: Vec2::new(960.0, 540.0),
    }];
    events.extend((0..256).map(|i| ViewEvent::PointerMove {
        position: Vec2::new(960.0 + f64::from(i), 540.0 - f64::from(i) * 0.5),
    }));
    events.push(ViewEvent::PointerUp);
    events.extend((0..64).map(|i| ViewEvent::Wheel {
        position: Vec2::new(200.0, 200.0),
        delta: if i % 2 == 0 { -1.0 } else { 1.0 },
        modifiers: if i % 3 == 0 {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::empty()
        },
    }));

    group.bench_function(format!("drain(events={})", events.len()), |b| {
        b.iter_batched(
            || {
                let mut queue = EventQueue::new();
                queue.extend(events.iter().copied());
                (controller, queue)
            },
            |(mut controller, mut queue)| {
                black_box(queue.drain_into(&mut controller));
                black_box(controller)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_apply_zoom, bench_event_stream);
criterion_main!(benches);

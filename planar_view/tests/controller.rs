// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end interaction sequences through the event queue.

use std::f64::consts::FRAC_PI_8;

use planar_event_state::wheel::WheelDirection;
use planar_geometry::Vec2;
use planar_view::{
    EventQueue, KeyModifiers, OptionValue, Redraw, ViewConfig, ViewController, ViewEvent,
};

const SIZE: Vec2 = Vec2::new(640.0, 480.0);

fn controller(config: ViewConfig) -> ViewController {
    ViewController::new(SIZE, config).unwrap()
}

fn wheel(position: Vec2, delta: f64, modifiers: KeyModifiers) -> ViewEvent {
    ViewEvent::Wheel {
        position,
        delta,
        modifiers,
    }
}

#[test]
fn zoom_keeps_cursor_anchor_over_many_ticks() {
    let mut view = controller(ViewConfig::default());
    let cursor = Vec2::new(97.0, 411.0);
    let anchor = view.viewport().screen_to_world(cursor);

    let mut queue = EventQueue::new();
    for i in 0..12 {
        let delta = if i % 3 == 2 { 1.0 } else { -1.0 };
        queue.push(wheel(cursor, delta, KeyModifiers::empty()));
    }
    assert_eq!(queue.drain_into(&mut view), Redraw::Transform);

    let back = view.viewport().world_to_screen(anchor);
    assert!(back.distance(cursor) < 1e-6, "anchor drifted to {back:?}");
    // Eight ticks in, four out.
    let expected = 50.0 * 1.3_f64.powi(4);
    assert!((view.viewport().zoom() - expected).abs() < 1e-6);
}

#[test]
fn rotation_keeps_cursor_anchor() {
    let config = ViewConfig::default().with_rotation_step(FRAC_PI_8);
    let mut view = controller(config);
    let cursor = Vec2::new(500.0, 60.0);
    let anchor = view.viewport().screen_to_world(cursor);

    for _ in 0..4 {
        view.dispatch(&wheel(cursor, -1.0, KeyModifiers::SHIFT));
    }
    let back = view.viewport().world_to_screen(anchor);
    assert!(back.distance(cursor) < 1e-6, "anchor drifted to {back:?}");
    assert!((view.viewport().rotation().abs() - 4.0 * FRAC_PI_8).abs() < 1e-9);
    assert!((view.viewport().zoom() - 50.0).abs() < 1e-9);
}

#[test]
fn drag_keeps_grabbed_point_under_pointer() {
    let mut view = controller(ViewConfig::default());
    let grab = Vec2::new(320.0, 240.0);
    let grabbed = view.viewport().screen_to_world(grab);

    let release = Vec2::new(150.0, 410.0);
    let mut queue = EventQueue::new();
    queue.extend([
        ViewEvent::PointerDown { position: grab },
        ViewEvent::PointerMove {
            position: Vec2::new(250.0, 300.0),
        },
        ViewEvent::PointerMove { position: release },
        ViewEvent::PointerUp,
        // Moves after release do not pan.
        ViewEvent::PointerMove {
            position: Vec2::new(10.0, 10.0),
        },
    ]);
    queue.drain_into(&mut view);

    assert!(!view.is_dragging());
    let now = view.viewport().world_to_screen(grabbed);
    assert!(now.distance(release) < 1e-9, "grabbed point at {now:?}");
}

#[test]
fn drag_on_a_rotated_view_follows_the_pointer() {
    let mut view = controller(ViewConfig::default());
    view.dispatch(&wheel(Vec2::new(100.0, 100.0), -1.0, KeyModifiers::SHIFT));
    view.dispatch(&wheel(Vec2::new(100.0, 100.0), -1.0, KeyModifiers::empty()));

    let grab = Vec2::new(200.0, 200.0);
    let grabbed = view.viewport().screen_to_world(grab);
    view.dispatch(&ViewEvent::PointerDown { position: grab });
    view.dispatch(&ViewEvent::PointerMove {
        position: Vec2::new(260.0, 170.0),
    });
    let now = view.viewport().world_to_screen(grabbed);
    assert!(now.distance(Vec2::new(260.0, 170.0)) < 1e-9);
}

#[test]
fn reversed_wheel_direction_zooms_out_on_up() {
    let config = ViewConfig::default().with_zoom_in_direction(WheelDirection::Down);
    let mut view = controller(config);
    view.dispatch(&wheel(Vec2::new(320.0, 240.0), -1.0, KeyModifiers::empty()));
    assert!(view.viewport().zoom() < 50.0);
}

#[test]
fn options_set_by_name_take_effect() {
    let mut config = ViewConfig::default();
    config.set("zoom_factor", OptionValue::Number(2.0)).unwrap();
    let mut view = controller(config);
    view.dispatch(&wheel(Vec2::new(320.0, 240.0), -1.0, KeyModifiers::empty()));
    assert!((view.viewport().zoom() - 100.0).abs() < 1e-9);
}

#[test]
fn visible_region_tracks_zoom_and_resize() {
    let mut view = controller(ViewConfig::default());
    let before = view.visible_world_bounds();
    assert!((before.width() - 640.0 / 50.0).abs() < 1e-9);
    assert!((before.height() - 480.0 / 50.0).abs() < 1e-9);

    view.dispatch(&wheel(Vec2::new(320.0, 240.0), -1.0, KeyModifiers::empty()));
    let zoomed = view.visible_world_bounds();
    assert!((zoomed.width() - before.width() / 1.3).abs() < 1e-9);

    assert_eq!(
        view.dispatch(&ViewEvent::Resize {
            size: Vec2::new(1280.0, 480.0)
        }),
        Redraw::Transform
    );
    assert_eq!(view.viewport().size(), Vec2::new(1280.0, 480.0));
}

#[test]
fn reset_returns_to_initial_view() {
    let mut view = controller(ViewConfig::default().with_initial_zoom(20.0));
    let initial = *view.viewport();
    view.dispatch(&ViewEvent::PointerDown {
        position: Vec2::new(1.0, 1.0),
    });
    view.dispatch(&ViewEvent::PointerMove {
        position: Vec2::new(40.0, 90.0),
    });
    view.dispatch(&ViewEvent::PointerUp);
    view.dispatch(&wheel(Vec2::new(3.0, 3.0), 1.0, KeyModifiers::SHIFT));
    assert_ne!(*view.viewport(), initial);

    view.dispatch(&ViewEvent::Reset);
    let origin = view.viewport().world_to_screen(Vec2::ZERO);
    assert!(origin.distance(Vec2::new(320.0, 240.0)) < 1e-9);
    assert!((view.viewport().zoom() - 20.0).abs() < 1e-9);
    assert!(view.viewport().rotation().abs() < 1e-12);
}

#[test]
fn grid_follows_zoom() {
    let mut view = controller(ViewConfig::default());
    assert_eq!(view.grid_spec().cell_size, 1.0);
    for _ in 0..10 {
        view.dispatch(&wheel(Vec2::new(320.0, 240.0), -1.0, KeyModifiers::empty()));
    }
    assert!((view.grid_spec().cell_size - 0.1).abs() < 1e-12);
}

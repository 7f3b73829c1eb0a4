// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphs and axes follow the view as it is panned, zoomed and rotated.

use planar_geometry::Vec2;
use planar_plot::{axes, sample_graph};
use planar_view::{KeyModifiers, ViewConfig, ViewController, ViewEvent};

fn view() -> ViewController {
    ViewController::new(Vec2::new(600.0, 400.0), ViewConfig::default()).unwrap()
}

#[test]
fn axes_stay_on_screen_through_interaction() {
    let mut c = view();
    let events = [
        ViewEvent::Wheel {
            position: Vec2::new(100.0, 50.0),
            delta: -1.0,
            modifiers: KeyModifiers::SHIFT,
        },
        ViewEvent::PointerDown {
            position: Vec2::new(300.0, 200.0),
        },
        ViewEvent::PointerMove {
            position: Vec2::new(380.0, 150.0),
        },
        ViewEvent::PointerUp,
        ViewEvent::Wheel {
            position: Vec2::new(500.0, 300.0),
            delta: 1.0,
            modifiers: KeyModifiers::empty(),
        },
    ];
    let screen = c.viewport().screen_rect().expand(1e-6);
    for event in &events {
        c.dispatch(event);
        let a = axes(c.viewport(), 0.0);
        for axis in [a.x_axis, a.y_axis].into_iter().flatten() {
            assert!(screen.contains(c.viewport().world_to_screen(axis.start)));
            assert!(screen.contains(c.viewport().world_to_screen(axis.end)));
        }
        let marker = c.viewport().world_to_screen(a.origin.unwrap());
        assert!(screen.contains(marker), "marker {marker:?} off screen");
    }
}

#[test]
fn origin_marker_sticks_to_the_nearest_edge() {
    let mut c = view();
    c.dispatch(&ViewEvent::PointerDown {
        position: Vec2::new(0.0, 0.0),
    });
    c.dispatch(&ViewEvent::PointerMove {
        position: Vec2::new(-2000.0, -2000.0),
    });
    let a = axes(c.viewport(), 10.0);
    assert!(a.x_axis.is_none());
    assert!(a.y_axis.is_none());
    let marker = c.viewport().world_to_screen(a.origin.unwrap());
    assert!(marker.distance(Vec2::new(10.0, 10.0)) < 1e-9, "got {marker:?}");
}

#[test]
fn graph_covers_visible_width() {
    let c = view();
    let bounds = c.visible_world_bounds();
    let graph = sample_graph(|x| Some(x.sin()), bounds, 301);
    assert_eq!(graph.len(), 1);
    let v = graph[0].vertices();
    assert_eq!(v.first().unwrap().x, bounds.min_x);
    assert_eq!(v.last().unwrap().x, bounds.max_x);
}

#[test]
fn tangent_breaks_at_every_pole_in_view() {
    let c = view();
    // 12 world units wide: poles at ±π/2 and ±3π/2.
    let bounds = c.visible_world_bounds();
    let graph = sample_graph(
        |x| {
            let y = x.tan();
            (y.abs() < 50.0).then_some(y)
        },
        bounds,
        2001,
    );
    assert_eq!(graph.len(), 5);
}

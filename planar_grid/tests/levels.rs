// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid level-of-detail across zoom levels and rotated views.

use planar_geometry::{AffineTransform, Matrix2, Rectangle, Vec2};
use planar_grid::{
    DEFAULT_REFERENCE_SIZE, GridAxis, GridRank, GridSpec, cell_size, grid_line_rank, grid_lines,
};

#[test]
fn documented_ranks() {
    let cases = [(0, 3), (10, 1), (100, 2), (200, 2), (3, 0), (-100, 2)];
    for (n, rank) in cases {
        assert_eq!(u8::from(grid_line_rank(n)), rank, "rank of {n}");
    }
}

#[test]
fn zooming_in_refines_the_grid() {
    let coarse = cell_size(20.0, DEFAULT_REFERENCE_SIZE);
    let fine = cell_size(2000.0, DEFAULT_REFERENCE_SIZE);
    assert!(fine < coarse);
    assert!((coarse / fine - 100.0).abs() < 1e-9);
}

#[test]
fn every_line_lies_inside_a_rotated_view() {
    let screen = Rectangle::new(0.0, 0.0, 800.0, 600.0);
    // World → screen: 35 px per unit, rotated a little, origin mid-screen.
    let world_to_screen = AffineTransform::new(
        Matrix2::rotation(0.3).scale(35.0),
        Vec2::new(400.0, 300.0),
    );
    let screen_to_world = world_to_screen.inverse().unwrap();
    let visible = screen.to_polygon().transform(&screen_to_world);

    let spec = GridSpec::for_zoom(35.0, DEFAULT_REFERENCE_SIZE);
    assert_eq!(spec.cell_size, 1.0);
    let lines = spec.lines(&visible);
    assert!(lines.len() > 20);

    let padded = screen.expand(1e-6);
    for line in &lines {
        for end in [line.segment.start, line.segment.end] {
            assert!(padded.contains(world_to_screen.apply(end)), "{line:?}");
        }
    }
    for axis in [GridAxis::Vertical, GridAxis::Horizontal] {
        let origin = lines.iter().find(|l| l.axis == axis && l.index == 0);
        assert_eq!(origin.map(|l| l.rank), Some(GridRank::ORIGIN));
    }
}

#[test]
fn empty_view_draws_nothing() {
    let visible = Rectangle::new(0.0, 0.0, 0.0, 0.0).to_polygon();
    assert!(grid_lines(&visible, 1.0).is_empty());
}

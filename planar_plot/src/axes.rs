// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use planar_geometry::{Line, LineSegment, Polygon, Vec2};
use planar_view::Viewport;

/// The coordinate axes as they appear in a view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axes {
    /// The visible part of the line `y = 0`, in world space.
    pub x_axis: Option<LineSegment>,
    /// The visible part of the line `x = 0`, in world space.
    pub y_axis: Option<LineSegment>,
    /// Where to draw the origin marker: the world origin clamped into the
    /// visible region, so it stays on screen and slides along the edge when
    /// the origin scrolls away.
    pub origin: Option<Vec2>,
}

/// Places the axes for `viewport`, with the screen inset by `margin` pixels.
///
/// An axis entirely outside the visible region is `None`. The origin
/// marker is `None` only when the inset region is degenerate.
#[must_use]
pub fn axes(viewport: &Viewport, margin: f64) -> Axes {
    let visible = viewport.visible_world_polygon(margin);
    Axes {
        x_axis: clipped(&visible, &Line::horizontal(0.0)),
        y_axis: clipped(&visible, &Line::vertical(0.0)),
        origin: viewport.visible_region(margin).clip(Vec2::ZERO).ok(),
    }
}

fn clipped(visible: &Polygon, line: &Line) -> Option<LineSegment> {
    match *visible.intersect_line(line).as_slice() {
        [start, end] => Some(LineSegment::new(start, end)),
        _ => None,
    }
}

// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{EPSILON, GeometryError, Matrix2, Vec2};

/// An infinite line `origin + s · direction`, with a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    origin: Vec2,
    direction: Vec2,
}

impl Line {
    /// Creates a line through `origin` along `direction`.
    ///
    /// The direction is normalized; a zero direction fails with
    /// [`GeometryError::DegenerateVector`].
    pub fn new(origin: Vec2, direction: Vec2) -> Result<Self, GeometryError> {
        Ok(Self {
            origin,
            direction: direction.normalized()?,
        })
    }

    /// Creates the line through `p` and `q`, directed from `p` to `q`.
    pub fn through(p: Vec2, q: Vec2) -> Result<Self, GeometryError> {
        Self::new(p, q - p)
    }

    /// The vertical line `x = x`, directed towards increasing y.
    #[must_use]
    pub const fn vertical(x: f64) -> Self {
        Self {
            origin: Vec2::new(x, 0.0),
            direction: Vec2::Y,
        }
    }

    /// The horizontal line `y = y`, directed towards increasing x.
    #[must_use]
    pub const fn horizontal(y: f64) -> Self {
        Self {
            origin: Vec2::new(0.0, y),
            direction: Vec2::X,
        }
    }

    /// A point on the line.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Unit direction.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// `origin + s · direction`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, s: f64) -> Vec2 {
        self.origin + self.direction.scale(s)
    }

    /// Solves for the crossing of this line with the segment `start → end`.
    ///
    /// Returns `(s, t)` with the crossing at `self.point_at(s)` and at
    /// `start + t · (end − start)`, or `None` when the two are parallel (the
    /// basis-change matrix `[direction, −(end − start)]` is singular).
    #[must_use]
    pub fn edge_parameters(&self, start: Vec2, end: Vec2) -> Option<(f64, f64)> {
        let basis = Matrix2::from_columns(self.direction, -(end - start));
        if basis.determinant().abs() < EPSILON {
            return None;
        }
        let st = basis.solve(start - self.origin).ok()?;
        Some((st.x, st.y))
    }
}

/// A straight segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    /// First endpoint.
    pub start: Vec2,
    /// Second endpoint.
    pub end: Vec2,
}

impl LineSegment {
    /// Creates a segment between two points.
    #[inline]
    #[must_use]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// `end − start`, not normalized.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// `start + t · direction`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.start.lerp(self.end, t)
    }

    /// Segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().magnitude()
    }

    /// The midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Vec2 {
        self.point_at(0.5)
    }

    /// The same segment traversed backwards.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// The infinite line carrying this segment; fails for a zero-length
    /// segment.
    pub fn to_line(&self) -> Result<Line, GeometryError> {
        Line::through(self.start, self.end)
    }

    /// The point where `line` crosses this segment, endpoints included.
    #[must_use]
    pub fn intersect_line(&self, line: &Line) -> Option<Vec2> {
        let (s, t) = line.edge_parameters(self.start, self.end)?;
        (0.0..=1.0).contains(&t).then(|| line.point_at(s))
    }
}

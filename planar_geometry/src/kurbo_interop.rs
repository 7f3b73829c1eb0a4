// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from Kurbo, for handing kernel output to Kurbo-based
//! renderers.

use crate::{AffineTransform, Matrix2, Rectangle, Vec2};

impl From<kurbo::Point> for Vec2 {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vec2> for kurbo::Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<kurbo::Vec2> for Vec2 {
    fn from(v: kurbo::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for kurbo::Vec2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<kurbo::Rect> for Rectangle {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<Rectangle> for kurbo::Rect {
    fn from(r: Rectangle) -> Self {
        Self::new(r.min_x, r.min_y, r.max_x, r.max_y)
    }
}

// Kurbo stores its coefficients column-major: `[a, b, c, d, e, f]` is the
// matrix `| a c e |` over `| b d f |`.
impl From<AffineTransform> for kurbo::Affine {
    fn from(t: AffineTransform) -> Self {
        let m = t.linear;
        Self::new([m.a, m.c, m.b, m.d, t.translation.x, t.translation.y])
    }
}

impl From<kurbo::Affine> for AffineTransform {
    fn from(a: kurbo::Affine) -> Self {
        let [a0, b0, c0, d0, e0, f0] = a.as_coeffs();
        Self::new(Matrix2::new(a0, c0, b0, d0), Vec2::new(e0, f0))
    }
}

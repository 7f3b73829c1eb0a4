// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{Polygon, Vec2};

/// An axis-aligned rectangle with `min_x <= max_x` and `min_y <= max_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// Minimum x coordinate.
    pub min_x: f64,
    /// Minimum y coordinate.
    pub min_y: f64,
    /// Maximum x coordinate.
    pub max_x: f64,
    /// Maximum y coordinate.
    pub max_y: f64,
}

impl Rectangle {
    /// Creates a rectangle from two corner coordinate pairs in any order.
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Creates a rectangle spanning two opposite corners.
    #[must_use]
    pub fn from_corners(p: Vec2, q: Vec2) -> Self {
        Self::new(p.x, p.y, q.x, q.y)
    }

    /// Creates a rectangle of `size` with its minimum corner at the origin.
    #[must_use]
    pub fn from_size(size: Vec2) -> Self {
        Self::from_corners(Vec2::ZERO, size)
    }

    /// Axis-aligned bounding box of `points`, or `None` if there are none.
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (lo, hi) = points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self::from_corners(lo, hi))
    }

    /// Width (`max_x - min_x`).
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height (`max_y - min_y`).
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            0.5 * (self.min_x + self.max_x),
            0.5 * (self.min_y + self.max_y),
        )
    }

    /// The minimum corner.
    #[inline]
    #[must_use]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.min_x, self.min_y)
    }

    /// The maximum corner.
    #[inline]
    #[must_use]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.max_x, self.max_y)
    }

    /// The four corners, starting at the minimum corner and increasing x
    /// first (counter-clockwise with y up, clockwise with y down).
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min_x, self.min_y),
            Vec2::new(self.max_x, self.min_y),
            Vec2::new(self.max_x, self.max_y),
            Vec2::new(self.min_x, self.max_y),
        ]
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// Scales all coordinates by `factor` (about the origin).
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            self.min_x * factor,
            self.min_y * factor,
            self.max_x * factor,
            self.max_y * factor,
        )
    }

    /// Grows the rectangle by `margin` on every side.
    ///
    /// A negative margin shrinks it; shrinking past the center collapses the
    /// affected axis onto the center rather than inverting the rectangle.
    #[must_use]
    pub fn expand(&self, margin: f64) -> Self {
        let c = self.center();
        let half_w = (0.5 * self.width() + margin).max(0.0);
        let half_h = (0.5 * self.height() + margin).max(0.0);
        Self {
            min_x: c.x - half_w,
            min_y: c.y - half_h,
            max_x: c.x + half_w,
            max_y: c.y + half_h,
        }
    }

    /// Shrinks the rectangle by `margin` on every side.
    #[must_use]
    pub fn shrink(&self, margin: f64) -> Self {
        self.expand(-margin)
    }

    /// Clamps `p` component-wise into the rectangle.
    #[must_use]
    pub fn clip(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }

    /// Rounds the minimum corner down and the maximum corner up.
    ///
    /// The result is the smallest integer-aligned rectangle covering `self`,
    /// which is what a sampling lattice needs.
    #[must_use]
    pub fn expanded_to_integer_bounds(&self) -> Self {
        Self {
            min_x: libm::floor(self.min_x),
            min_y: libm::floor(self.min_y),
            max_x: libm::ceil(self.max_x),
            max_y: libm::ceil(self.max_y),
        }
    }

    /// Rounds the minimum corner up and the maximum corner down.
    ///
    /// When an axis contains no integer the rounded bounds would cross; that
    /// axis collapses onto the rounded-down center instead.
    #[must_use]
    pub fn contracted_to_integer_bounds(&self) -> Self {
        fn axis(lo: f64, hi: f64) -> (f64, f64) {
            let (a, b) = (libm::ceil(lo), libm::floor(hi));
            if a <= b {
                (a, b)
            } else {
                let mid = libm::floor(0.5 * (lo + hi));
                (mid, mid)
            }
        }
        let (min_x, max_x) = axis(self.min_x, self.max_x);
        let (min_y, max_y) = axis(self.min_y, self.max_y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// The four corners as a closed polygon, see [`Rectangle::corners`].
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(Vec::from(self.corners()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_sorts_corners() {
        let r = Rectangle::new(10.0, 5.0, -2.0, 1.0);
        assert_eq!(r, Rectangle::new(-2.0, 1.0, 10.0, 5.0));
        assert_eq!(r.width(), 12.0);
        assert_eq!(r.height(), 4.0);
        assert_eq!(r.center(), Vec2::new(4.0, 3.0));
    }

    #[test]
    fn bounding_of_points() {
        assert_eq!(Rectangle::bounding([]), None);
        let r = Rectangle::bounding([
            Vec2::new(1.0, -1.0),
            Vec2::new(-3.0, 2.0),
            Vec2::new(0.0, 7.0),
        ])
        .unwrap();
        assert_eq!(r, Rectangle::new(-3.0, -1.0, 1.0, 7.0));
    }

    #[test]
    fn expand_and_shrink() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(r.expand(1.0), Rectangle::new(-1.0, -1.0, 11.0, 5.0));
        assert_eq!(r.shrink(1.0), Rectangle::new(1.0, 1.0, 9.0, 3.0));
        assert_eq!(r.expand(-1.0), r.shrink(1.0));
        // Shrinking past the center collapses instead of inverting.
        let collapsed = r.shrink(3.0);
        assert_eq!(collapsed, Rectangle::new(3.0, 2.0, 7.0, 2.0));
    }

    #[test]
    fn scale_about_origin() {
        let r = Rectangle::new(1.0, -2.0, 3.0, 4.0).scale(2.0);
        assert_eq!(r, Rectangle::new(2.0, -4.0, 6.0, 8.0));
        // A negative factor flips, and the invariant still holds.
        let flipped = Rectangle::new(1.0, 1.0, 2.0, 2.0).scale(-1.0);
        assert_eq!(flipped, Rectangle::new(-2.0, -2.0, -1.0, -1.0));
    }

    #[test]
    fn clip_clamps_and_keeps_inside_points() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.clip(Vec2::new(5.0, 5.0)), Vec2::new(5.0, 5.0));
        assert_eq!(r.clip(Vec2::new(-1.0, 20.0)), Vec2::new(0.0, 10.0));
        assert!(r.contains(r.clip(Vec2::new(1e9, -1e9))));
    }

    #[test]
    fn integer_bounds() {
        let r = Rectangle::new(-1.5, 0.2, 2.5, 3.0);
        assert_eq!(
            r.expanded_to_integer_bounds(),
            Rectangle::new(-2.0, 0.0, 3.0, 3.0)
        );
        assert_eq!(
            r.contracted_to_integer_bounds(),
            Rectangle::new(-1.0, 1.0, 2.0, 3.0)
        );
        let thin = Rectangle::new(0.2, 0.0, 0.8, 1.0);
        let c = thin.contracted_to_integer_bounds();
        assert!(c.min_x <= c.max_x);
    }

    #[test]
    fn to_polygon_lists_corners_in_order() {
        let r = Rectangle::new(0.0, 0.0, 2.0, 1.0);
        assert_eq!(r.to_polygon().vertices(), &r.corners());
    }
}

// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Mul;

use crate::{GeometryError, Matrix2, Rectangle, Vec2};

/// A linear map followed by a translation: `v ↦ linear · v + translation`.
///
/// Besides the world → screen pipeline, an affine transform also describes
/// an oriented region: the image of the unit square `[0, 1]²`. See
/// [`AffineTransform::unit_square_onto`] and [`AffineTransform::clip`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineTransform {
    /// The linear part.
    pub linear: Matrix2,
    /// The translation, applied after the linear part.
    pub translation: Vec2,
}

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(Matrix2::IDENTITY, Vec2::ZERO);

    /// Creates a transform from its linear part and translation.
    #[inline]
    #[must_use]
    pub const fn new(linear: Matrix2, translation: Vec2) -> Self {
        Self {
            linear,
            translation,
        }
    }

    /// A pure translation.
    #[inline]
    #[must_use]
    pub const fn translate(offset: Vec2) -> Self {
        Self::new(Matrix2::IDENTITY, offset)
    }

    /// A pure linear map.
    #[inline]
    #[must_use]
    pub const fn linear(linear: Matrix2) -> Self {
        Self::new(linear, Vec2::ZERO)
    }

    /// The transform mapping the unit square onto `rect`, with `(0, 0)` at
    /// the rectangle's minimum corner.
    #[must_use]
    pub fn unit_square_onto(rect: Rectangle) -> Self {
        Self::new(
            Matrix2::scaling(rect.width(), rect.height()),
            Vec2::new(rect.min_x, rect.min_y),
        )
    }

    /// Returns a copy with a different translation.
    #[inline]
    #[must_use]
    pub fn with_translation(self, translation: Vec2) -> Self {
        Self::new(self.linear, translation)
    }

    /// Maps a point.
    #[inline]
    #[must_use]
    pub fn apply(&self, v: Vec2) -> Vec2 {
        self.linear.apply(v) + self.translation
    }

    /// Maps a direction, ignoring the translation.
    #[inline]
    #[must_use]
    pub fn apply_linear(&self, v: Vec2) -> Vec2 {
        self.linear.apply(v)
    }

    /// Returns the inverse transform, failing if the linear part is singular.
    pub fn inverse(&self) -> Result<Self, GeometryError> {
        let linear = self.linear.inverse()?;
        Ok(Self::new(linear, -linear.apply(self.translation)))
    }

    /// Composition `self ∘ other`: the result applies `other` first.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.linear.multiply(other.linear),
            self.apply(other.translation),
        )
    }

    /// Clamps `point` into the region this transform describes.
    ///
    /// The point is pulled back through the inverse, clamped into the unit
    /// square, and pushed forward again. For a rotated or sheared region
    /// this clamps along the region's own axes.
    pub fn clip(&self, point: Vec2) -> Result<Vec2, GeometryError> {
        let local = self.inverse()?.apply(point);
        let clamped = Vec2::new(local.x.clamp(0.0, 1.0), local.y.clamp(0.0, 1.0));
        Ok(self.apply(clamped))
    }

    /// Returns `true` if the linear part is invertible.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.linear.inverse().is_ok()
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.linear.is_finite() && self.translation.is_finite()
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for AffineTransform {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Vec2> for AffineTransform {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply(rhs)
    }
}

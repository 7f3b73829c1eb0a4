// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Mul;

use crate::{EPSILON, GeometryError, Vec2};

/// A row-major 2×2 matrix:
///
/// ```text
/// | a  b |
/// | c  d |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2 {
    /// Row 0, column 0.
    pub a: f64,
    /// Row 0, column 1.
    pub b: f64,
    /// Row 1, column 0.
    pub c: f64,
    /// Row 1, column 1.
    pub d: f64,
}

impl Matrix2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Creates a matrix from its entries in row-major order.
    #[inline]
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Creates a matrix whose columns are `c0` and `c1`.
    #[inline]
    #[must_use]
    pub const fn from_columns(c0: Vec2, c1: Vec2) -> Self {
        Self::new(c0.x, c1.x, c0.y, c1.y)
    }

    /// Counter-clockwise rotation by `angle` radians (in a y-up frame).
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = (libm::sin(angle), libm::cos(angle));
        Self::new(c, -s, s, c)
    }

    /// Axis-aligned scaling.
    #[inline]
    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }

    /// First column, the image of the x unit vector.
    #[inline]
    #[must_use]
    pub fn column0(self) -> Vec2 {
        Vec2::new(self.a, self.c)
    }

    /// Second column, the image of the y unit vector.
    #[inline]
    #[must_use]
    pub fn column1(self) -> Vec2 {
        Vec2::new(self.b, self.d)
    }

    /// Computes `self · v`.
    #[inline]
    #[must_use]
    pub fn apply(self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Multiplies every entry by `factor`.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(
            self.a * factor,
            self.b * factor,
            self.c * factor,
            self.d * factor,
        )
    }

    /// `ad − bc`.
    #[inline]
    #[must_use]
    pub fn determinant(self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns the inverse matrix.
    ///
    /// Fails with [`GeometryError::SingularMatrix`] when `|det| < EPSILON`.
    pub fn inverse(self) -> Result<Self, GeometryError> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            return Err(GeometryError::SingularMatrix { determinant: det });
        }
        let inv = 1.0 / det;
        Ok(Self::new(
            self.d * inv,
            -self.b * inv,
            -self.c * inv,
            self.a * inv,
        ))
    }

    /// Matrix product `self · other`; applying the result is applying
    /// `other` first, then `self`.
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
        )
    }

    /// Solves `self · x = rhs`.
    pub fn solve(self, rhs: Vec2) -> Result<Vec2, GeometryError> {
        Ok(self.inverse()?.apply(rhs))
    }

    /// Returns `true` if every entry is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Mul<Vec2> for Matrix2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply(rhs)
    }
}

// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use planar_geometry::{Matrix2, Vec2};

/// Forward-difference step used by [`jacobian`].
pub const DEFAULT_STEP: f64 = 1e-5;

/// Returns a function estimating the Jacobian of `f` at a point.
///
/// Column `i` is the forward difference `(f(v + h·eᵢ) − f(v)) / h` with
/// `h = `[`DEFAULT_STEP`].
pub fn jacobian<F>(f: F) -> impl Fn(Vec2) -> Matrix2
where
    F: Fn(Vec2) -> Vec2,
{
    move |v| jacobian_at(&f, v, DEFAULT_STEP)
}

/// Forward-difference Jacobian of `f` at `v` with step `h`.
#[must_use]
pub fn jacobian_at<F>(f: &F, v: Vec2, h: f64) -> Matrix2
where
    F: Fn(Vec2) -> Vec2 + ?Sized,
{
    let fv = f(v);
    let dx = (f(v + Vec2::X.scale(h)) - fv).scale(1.0 / h);
    let dy = (f(v + Vec2::Y.scale(h)) - fv).scale(1.0 / h);
    Matrix2::from_columns(dx, dy)
}

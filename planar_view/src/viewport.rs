// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use planar_geometry::{AffineTransform, GeometryError, Matrix2, Polygon, Rectangle, Vec2};

/// A world → screen mapping over a pixel surface.
///
/// The world is the mathematical plane (y up); the screen is the rendering
/// surface in pixels (y down). The mapping is an arbitrary invertible
/// affine transform, so views can be zoomed, rotated and panned freely.
/// The inverse is cached and both are rebuilt together, so
/// `world_to_screen` is invertible and finite at all times.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    size: Vec2,
    initial_zoom: f64,
    world_to_screen: AffineTransform,
    screen_to_world: AffineTransform,
}

impl Viewport {
    /// Pixels per world unit used by [`Viewport::new`].
    pub const DEFAULT_ZOOM: f64 = 50.0;

    /// Creates a viewport over a surface of `size` pixels with the world
    /// origin at its center and [`Viewport::DEFAULT_ZOOM`] pixels per unit.
    #[must_use]
    pub fn new(size: Vec2) -> Self {
        let world_to_screen = centered(size, Self::DEFAULT_ZOOM);
        Self {
            size,
            initial_zoom: Self::DEFAULT_ZOOM,
            world_to_screen,
            screen_to_world: centered_inverse(size, Self::DEFAULT_ZOOM),
        }
    }

    /// Like [`Viewport::new`] with `zoom` pixels per world unit; fails when
    /// `zoom` is too small for the transform to be invertible.
    pub fn with_zoom(size: Vec2, zoom: f64) -> Result<Self, GeometryError> {
        let mut vp = Self::with_transform(size, centered(size, zoom))?;
        vp.initial_zoom = zoom;
        Ok(vp)
    }

    /// Creates a viewport with an explicit world → screen transform.
    ///
    /// [`Viewport::reset`] still returns to the centered default view.
    pub fn with_transform(
        size: Vec2,
        world_to_screen: AffineTransform,
    ) -> Result<Self, GeometryError> {
        if !size.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        Ok(Self {
            size,
            initial_zoom: Self::DEFAULT_ZOOM,
            world_to_screen,
            screen_to_world: checked_inverse(world_to_screen)?,
        })
    }

    /// Surface size in pixels.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// The surface as a rectangle with its minimum corner at the origin.
    #[must_use]
    pub fn screen_rect(&self) -> Rectangle {
        Rectangle::from_size(self.size)
    }

    /// The world → screen transform.
    #[must_use]
    pub fn world_to_screen_transform(&self) -> AffineTransform {
        self.world_to_screen
    }

    /// The screen → world transform.
    #[must_use]
    pub fn screen_to_world_transform(&self) -> AffineTransform {
        self.screen_to_world
    }

    /// Converts a world‑space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, v: Vec2) -> Vec2 {
        self.world_to_screen.apply(v)
    }

    /// Converts a screen‑space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, v: Vec2) -> Vec2 {
        self.screen_to_world.apply(v)
    }

    /// Geometric-mean scale of the linear part, in pixels per world unit.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        libm::sqrt(self.world_to_screen.linear.determinant().abs())
    }

    /// On-screen angle of the world x axis, in radians (screen frame, y
    /// down).
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.world_to_screen.linear.column0().angle()
    }

    /// Moves the view by `delta` screen pixels.
    ///
    /// Fails with [`GeometryError::NonFinite`], changing nothing, when
    /// `delta` or the resulting translation is not finite.
    pub fn pan(&mut self, delta: Vec2) -> Result<(), GeometryError> {
        if !delta.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if delta == Vec2::ZERO {
            return Ok(());
        }
        let t = self.world_to_screen;
        self.set_transform(t.with_translation(t.translation + delta))
    }

    /// Right-multiplies the linear part by `m`, keeping `fixed_point`
    /// (world space) under the same pixel.
    ///
    /// Fails without changing anything when `m` is singular, when an input
    /// is not finite, or when the result would not be invertible.
    pub fn apply_zoom(&mut self, m: Matrix2, fixed_point: Vec2) -> Result<(), GeometryError> {
        if !m.is_finite() || !fixed_point.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        m.inverse()?;
        let old = self.world_to_screen;
        let linear = old.linear.multiply(m);
        let offset = old.apply(fixed_point) - (linear.apply(fixed_point) + old.translation);
        self.set_transform(AffineTransform::new(linear, old.translation + offset))
    }

    /// Changes the surface size, keeping the transform.
    ///
    /// A size with a non-finite component is rejected.
    pub fn resize(&mut self, size: Vec2) -> Result<(), GeometryError> {
        if !size.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        self.size = size;
        Ok(())
    }

    /// Returns to the initial view: world origin at the surface center.
    pub fn reset(&mut self) -> Result<(), GeometryError> {
        self.set_transform(centered(self.size, self.initial_zoom))
    }

    /// The screen rectangle inset by `margin` pixels.
    fn inset(&self, margin: f64) -> Rectangle {
        self.screen_rect().shrink(margin)
    }

    /// Corners of the inset screen rectangle in world space.
    fn visible_corners(&self, margin: f64) -> [Vec2; 4] {
        self.inset(margin).corners().map(|c| self.screen_to_world(c))
    }

    /// Axis-aligned world bounds of the screen inset by `margin` pixels.
    ///
    /// For rotated views this is larger than the visible region; see
    /// [`Viewport::visible_world_polygon`] for the exact shape.
    #[must_use]
    pub fn visible_world_bounds(&self, margin: f64) -> Rectangle {
        let [a, b, c, d] = self.visible_corners(margin);
        Rectangle::from_corners(a, c).union(&Rectangle::from_corners(b, d))
    }

    /// The screen inset by `margin` pixels, as a world-space polygon.
    #[must_use]
    pub fn visible_world_polygon(&self, margin: f64) -> Polygon {
        Polygon::from_iter(self.visible_corners(margin))
    }

    /// The transform taking the unit square onto the screen region inset by
    /// `margin`, in world space.
    ///
    /// [`AffineTransform::clip`] with the result clamps a world point into
    /// the visible region along the screen's own axes.
    #[must_use]
    pub fn visible_region(&self, margin: f64) -> AffineTransform {
        self.screen_to_world
            .compose(&AffineTransform::unit_square_onto(self.inset(margin)))
    }

    /// [`Viewport::visible_region`] for the whole screen.
    #[must_use]
    pub fn screen_region_in_world(&self) -> AffineTransform {
        self.visible_region(0.0)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            size: self.size,
            zoom: self.zoom(),
            rotation: self.rotation(),
            world_to_screen: self.world_to_screen,
            visible_world_bounds: self.visible_world_bounds(0.0),
        }
    }

    fn set_transform(&mut self, world_to_screen: AffineTransform) -> Result<(), GeometryError> {
        self.screen_to_world = checked_inverse(world_to_screen)?;
        self.world_to_screen = world_to_screen;
        Ok(())
    }
}

/// Debug snapshot of a [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Surface size in pixels.
    pub size: Vec2,
    /// Pixels per world unit.
    pub zoom: f64,
    /// On-screen angle of the world x axis.
    pub rotation: f64,
    /// Current world → screen transform.
    pub world_to_screen: AffineTransform,
    /// Axis-aligned world bounds of the screen.
    pub visible_world_bounds: Rectangle,
}

/// Inverse of `t`, requiring both directions to be finite.
fn checked_inverse(t: AffineTransform) -> Result<AffineTransform, GeometryError> {
    if !t.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    let inverse = t.inverse()?;
    if !inverse.is_finite() {
        return Err(GeometryError::SingularMatrix {
            determinant: t.linear.determinant(),
        });
    }
    Ok(inverse)
}

/// World → screen with the origin at the surface center and y flipped up.
fn centered(size: Vec2, zoom: f64) -> AffineTransform {
    AffineTransform::new(Matrix2::scaling(zoom, -zoom), size.scale(0.5))
}

/// Closed-form inverse of [`centered`], valid for any positive zoom.
fn centered_inverse(size: Vec2, zoom: f64) -> AffineTransform {
    let linear = Matrix2::scaling(1.0 / zoom, -1.0 / zoom);
    AffineTransform::new(linear, -linear.apply(size.scale(0.5)))
}

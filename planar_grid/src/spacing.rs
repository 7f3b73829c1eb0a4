// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use planar_geometry::{EPSILON, Polygon, Rectangle, Vec2};
use planar_solve::{inverse_2d, jacobian};

use crate::lines::{GridLine, grid_lines};
use crate::log;
use crate::warp::{WarpedLine, warped_grid};

/// Default on-screen size, in pixels, that one grid cell may grow to before
/// the grid switches to the next finer power of ten.
pub const DEFAULT_REFERENCE_SIZE: f64 = 100.0;

/// World-space cell size for a view scale.
///
/// Computes `10^(−⌈log10(zoom / reference_size)⌉)`, the power of ten whose
/// on-screen size `zoom · cell` falls in `(reference_size / 10,
/// reference_size]`. `zoom` is in pixels per world unit; both arguments
/// must be positive and finite or the result is not finite either.
#[must_use]
pub fn cell_size(zoom: f64, reference_size: f64) -> f64 {
    libm::pow(10.0, -libm::ceil(libm::log10(zoom / reference_size)))
}

/// Cell size for a grid drawn through a nonlinear map `f`.
///
/// The pre-image of `world_point` is found numerically, and the local scale
/// of `f` there (the square root of the Jacobian determinant) multiplies
/// `zoom` before picking the cell size. Falls back to the plain
/// [`cell_size`] where `f` collapses or the scale is not finite.
pub fn local_cell_size<F>(f: F, world_point: Vec2, zoom: f64, reference_size: f64) -> f64
where
    F: Fn(Vec2) -> Vec2,
{
    let pre_image = inverse_2d(&f)(world_point);
    let stretch = libm::sqrt(jacobian(&f)(pre_image).determinant().abs());
    if stretch.is_finite() && stretch > EPSILON {
        cell_size(zoom * stretch, reference_size)
    } else {
        log::trace!(stretch, ?pre_image, "grid: degenerate local scale");
        cell_size(zoom, reference_size)
    }
}

/// Grid parameters for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    /// Distance between neighboring lattice lines, in world units.
    pub cell_size: f64,
    /// Extra cells added on every side of a warped lattice, so curves that
    /// enter the view from outside it are still drawn.
    pub margin: u32,
}

impl GridSpec {
    /// Grid parameters with the given cell size and no margin.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            margin: 0,
        }
    }

    /// Picks the cell size for a view scale, see [`cell_size`].
    #[must_use]
    pub fn for_zoom(zoom: f64, reference_size: f64) -> Self {
        Self::new(cell_size(zoom, reference_size))
    }

    /// Sets the warped-lattice margin, in cells.
    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Straight grid lines clipped to `visible`, see [`grid_lines`].
    #[must_use]
    pub fn lines(&self, visible: &Polygon) -> Vec<GridLine> {
        grid_lines(visible, self.cell_size)
    }

    /// Lattice lines over `lattice` pushed through `f`, see [`warped_grid`].
    pub fn warped<F>(&self, f: F, lattice: Rectangle, subdivisions: usize) -> Vec<WarpedLine>
    where
        F: Fn(Vec2) -> Vec2,
    {
        let lattice = lattice.expand(f64::from(self.margin) * self.cell_size);
        warped_grid(f, lattice, self.cell_size, subdivisions)
    }
}

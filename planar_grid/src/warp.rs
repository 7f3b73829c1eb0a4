// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use planar_geometry::{Path, Rectangle, Vec2};

use crate::lines::{GridAxis, index_range, valid_cell};
use crate::log;
use crate::rank::{GridRank, grid_line_rank};

/// One lattice line after a nonlinear map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarpedLine {
    /// Orientation of the line before mapping.
    pub axis: GridAxis,
    /// Lattice index `k`; the line sat at `k · cell` before mapping.
    pub index: i64,
    /// Prominence derived from `index`.
    pub rank: GridRank,
    /// The mapped polyline.
    pub path: Path,
}

/// Pushes every lattice line of `lattice` through `f`.
///
/// `lattice` is rounded outward to whole cells. Each line is sampled at
/// every lattice crossing, then every cell is split into `subdivisions`
/// steps before mapping so the polyline follows the curved image. Vertices
/// where `f` is not finite are dropped, and lines left with fewer than two
/// vertices are skipped.
pub fn warped_grid<F>(f: F, lattice: Rectangle, cell: f64, subdivisions: usize) -> Vec<WarpedLine>
where
    F: Fn(Vec2) -> Vec2,
{
    if !valid_cell(cell) {
        log::warn!(cell, "warped grid: unusable cell size");
        return Vec::new();
    }
    let bounds = lattice.scale(1.0 / cell).expanded_to_integer_bounds();

    let mut lines = Vec::new();
    for axis in [GridAxis::Vertical, GridAxis::Horizontal] {
        let (lo, hi) = axis.bounds(&bounds);
        let (from, to) = axis.extent(&bounds);
        let (Some(indices), Some(steps)) = (index_range(lo, hi), index_range(from, to)) else {
            log::warn!(?axis, "warped grid: too many lines, axis skipped");
            continue;
        };
        for index in indices {
            let offset = index as f64 * cell;
            let straight: Path = steps
                .clone()
                .map(|j| axis.point(offset, j as f64 * cell))
                .collect();
            let path = straight.subdivide(subdivisions).try_map(|v| {
                let w = f(v);
                if w.is_finite() { Ok(w) } else { Err(v) }
            });
            if path.len() < 2 {
                log::trace!(?axis, index, "warped grid: line skipped");
                continue;
            }
            lines.push(WarpedLine {
                axis,
                index,
                rank: grid_line_rank(index),
                path,
            });
        }
    }
    lines
}

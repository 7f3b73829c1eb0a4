// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use planar_geometry::{Line, LineSegment, Polygon, Rectangle, Vec2};

use crate::log;
use crate::rank::{GridRank, grid_line_rank};

/// Upper bound on the lattice lines enumerated along one axis.
///
/// A cell size far too small for the visible region would otherwise
/// produce an unbounded number of lines.
pub const MAX_LINES_PER_AXIS: i64 = 4096;

/// Orientation of a grid line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridAxis {
    /// `x = k · cell`.
    Vertical,
    /// `y = k · cell`.
    Horizontal,
}

impl GridAxis {
    /// The lattice line at `offset` along this axis.
    #[must_use]
    pub fn line_at(self, offset: f64) -> Line {
        match self {
            Self::Vertical => Line::vertical(offset),
            Self::Horizontal => Line::horizontal(offset),
        }
    }

    /// The point `along` units down the lattice line at `offset`.
    pub(crate) fn point(self, offset: f64, along: f64) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(offset, along),
            Self::Horizontal => Vec2::new(along, offset),
        }
    }

    /// Index bounds of a lattice rectangle across this axis.
    pub(crate) fn bounds(self, lattice: &Rectangle) -> (f64, f64) {
        match self {
            Self::Vertical => (lattice.min_x, lattice.max_x),
            Self::Horizontal => (lattice.min_y, lattice.max_y),
        }
    }

    /// Extent of a lattice rectangle along this axis.
    pub(crate) fn extent(self, lattice: &Rectangle) -> (f64, f64) {
        self.other().bounds(lattice)
    }

    fn other(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// One visible grid line, clipped to the view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLine {
    /// Orientation.
    pub axis: GridAxis,
    /// Lattice index `k`; the line sits at `k · cell`.
    pub index: i64,
    /// Prominence derived from `index`.
    pub rank: GridRank,
    /// The visible part of the line, in world coordinates.
    pub segment: LineSegment,
}

/// Integer indices covering `lo..=hi`, or `None` when the bounds are not
/// finite or span more than [`MAX_LINES_PER_AXIS`] lines.
pub(crate) fn index_range(lo: f64, hi: f64) -> Option<RangeInclusive<i64>> {
    if !lo.is_finite() || !hi.is_finite() || hi - lo > MAX_LINES_PER_AXIS as f64 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "bounds are integral, finite and within MAX_LINES_PER_AXIS of each other"
    )]
    let range = (lo as i64)..=(hi as i64);
    Some(range)
}

/// Returns `true` for a usable cell size.
pub(crate) fn valid_cell(cell: f64) -> bool {
    cell.is_finite() && cell > 0.0
}

/// Enumerates the lattice lines `x = k · cell` and `y = k · cell` crossing
/// `visible`, clipped to it.
///
/// Candidate indices come from the polygon's bounding box expanded to whole
/// cells. Each line is clipped with [`Polygon::intersect_line`]; lines that
/// do not cross the polygon in exactly two points are skipped. Returns an
/// empty list for an empty polygon or an unusable cell size.
#[must_use]
pub fn grid_lines(visible: &Polygon, cell: f64) -> Vec<GridLine> {
    let Some(bounds) = visible.bounding_rectangle() else {
        return Vec::new();
    };
    if !valid_cell(cell) {
        log::warn!(cell, "grid: unusable cell size");
        return Vec::new();
    }
    let lattice = bounds.scale(1.0 / cell).expanded_to_integer_bounds();

    let mut lines = Vec::new();
    for axis in [GridAxis::Vertical, GridAxis::Horizontal] {
        let (lo, hi) = axis.bounds(&lattice);
        let Some(indices) = index_range(lo, hi) else {
            log::warn!(?axis, lo, hi, "grid: too many lines, axis skipped");
            continue;
        };
        for index in indices {
            let line = axis.line_at(index as f64 * cell);
            let hits = visible.intersect_line(&line);
            match *hits.as_slice() {
                [start, end] => lines.push(GridLine {
                    axis,
                    index,
                    rank: grid_line_rank(index),
                    segment: LineSegment::new(start, end),
                }),
                _ => {
                    log::trace!(?axis, index, hits = hits.len(), "grid: line skipped");
                }
            }
        }
    }
    lines
}

// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Grid: level-of-detail grid lines for an unbounded plane.
//!
//! A plane visualizer draws a lattice whose spacing follows the zoom level
//! in powers of ten, with every tenth and hundredth line drawn heavier and
//! the axes heaviest of all.
//!
//! - [`cell_size`] picks the lattice spacing for a zoom level.
//! - [`grid_line_rank`] assigns each lattice index a [`GridRank`], and
//!   [`RankStyle`] maps ranks to stroke widths.
//! - [`grid_lines`] clips the lattice lines to a (possibly rotated) visible
//!   polygon.
//! - [`warped_grid`] pushes the lattice through a nonlinear map, and
//!   [`local_cell_size`] adapts the spacing to that map's local stretch.
//!
//! ```rust
//! use planar_geometry::Rectangle;
//! use planar_grid::{GridRank, GridSpec};
//!
//! // 40 pixels per world unit: a one-unit grid is 40px wide on screen.
//! let spec = GridSpec::for_zoom(40.0, 100.0);
//! assert_eq!(spec.cell_size, 1.0);
//!
//! let view = Rectangle::new(-3.5, -2.5, 3.5, 2.5).to_polygon();
//! let lines = spec.lines(&view);
//! assert_eq!(lines.len(), 7 + 5);
//! assert!(lines.iter().any(|l| l.index == 0 && l.rank == GridRank::ORIGIN));
//! ```
//!
//! Failures are handled per line: a line that cannot be clipped or mapped
//! is left out and the rest of the grid is still produced.
//!
//! ## Features
//!
//! - `tracing`: log skipped lines at `trace` and rejected inputs at `warn`.
//! - `serde`: `Serialize`/`Deserialize` for grid parameters and output.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod lines;
mod log;
mod rank;
mod spacing;
mod warp;

pub use lines::{GridAxis, GridLine, MAX_LINES_PER_AXIS, grid_lines};
pub use rank::{GridRank, RankStyle, grid_line_rank};
pub use spacing::{DEFAULT_REFERENCE_SIZE, GridSpec, cell_size, local_cell_size};
pub use warp::{WarpedLine, warped_grid};

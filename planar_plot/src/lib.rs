// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Plot: function graphs and coordinate axes.
//!
//! - [`sample_graph`] turns `y = f(x)` into polylines, broken wherever the
//!   function is undefined.
//! - [`axes`] places the coordinate axes and the origin marker for a
//!   [`Viewport`](planar_view::Viewport).
//!
//! Output is world-space geometry; map it with
//! [`Viewport::world_to_screen_transform`](planar_view::Viewport::world_to_screen_transform)
//! before drawing.
//!
//! ```rust
//! use planar_geometry::Vec2;
//! use planar_plot::{axes, sample_graph};
//! use planar_view::Viewport;
//!
//! let view = Viewport::new(Vec2::new(800.0, 600.0));
//! let bounds = view.visible_world_bounds(0.0);
//!
//! // `ln x` is undefined left of zero: one run on the right half.
//! let graph = sample_graph(|x| (x > 0.0).then(|| x.ln()), bounds, 201);
//! assert_eq!(graph.len(), 1);
//!
//! let a = axes(&view, 0.0);
//! assert!(a.x_axis.is_some() && a.y_axis.is_some());
//! assert!(a.origin.unwrap().distance(Vec2::ZERO) < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `tracing`: log dropped graph samples at `trace`.
//! - `serde`: `Serialize`/`Deserialize` for [`Axes`].
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod axes;
mod graph;
mod log;

pub use axes::{Axes, axes};
pub use graph::sample_graph;

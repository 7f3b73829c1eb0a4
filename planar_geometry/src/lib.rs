// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Geometry: the value types underneath the plane visualizer.
//!
//! This crate provides small, immutable 2D primitives:
//! - [`Vec2`] and [`Matrix2`] for exact 2D linear algebra.
//! - [`AffineTransform`] for the world ↔ screen coordinate pipeline and for
//!   describing oriented regions (unit square → region).
//! - [`Rectangle`], [`Line`], [`LineSegment`], [`Path`] and [`Polygon`] for
//!   bounding, clipping and line intersection.
//!
//! The only fallible operations are [`Vec2::normalized`],
//! [`Matrix2::inverse`] and the operations built on them. They return
//! [`GeometryError`]; callers are expected to handle the failure for the one
//! element being processed rather than abort a whole batch.
//!
//! ## Clipping a line against a view
//!
//! ```rust
//! use planar_geometry::{Line, Rectangle, Vec2};
//!
//! let view = Rectangle::new(0.0, 0.0, 10.0, 10.0).to_polygon();
//! let line = Line::new(Vec2::new(5.0, 5.0), Vec2::new(1.0, 0.0)).unwrap();
//!
//! let hits = view.intersect_line(&line);
//! assert_eq!(hits, vec![Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0)]);
//! ```
//!
//! ## Composing transforms
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_2;
//! use planar_geometry::{AffineTransform, Matrix2, Vec2};
//!
//! let rotate = AffineTransform::linear(Matrix2::rotation(FRAC_PI_2));
//! let shift = AffineTransform::translate(Vec2::new(10.0, 0.0));
//!
//! // `shift ∘ rotate`: rotate first, then translate.
//! let t = shift.compose(&rotate);
//! let p = t.apply(Vec2::new(1.0, 0.0));
//! assert!((p.x - 10.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Features
//!
//! - `kurbo`: `From` conversions to and from Kurbo types, for handing kernel
//!   output to Kurbo-based renderers.
//! - `serde`: `Serialize`/`Deserialize` for all value types.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod affine;
mod error;
mod line;
mod matrix;
mod path;
mod rect;
mod vec2;

#[cfg(feature = "kurbo")]
mod kurbo_interop;

pub use affine::AffineTransform;
pub use error::GeometryError;
pub use line::{Line, LineSegment};
pub use matrix::Matrix2;
pub use path::{Edges, Path, Polygon};
pub use rect::Rectangle;
pub use vec2::Vec2;

/// Magnitude and determinant threshold below which vectors are treated as
/// degenerate and matrices as singular.
pub const EPSILON: f64 = 1e-12;

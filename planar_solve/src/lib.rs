// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Solve: numerical inversion of nonlinear plane maps.
//!
//! Nonlinear maps such as `z ↦ z²` are easy to push a grid through but have
//! no closed-form inverse. This crate provides:
//! - [`jacobian`]: a forward-difference 2×2 derivative estimate.
//! - [`find_root_2d`] / [`NewtonSolver::find_root`]: Newton-Raphson root
//!   search returning a [`RootEstimate`] whose [`RootStatus`] reports
//!   convergence, the iteration limit, a singular Jacobian or divergence.
//! - [`inverse_2d`]: the numerical inverse `y ↦ x` with `f(x) ≈ y`.
//!
//! Root searches are best effort: a point is always returned, and the
//! status is informational only.
//!
//! ```rust
//! use planar_geometry::Vec2;
//! use planar_solve::inverse_2d;
//!
//! let square = |v: Vec2| v.complex_mul(v);
//! let root = inverse_2d(square)(Vec2::new(0.0, 2.0));
//! assert!(root.distance(Vec2::new(1.0, 1.0)) < 1e-6);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit solver termination at `debug` and every Newton step at
//!   `trace`.
//! - `serde`: `Serialize`/`Deserialize` for [`NewtonSolver`] and results.
//!
//! This crate is `no_std`.

#![no_std]

mod jacobian;
mod log;
mod newton;

pub use jacobian::{DEFAULT_STEP, jacobian, jacobian_at};
pub use newton::{
    NewtonSolver, RootEstimate, RootStatus, find_root_2d, inverse_2d, inverse_2d_from,
};

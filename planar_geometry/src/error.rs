// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Local, recoverable failure of a geometric operation.
///
/// No variant is fatal. A renderer hitting one of these while sampling
/// should skip the single point, line or vertex involved and carry on.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// A vector with (near) zero magnitude was normalized.
    #[error("cannot normalize a vector of near-zero magnitude")]
    DegenerateVector,
    /// A matrix with (near) zero determinant was inverted.
    #[error("matrix is singular (determinant {determinant:e})")]
    SingularMatrix {
        /// The offending determinant.
        determinant: f64,
    },
    /// An input or result had a NaN or infinite component.
    #[error("value is not finite")]
    NonFinite,
}

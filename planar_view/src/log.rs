// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros; without
//! it they expand to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{trace, warn};
// Through a path: a bare `use warn` is ambiguous with the `#[warn]` attribute.
#[cfg(not(feature = "tracing"))]
pub(crate) use crate::{trace, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

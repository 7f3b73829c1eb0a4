// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel tick direction.
//!
//! Wheel events arrive as pixel, line or page deltas depending on the
//! device. A viewport that zooms by a fixed factor per tick only needs the
//! sign of the vertical component.

/// Direction of one wheel tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WheelDirection {
    /// Negative vertical delta (content scrolls down, wheel rolls away).
    Up,
    /// Positive vertical delta.
    Down,
}

impl WheelDirection {
    /// Direction of a vertical delta in any unit; `None` for zero or NaN.
    #[must_use]
    pub fn from_delta(dy: f64) -> Option<Self> {
        if dy < 0.0 {
            Some(Self::Up)
        } else if dy > 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

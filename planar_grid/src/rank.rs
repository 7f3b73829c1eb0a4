// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Visual prominence of a grid line, from `0` (minor) to `3` (origin).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRank(u8);

impl GridRank {
    /// An ordinary line.
    pub const MINOR: Self = Self(0);
    /// Every tenth line.
    pub const DECADE: Self = Self(1);
    /// Every hundredth line.
    pub const CENTURY: Self = Self(2);
    /// The axis through the origin.
    pub const ORIGIN: Self = Self(3);

    /// Wraps a raw rank, or returns `None` above [`GridRank::ORIGIN`].
    #[must_use]
    pub const fn new(rank: u8) -> Option<Self> {
        if rank <= Self::ORIGIN.0 {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// The raw rank in `0..=3`.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<GridRank> for u8 {
    fn from(rank: GridRank) -> Self {
        rank.0
    }
}

/// Rank of the grid line at lattice index `n`.
///
/// The origin line gets [`GridRank::ORIGIN`]; any other line gets the number
/// of trailing decimal zeros of `|n|`, capped at [`GridRank::CENTURY`].
#[must_use]
pub fn grid_line_rank(n: i64) -> GridRank {
    if n == 0 {
        return GridRank::ORIGIN;
    }
    let mut m = n.unsigned_abs();
    let mut zeros = 0;
    while zeros < GridRank::CENTURY.0 && m % 10 == 0 {
        m /= 10;
        zeros += 1;
    }
    GridRank(zeros)
}

/// Stroke widths per rank.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankStyle {
    /// Width for ranks `0..=3`, in pixels.
    pub widths: [f64; 4],
}

impl Default for RankStyle {
    fn default() -> Self {
        Self {
            widths: [0.5, 1.0, 1.5, 2.5],
        }
    }
}

impl RankStyle {
    /// Returns a copy with the width for `rank` replaced.
    #[must_use]
    pub fn with_width(mut self, rank: GridRank, width: f64) -> Self {
        self.widths[usize::from(rank.0)] = width;
        self
    }

    /// Stroke width for lines of `rank`.
    #[must_use]
    pub fn stroke_width(&self, rank: GridRank) -> f64 {
        self.widths[usize::from(rank.0)]
    }
}

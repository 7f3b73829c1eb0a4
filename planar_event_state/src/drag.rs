// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: compute movement deltas and total offsets from pointer
//! positions.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`] on pointer-down.
//! 2) On each move, [`DragState::update`] returns the delta since the last
//!    position, or `None` when no drag is active.
//! 3) [`DragState::total_offset`] gives the offset from the start position.
//! 4) End with [`DragState::end`] on pointer-up, leave or cancel.
//!
//! `DragState` is `Copy`, so a reducer can take a copy, update it and return
//! it without touching the original.

use planar_geometry::Vec2;

/// Pointer drag tracking.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Where the drag started.
        start: Vec2,
        /// Last recorded pointer position.
        last: Vec2,
    },
}

impl DragState {
    /// Starts tracking a new drag from `pos`, replacing any drag in progress.
    pub fn start(&mut self, pos: Vec2) {
        *self = Self::Dragging {
            start: pos,
            last: pos,
        };
    }

    /// Records a new position and returns the movement since the last one.
    ///
    /// Returns `None` (and records nothing) when no drag is active.
    pub fn update(&mut self, pos: Vec2) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { last, .. } => {
                let delta = pos - *last;
                *last = pos;
                Some(delta)
            }
        }
    }

    /// Offset of `current_pos` from the drag start.
    #[must_use]
    pub fn total_offset(&self, current_pos: Vec2) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { start, .. } => Some(current_pos - *start),
        }
    }

    /// Ends the current drag.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Last recorded position of an active drag.
    #[must_use]
    pub fn last_position(&self) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { last, .. } => Some(*last),
        }
    }
}

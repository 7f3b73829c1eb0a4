// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Event State: small state machines for viewport interaction.
//!
//! - [`drag`]: track a pointer drag with per-move deltas and the total
//!   offset from where it started.
//! - [`wheel`]: reduce wheel deltas of any unit to a single tick direction.
//!
//! Neither helper knows anything about viewports or event sources; they take
//! positions and deltas already expressed in screen space.
//!
//! ```rust
//! use planar_event_state::drag::DragState;
//! use planar_event_state::wheel::WheelDirection;
//! use planar_geometry::Vec2;
//!
//! let mut drag = DragState::default();
//! drag.start(Vec2::new(10.0, 10.0));
//! assert_eq!(drag.update(Vec2::new(15.0, 12.0)), Some(Vec2::new(5.0, 2.0)));
//!
//! assert_eq!(WheelDirection::from_delta(-3.0), Some(WheelDirection::Up));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod wheel;

// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar View: the viewport controller of a plane visualizer.
//!
//! A [`Viewport`] maps the world plane (y up) onto a pixel surface (y down)
//! through an arbitrary invertible affine transform. It zooms and rotates
//! about a fixed world point, so the point under the cursor stays under the
//! cursor, and it answers which part of the world is currently visible.
//!
//! [`ViewController`] turns input into viewport updates:
//!
//! - a drag pans the view by the pointer's screen delta,
//! - a wheel tick zooms about the pointer, or rotates with the configured
//!   modifier held,
//! - resize and reset re-center the view.
//!
//! Events are plain [`ViewEvent`] values. [`ViewController::handle`] is a
//! pure reducer returning the next state and a [`Redraw`] request;
//! [`EventQueue`] buffers events and drains them one at a time.
//! Behavior is tuned through [`ViewConfig`], whose options can also be read
//! and written by name.
//!
//! ```rust
//! use planar_geometry::Vec2;
//! use planar_view::{KeyModifiers, Redraw, ViewConfig, ViewController, ViewEvent};
//!
//! let mut view = ViewController::new(Vec2::new(800.0, 600.0), ViewConfig::default()).unwrap();
//! let cursor = Vec2::new(600.0, 150.0);
//! let under_cursor = view.viewport().screen_to_world(cursor);
//!
//! let redraw = view.dispatch(&ViewEvent::Wheel {
//!     position: cursor,
//!     delta: -1.0,
//!     modifiers: KeyModifiers::empty(),
//! });
//! assert_eq!(redraw, Redraw::Transform);
//! assert!(view.viewport().zoom() > 50.0);
//!
//! // The world point under the cursor did not move.
//! let after = view.viewport().world_to_screen(under_cursor);
//! assert!(after.distance(cursor) < 1e-6);
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter`: [`view_event_from_pointer`] converts `ui-events`
//!   pointer events into [`ViewEvent`]s.
//! - `tracing`: log drag transitions and rejected updates.
//! - `serde`: `Serialize`/`Deserialize` for state, configuration and events.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

#[cfg(feature = "ui_events_adapter")]
mod adapter;
mod config;
mod controller;
mod event;
mod log;
mod queue;
mod viewport;

#[cfg(feature = "ui_events_adapter")]
pub use adapter::{key_modifiers, view_event_from_pointer};
pub use config::{ConfigError, OptionKind, OptionSpec, OptionValue, ViewConfig};
pub use controller::ViewController;
pub use event::{KeyModifiers, Redraw, ViewEvent};
pub use queue::EventQueue;
pub use viewport::{Viewport, ViewportDebugInfo};

// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from [`ui_events`] pointer events.

use planar_geometry::Vec2;
use ui_events::ScrollDelta;
use ui_events::keyboard::Modifiers;
use ui_events::pointer::{PointerEvent, PointerScrollEvent};

use crate::event::{KeyModifiers, ViewEvent};

/// Maps a pointer event onto the controller's vocabulary.
///
/// Enter and gesture events have no counterpart and map to `None`.
#[must_use]
pub fn view_event_from_pointer(event: &PointerEvent) -> Option<ViewEvent> {
    match event {
        PointerEvent::Down(e) => Some(ViewEvent::PointerDown {
            position: Vec2::from(e.state.logical_point()),
        }),
        PointerEvent::Move(e) => Some(ViewEvent::PointerMove {
            position: Vec2::from(e.current.logical_point()),
        }),
        PointerEvent::Up(_) => Some(ViewEvent::PointerUp),
        PointerEvent::Leave(_) => Some(ViewEvent::PointerLeave),
        PointerEvent::Cancel(_) => Some(ViewEvent::PointerCancel),
        PointerEvent::Scroll(e) => Some(ViewEvent::Wheel {
            position: Vec2::from(e.state.logical_point()),
            delta: vertical_delta(e),
            modifiers: key_modifiers(e.state.modifiers),
        }),
        PointerEvent::Enter(_) | PointerEvent::Gesture(_) => None,
    }
}

/// Converts keyboard modifiers to [`KeyModifiers`].
#[must_use]
pub fn key_modifiers(modifiers: Modifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    out.set(KeyModifiers::SHIFT, modifiers.contains(Modifiers::SHIFT));
    out.set(KeyModifiers::CONTROL, modifiers.contains(Modifiers::CONTROL));
    out.set(KeyModifiers::ALT, modifiers.contains(Modifiers::ALT));
    out.set(KeyModifiers::META, modifiers.contains(Modifiers::META));
    out
}

// Only the sign reaches the controller, so line and page deltas are not
// scaled to pixels.
fn vertical_delta(event: &PointerScrollEvent) -> f64 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => pos.to_logical::<f64>(event.state.scale_factor).y,
        ScrollDelta::LineDelta(_, y) | ScrollDelta::PageDelta(_, y) => f64::from(*y),
    }
}

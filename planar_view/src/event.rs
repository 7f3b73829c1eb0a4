// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use planar_geometry::Vec2;

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct KeyModifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt / Option.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows.
        const META    = 0b0000_1000;
    }
}

/// An input event for a [`ViewController`](crate::ViewController).
///
/// Positions are in screen space (logical pixels, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewEvent {
    /// A button went down; starts a drag.
    PointerDown {
        /// Pointer position.
        position: Vec2,
    },
    /// The pointer moved; pans while dragging.
    PointerMove {
        /// Pointer position.
        position: Vec2,
    },
    /// The button was released.
    PointerUp,
    /// The pointer left the surface.
    PointerLeave,
    /// The platform cancelled the pointer interaction.
    PointerCancel,
    /// A wheel tick; zooms or rotates about the pointer.
    Wheel {
        /// Pointer position.
        position: Vec2,
        /// Vertical delta in any unit; only its sign is used.
        delta: f64,
        /// Modifiers held during the tick.
        modifiers: KeyModifiers,
    },
    /// The surface changed size.
    Resize {
        /// New size in pixels.
        size: Vec2,
    },
    /// Return to the initial view.
    Reset,
}

/// What a handled event changed, and so what needs redrawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Redraw {
    /// Nothing visible changed.
    #[default]
    None,
    /// The world → screen transform or the surface changed.
    Transform,
}

impl Redraw {
    /// Returns `true` unless nothing changed.
    #[must_use]
    pub fn is_needed(self) -> bool {
        self != Self::None
    }

    /// The stronger of two redraw requests.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_merge_keeps_the_stronger_request() {
        assert_eq!(Redraw::None.merge(Redraw::None), Redraw::None);
        assert_eq!(Redraw::None.merge(Redraw::Transform), Redraw::Transform);
        assert_eq!(Redraw::Transform.merge(Redraw::None), Redraw::Transform);
        assert!(!Redraw::default().is_needed());
    }

    #[test]
    fn modifier_sets() {
        let held = KeyModifiers::SHIFT | KeyModifiers::CONTROL;
        assert!(held.contains(KeyModifiers::SHIFT));
        assert!(!held.contains(KeyModifiers::ALT));
        assert!(held.contains(KeyModifiers::empty()));
    }
}

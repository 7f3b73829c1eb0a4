// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use planar_event_state::drag::DragState;
use planar_event_state::wheel::WheelDirection;
use planar_geometry::{GeometryError, Polygon, Rectangle, Vec2};
use planar_grid::GridSpec;

use crate::config::ViewConfig;
use crate::event::{KeyModifiers, Redraw, ViewEvent};
use crate::log;
use crate::viewport::Viewport;

/// Interaction state machine over a [`Viewport`].
///
/// Dragging pans; the wheel zooms about the pointer, or rotates about it
/// while [`ViewConfig::rotate_modifier`] is held.
///
/// [`ViewController::handle`] is a pure reducer from `(state, event)` to
/// `(state, redraw)`; [`ViewController::dispatch`] applies it in place.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewController {
    viewport: Viewport,
    drag: DragState,
    config: ViewConfig,
}

impl ViewController {
    /// Creates a controller for a surface of `size` pixels.
    ///
    /// Fails when [`ViewConfig::initial_zoom`] is too small for an
    /// invertible view.
    pub fn new(size: Vec2, config: ViewConfig) -> Result<Self, GeometryError> {
        Ok(Self {
            viewport: Viewport::with_zoom(size, config.initial_zoom)?,
            drag: DragState::Idle,
            config,
        })
    }

    /// Wraps an existing viewport.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, config: ViewConfig) -> Self {
        Self {
            viewport,
            drag: DragState::Idle,
            config,
        }
    }

    /// The current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable access to the viewport, for programmatic navigation.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Replaces the configuration; takes effect from the next event.
    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config;
    }

    /// The drag state.
    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// World bounds of the screen inset by [`ViewConfig::visible_margin`].
    #[must_use]
    pub fn visible_world_bounds(&self) -> Rectangle {
        self.viewport.visible_world_bounds(self.config.visible_margin)
    }

    /// World polygon of the screen inset by [`ViewConfig::visible_margin`].
    #[must_use]
    pub fn visible_world_polygon(&self) -> Polygon {
        self.viewport.visible_world_polygon(self.config.visible_margin)
    }

    /// Grid spacing for the current zoom and
    /// [`ViewConfig::grid_reference_size`].
    #[must_use]
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::for_zoom(self.viewport.zoom(), self.config.grid_reference_size)
    }

    /// Computes the state after `event` without modifying `self`.
    ///
    /// Events carrying a NaN or infinite position or size are dropped, and
    /// an update the viewport rejects leaves the state as it was.
    #[must_use]
    pub fn handle(&self, event: &ViewEvent) -> (Self, Redraw) {
        let mut next = *self;
        let redraw = match *event {
            ViewEvent::PointerDown { position }
            | ViewEvent::PointerMove { position }
            | ViewEvent::Wheel { position, .. }
                if !position.is_finite() =>
            {
                log::warn!(?event, "view: dropped event with non-finite position");
                Redraw::None
            }
            ViewEvent::PointerDown { position } => {
                next.drag.start(position);
                log::trace!(?position, "view: drag started");
                Redraw::None
            }
            ViewEvent::PointerMove { position } => match next.drag.update(position) {
                Some(delta) if delta != Vec2::ZERO => outcome(next.viewport.pan(delta), event),
                _ => Redraw::None,
            },
            ViewEvent::PointerUp | ViewEvent::PointerLeave | ViewEvent::PointerCancel => {
                if next.drag.is_dragging() {
                    log::trace!(?event, "view: drag ended");
                }
                next.drag.end();
                Redraw::None
            }
            ViewEvent::Wheel {
                position,
                delta,
                modifiers,
            } => next
                .wheel(position, delta, modifiers)
                .map_or(Redraw::None, |result| outcome(result, event)),
            ViewEvent::Resize { size } => outcome(next.viewport.resize(size), event),
            ViewEvent::Reset => outcome(next.viewport.reset(), event),
        };
        (next, redraw)
    }

    /// Applies `event` in place.
    pub fn dispatch(&mut self, event: &ViewEvent) -> Redraw {
        let (next, redraw) = self.handle(event);
        *self = next;
        redraw
    }

    /// Zooms or rotates for one wheel tick; `None` when `delta` is zero.
    fn wheel(
        &mut self,
        position: Vec2,
        delta: f64,
        modifiers: KeyModifiers,
    ) -> Option<Result<(), GeometryError>> {
        let direction = WheelDirection::from_delta(delta)?;
        let step = if self.config.rotates(modifiers) {
            self.config.rotation_matrix()
        } else {
            self.config.zoom_matrix()
        };
        let m = if direction == self.config.zoom_in_direction {
            Ok(step)
        } else {
            step.inverse()
        };
        let fixed_point = self.viewport.screen_to_world(position);
        Some(m.and_then(|m| self.viewport.apply_zoom(m, fixed_point)))
    }
}

/// Redraw request for a viewport update; rejected updates are logged and
/// need no redraw.
#[cfg_attr(
    not(feature = "tracing"),
    expect(unused_variables, reason = "only read by the tracing macros")
)]
fn outcome(result: Result<(), GeometryError>, event: &ViewEvent) -> Redraw {
    match result {
        Ok(()) => Redraw::Transform,
        Err(err) => {
            log::warn!(error = %err, ?event, "view: viewport update rejected");
            Redraw::None
        }
    }
}

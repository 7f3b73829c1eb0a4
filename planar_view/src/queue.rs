// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;

use crate::controller::ViewController;
use crate::event::{Redraw, ViewEvent};

/// FIFO buffer of [`ViewEvent`]s.
///
/// Event sources push as events arrive; the owner drains the queue into a
/// [`ViewController`] once per frame. Each event is handled to completion
/// before the next is taken, so handling never re-enters.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<ViewEvent>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: ViewEvent) {
        self.events.push_back(event);
    }

    /// Takes the oldest event.
    pub fn pop(&mut self) -> Option<ViewEvent> {
        self.events.pop_front()
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Handles every pending event in order and returns the strongest
    /// redraw request among them.
    pub fn drain_into(&mut self, controller: &mut ViewController) -> Redraw {
        let mut redraw = Redraw::None;
        while let Some(event) = self.events.pop_front() {
            redraw = redraw.merge(controller.dispatch(&event));
        }
        redraw
    }
}

impl Extend<ViewEvent> for EventQueue {
    fn extend<I: IntoIterator<Item = ViewEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

//! Pointer events and the host obligations they produce.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// A single-pointer input event.
///
/// The design is single-pointer: the host dispatches one pointer's stream
/// in arrival order. `Cancel` means the host aborted the gesture (pointer
/// lost, ancestor took over the stream).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer pressed down.
    Down {
        /// Pointer position
        position: Point,
    },
    /// Pointer moved while down.
    Move {
        /// Pointer position
        position: Point,
    },
    /// Pointer released.
    Up {
        /// Pointer position
        position: Point,
    },
    /// Gesture aborted by the host.
    Cancel {
        /// Pointer position
        position: Point,
    },
}

impl PointerEvent {
    /// The pointer position carried by the event.
    #[must_use]
    pub const fn position(&self) -> Point {
        match self {
            Self::Down { position }
            | Self::Move { position }
            | Self::Up { position }
            | Self::Cancel { position } => *position,
        }
    }
}

/// What the host must do after dispatching an event to a widget.
///
/// Outward calls are modeled as data rather than callbacks: the host reads
/// the flags after each dispatch and acts on them, so any toolkit's
/// view/control abstraction can supply the capabilities.
#[derive(Default)]
pub struct EventResponse {
    /// The widget consumed the event; default handling must not run.
    pub consumed: bool,
    /// The widget needs a redraw.
    pub redraw: bool,
    /// Ancestor scroll surfaces must not intercept the rest of this gesture.
    pub disallow_intercept: bool,
    /// Play commit feedback (haptic/audio click).
    pub feedback: bool,
    /// Message emitted by the widget, if any.
    pub message: Option<Box<dyn Any + Send>>,
}

impl EventResponse {
    /// Response for an event the widget did not handle.
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    /// Response for a consumed event with no further obligations.
    #[must_use]
    pub fn handled() -> Self {
        Self {
            consumed: true,
            ..Self::default()
        }
    }
}

impl fmt::Debug for EventResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventResponse")
            .field("consumed", &self.consumed)
            .field("redraw", &self.redraw)
            .field("disallow_intercept", &self.disallow_intercept)
            .field("feedback", &self.feedback)
            .field("has_message", &self.message.is_some())
            .finish()
    }
}

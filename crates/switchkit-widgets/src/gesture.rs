//! Touch state machine for thumb dragging.

use serde::{Deserialize, Serialize};
use switchkit_core::{Point, PointerEvent, Rect};

/// Default movement slop before a press becomes a drag, in pixels.
pub const DEFAULT_TOUCH_SLOP: f32 = 10.0;

/// Gesture classification state.
///
/// Strictly sequential: `Idle` → `Pressed` → `Dragging` → `Idle`. A gesture
/// can resolve from `Pressed` straight back to `Idle` (tap case), but never
/// reaches `Dragging` without passing through `Pressed` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchMode {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer down on the thumb, slop not yet exceeded
    Pressed,
    /// Thumb is being dragged
    Dragging,
}

/// Pointer bookkeeping for one press-to-release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Where the press landed
    pub start: Point,
    /// Last position a consumed move was observed at
    pub last: Point,
}

/// Read-only widget geometry consulted while classifying an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    /// Whether the control accepts gestures
    pub enabled: bool,
    /// Current thumb bounds (live, mid-drag values included)
    pub thumb_bounds: Rect,
    /// X coordinate of the track midline; the commit threshold
    pub track_center_x: f32,
}

/// What the widget must do with a classified event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureDecision {
    /// Not this tracker's gesture; default handling may run.
    Ignore,
    /// Press landed on the thumb; the event is consumed.
    Press,
    /// Move below the slop threshold; stay pressed, do not consume.
    Hold,
    /// Slop exceeded: the gesture is now a drag. Consume, request that
    /// ancestors stop intercepting, and cancel any running settle animation.
    BeginDrag,
    /// Apply a horizontal delta to the thumb, clamped by the track.
    Drag {
        /// Pointer movement since the last consumed position
        delta_x: f32,
    },
    /// Release while dragging: commit the state the thumb resolved to.
    Commit {
        /// Committed state (thumb center on or right of the midline)
        on: bool,
    },
    /// Aborted drag (cancel event, or control disabled at release): restore
    /// the pre-gesture state without notifications.
    Revert,
    /// Release with no drag in progress; the host tap path owns it.
    Release,
}

/// Classifies a single pointer's event stream into presses, drags, and
/// commits.
///
/// The tracker owns no geometry: the widget passes a [`GestureContext`]
/// snapshot with each event and applies the returned [`GestureDecision`].
#[derive(Debug, Clone)]
pub struct GestureTracker {
    slop: f32,
    mode: TouchMode,
    session: Option<DragSession>,
}

impl GestureTracker {
    /// Create a tracker with the given slop threshold.
    #[must_use]
    pub const fn new(slop: f32) -> Self {
        Self {
            slop,
            mode: TouchMode::Idle,
            session: None,
        }
    }

    /// Current gesture state.
    #[must_use]
    pub const fn mode(&self) -> TouchMode {
        self.mode
    }

    /// The live drag session, if a gesture is in progress.
    #[must_use]
    pub const fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// The configured slop threshold.
    #[must_use]
    pub const fn slop(&self) -> f32 {
        self.slop
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mode == TouchMode::Dragging
    }

    /// Whether any gesture (press or drag) is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mode != TouchMode::Idle
    }

    /// Drop any gesture in progress and return to idle.
    pub fn reset(&mut self) {
        self.mode = TouchMode::Idle;
        self.session = None;
    }

    /// Classify one pointer event.
    pub fn process(&mut self, event: &PointerEvent, ctx: &GestureContext) -> GestureDecision {
        match *event {
            PointerEvent::Down { position } => self.on_down(position, ctx),
            PointerEvent::Move { position } => self.on_move(position),
            PointerEvent::Up { .. } => self.on_up(ctx),
            PointerEvent::Cancel { .. } => self.on_cancel(),
        }
    }

    fn on_down(&mut self, position: Point, ctx: &GestureContext) -> GestureDecision {
        if ctx.enabled && ctx.thumb_bounds.contains_point(&position) {
            self.mode = TouchMode::Pressed;
            self.session = Some(DragSession {
                start: position,
                last: position,
            });
            GestureDecision::Press
        } else {
            GestureDecision::Ignore
        }
    }

    fn on_move(&mut self, position: Point) -> GestureDecision {
        let Some(session) = self.session.as_mut() else {
            return GestureDecision::Ignore;
        };
        match self.mode {
            TouchMode::Idle => GestureDecision::Ignore,
            TouchMode::Pressed => {
                let exceeds_slop = (position.x - session.start.x).abs() > self.slop
                    || (position.y - session.start.y).abs() > self.slop;
                if exceeds_slop {
                    self.mode = TouchMode::Dragging;
                    session.last = position;
                    GestureDecision::BeginDrag
                } else {
                    GestureDecision::Hold
                }
            }
            TouchMode::Dragging => {
                let delta_x = position.x - session.last.x;
                session.last = position;
                GestureDecision::Drag { delta_x }
            }
        }
    }

    fn on_up(&mut self, ctx: &GestureContext) -> GestureDecision {
        let was_dragging = self.is_dragging();
        let thumb_center_x = ctx.thumb_bounds.center().x;
        self.reset();
        if !was_dragging {
            return GestureDecision::Release;
        }
        if ctx.enabled {
            GestureDecision::Commit {
                on: thumb_center_x >= ctx.track_center_x,
            }
        } else {
            GestureDecision::Revert
        }
    }

    fn on_cancel(&mut self) -> GestureDecision {
        let was_dragging = self.is_dragging();
        self.reset();
        if was_dragging {
            GestureDecision::Revert
        } else {
            GestureDecision::Release
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_SLOP)
    }
}

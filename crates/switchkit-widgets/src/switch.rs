//! Sliding switch widget with a draggable thumb.

use crate::gesture::{GestureContext, GestureDecision, GestureTracker, DEFAULT_TOUCH_SLOP};
use crate::metrics::TrackMetrics;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::time::Duration;
use switchkit_core::{
    widget::LayoutResult, Canvas, Color, Constraints, Easing, EventResponse, Point, PointerEvent,
    Rect, Size, TextStyle, Transition, Widget,
};

/// Default thumb settle duration.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Alpha factor applied to every paint color while disabled.
const DISABLED_DIM: f32 = 0.5;

/// Message emitted when the switch state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new checked state
    pub on: bool,
}

/// Sliding switch widget (on/off).
///
/// The thumb can be tapped (anywhere in the widget bounds) or dragged along
/// the track; releasing a drag commits whichever state the thumb is closest
/// to and animates the remainder of the travel. State changes surface as a
/// [`SwitchChanged`] message in the [`EventResponse`], exactly once per
/// actual flip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchButton {
    /// Current state
    checked: bool,
    /// Whether the switch is disabled
    disabled: bool,
    /// Label text
    label: String,
    /// Track width
    track_width: f32,
    /// Track height
    track_height: f32,
    /// Thumb width
    thumb_width: f32,
    /// Thumb height
    thumb_height: f32,
    /// Gap between the track edge and the thumb at rest
    thumb_padding: f32,
    /// Track corner radius
    corner_radius: f32,
    /// Settle animation duration
    duration: Duration,
    /// Settle easing curve
    easing: Easing,
    /// Track color when off
    track_off_color: Color,
    /// Track color when on
    track_on_color: Color,
    /// Thumb color
    thumb_color: Color,
    /// Label text style
    label_style: TextStyle,
    /// Spacing between track and label
    spacing: f32,
    /// Movement slop before a press becomes a drag
    touch_slop: f32,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Live thumb offset from the track's left edge
    #[serde(skip)]
    thumb_offset: f32,
    /// Touch state machine
    #[serde(skip)]
    tracker: GestureTracker,
    /// Settle animation in flight, if any
    #[serde(skip)]
    transition: Option<Transition>,
    /// Whether the default tap path is armed
    #[serde(skip)]
    tap_armed: bool,
    /// Whether layout has run
    #[serde(skip)]
    laid_out: bool,
}

impl Default for SwitchButton {
    fn default() -> Self {
        Self {
            checked: false,
            disabled: false,
            label: String::new(),
            track_width: 44.0,
            track_height: 24.0,
            thumb_width: 20.0,
            thumb_height: 20.0,
            thumb_padding: 2.0,
            corner_radius: 12.0,
            duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::Linear,
            track_off_color: Color::new(0.7, 0.7, 0.7, 1.0),
            track_on_color: Color::new(0.2, 0.47, 0.96, 1.0),
            thumb_color: Color::WHITE,
            label_style: TextStyle::default(),
            spacing: 8.0,
            touch_slop: DEFAULT_TOUCH_SLOP,
            bounds: Rect::default(),
            thumb_offset: 0.0,
            tracker: GestureTracker::default(),
            transition: None,
            tap_armed: false,
            laid_out: false,
        }
    }
}

impl SwitchButton {
    /// Create a new switch in the OFF state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with an initial state.
    #[must_use]
    pub fn with_state(checked: bool) -> Self {
        Self::default().checked(checked)
    }

    /// Set the checked state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set whether the switch is disabled.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the track width.
    #[must_use]
    pub fn track_width(mut self, width: f32) -> Self {
        self.track_width = width.max(20.0);
        self
    }

    /// Set the track height.
    #[must_use]
    pub fn track_height(mut self, height: f32) -> Self {
        self.track_height = height.max(12.0);
        self
    }

    /// Set the thumb width.
    #[must_use]
    pub fn thumb_width(mut self, width: f32) -> Self {
        self.thumb_width = width.max(8.0);
        self
    }

    /// Set the thumb height.
    #[must_use]
    pub fn thumb_height(mut self, height: f32) -> Self {
        self.thumb_height = height.max(8.0);
        self
    }

    /// Set the gap between the track edge and the thumb at rest.
    #[must_use]
    pub fn thumb_padding(mut self, padding: f32) -> Self {
        self.thumb_padding = padding.max(0.0);
        self
    }

    /// Set the track corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set the settle animation duration.
    #[must_use]
    pub const fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the settle easing curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the track off color.
    #[must_use]
    pub const fn track_off_color(mut self, color: Color) -> Self {
        self.track_off_color = color;
        self
    }

    /// Set the track on color.
    #[must_use]
    pub const fn track_on_color(mut self, color: Color) -> Self {
        self.track_on_color = color;
        self
    }

    /// Set the thumb color.
    #[must_use]
    pub const fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    /// Set the label text style.
    #[must_use]
    pub const fn label_style(mut self, style: TextStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Set the spacing between track and label.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Set the movement slop before a press becomes a drag.
    #[must_use]
    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop.max(0.0);
        self.tracker = GestureTracker::new(self.touch_slop);
        self
    }

    /// Get current state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Get disabled state.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Get the label.
    #[must_use]
    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// Get the track width.
    #[must_use]
    pub const fn get_track_width(&self) -> f32 {
        self.track_width
    }

    /// Get the track height.
    #[must_use]
    pub const fn get_track_height(&self) -> f32 {
        self.track_height
    }

    /// Get the thumb width.
    #[must_use]
    pub const fn get_thumb_width(&self) -> f32 {
        self.thumb_width
    }

    /// Get the settle animation duration.
    #[must_use]
    pub const fn get_duration(&self) -> Duration {
        self.duration
    }

    /// Current thumb offset from the track's left edge.
    #[must_use]
    pub const fn thumb_offset(&self) -> f32 {
        self.thumb_offset
    }

    /// Whether a settle animation is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Set disabled state at runtime.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Set the checked state, animating the thumb once laid out.
    ///
    /// Returns a change message only when the state actually flipped.
    /// Before layout only the logical state changes; the first layout
    /// snaps the thumb to the matching rest position.
    pub fn set_checked(&mut self, checked: bool) -> Option<SwitchChanged> {
        let flipped = self.checked != checked;
        self.checked = checked;
        if self.laid_out {
            self.animate_to_rest();
        }
        flipped.then_some(SwitchChanged { on: checked })
    }

    /// Flip the checked state, unless disabled.
    pub fn toggle(&mut self) -> Option<SwitchChanged> {
        if self.disabled {
            return None;
        }
        self.set_checked(!self.checked)
    }

    const fn metrics(&self) -> TrackMetrics {
        TrackMetrics::new(self.track_width, self.thumb_width, self.thumb_padding)
    }

    const fn track_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.track_width,
            self.track_height,
        )
    }

    fn thumb_bounds(&self) -> Rect {
        let y = self.bounds.y + (self.track_height - self.thumb_height) / 2.0;
        Rect::new(
            self.bounds.x + self.thumb_offset,
            y,
            self.thumb_width,
            self.thumb_height,
        )
    }

    fn gesture_context(&self) -> GestureContext {
        GestureContext {
            enabled: !self.disabled,
            // Before layout there is no thumb to hit; taps are all that work.
            thumb_bounds: if self.laid_out {
                self.thumb_bounds()
            } else {
                Rect::default()
            },
            track_center_x: self.track_rect().center().x,
        }
    }

    /// Start a settle sweep from the live thumb offset to the rest position.
    fn animate_to_rest(&mut self) {
        let target = self.metrics().offset_for(self.checked);
        self.transition =
            Some(Transition::new(self.thumb_offset, target, self.duration).with_easing(self.easing));
    }

    /// Resolve the end of a drag: commit or revert, then settle.
    fn finish_drag(&mut self, commit: Option<bool>, position: Point) -> EventResponse {
        let flipped = commit.is_some_and(|on| {
            let changed = self.checked != on;
            self.checked = on;
            changed
        });
        self.animate_to_rest();
        // The press never reached the tap path; end its gesture there too so
        // an armed tap cannot fire after the drag.
        let _ = self.tap_path(&PointerEvent::Cancel { position });
        EventResponse {
            consumed: true,
            redraw: true,
            feedback: flipped,
            message: flipped
                .then(|| Box::new(SwitchChanged { on: self.checked }) as Box<dyn Any + Send>),
            ..EventResponse::default()
        }
    }

    /// Default tap handling for events the thumb gesture did not claim.
    fn tap_path(&mut self, event: &PointerEvent) -> EventResponse {
        match *event {
            PointerEvent::Down { position } => {
                if !self.disabled && self.bounds.contains_point(&position) {
                    self.tap_armed = true;
                    EventResponse::handled()
                } else {
                    EventResponse::ignored()
                }
            }
            PointerEvent::Move { .. } => EventResponse::ignored(),
            PointerEvent::Up { position } => {
                if !self.tap_armed {
                    return EventResponse::ignored();
                }
                self.tap_armed = false;
                if !self.disabled && self.bounds.contains_point(&position) {
                    self.tap_toggle()
                } else {
                    EventResponse::handled()
                }
            }
            PointerEvent::Cancel { .. } => {
                let was_armed = self.tap_armed;
                self.tap_armed = false;
                if was_armed {
                    EventResponse::handled()
                } else {
                    EventResponse::ignored()
                }
            }
        }
    }

    /// Complete a tap: flip state, settle, notify.
    fn tap_toggle(&mut self) -> EventResponse {
        let message = self.toggle();
        let flipped = message.is_some();
        EventResponse {
            consumed: true,
            redraw: flipped,
            feedback: flipped,
            message: message.map(|m| Box::new(m) as Box<dyn Any + Send>),
            ..EventResponse::default()
        }
    }
}

impl Widget for SwitchButton {
    fn measure(&self, constraints: Constraints) -> Size {
        let label_width = if self.label.is_empty() {
            0.0
        } else {
            (self.label.len() as f32).mul_add(8.0, self.spacing)
        };
        let preferred = Size::new(
            self.track_width + label_width,
            self.track_height.max(self.thumb_height),
        );
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.laid_out = true;
        // Layout re-derives geometry, so any in-flight gesture or sweep is
        // stale: snap the thumb to its rest position and start clean.
        self.thumb_offset = self.metrics().offset_for(self.checked);
        self.transition = None;
        self.tracker = GestureTracker::new(self.touch_slop);
        self.tap_armed = false;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let dim = if self.disabled { DISABLED_DIM } else { 1.0 };
        let track = self.track_rect();

        // Track base in the off color, then the on color blended over it in
        // proportion to the thumb's travel.
        let base = self.track_off_color;
        canvas.fill_rounded_rect(track, self.corner_radius, base.with_alpha(base.a * dim));

        let blend = f32::from(self.metrics().blend_alpha(self.thumb_offset)) / 255.0;
        let overlay = self.track_on_color;
        canvas.fill_rounded_rect(
            track,
            self.corner_radius,
            overlay.with_alpha(overlay.a * blend * dim),
        );

        let thumb = self.thumb_bounds();
        let thumb_color = self.thumb_color;
        canvas.fill_circle(
            thumb.center(),
            self.thumb_width / 2.0,
            thumb_color.with_alpha(thumb_color.a * dim),
        );

        if !self.label.is_empty() {
            // Approximate vertical centering; glyph metrics are the
            // backend's concern.
            let baseline = Point::new(
                self.bounds.x + self.track_width + self.spacing,
                track.center().y + self.label_style.size / 3.0,
            );
            canvas.draw_text(&self.label, baseline, &self.label_style);
        }
    }

    fn event(&mut self, event: &PointerEvent) -> EventResponse {
        let ctx = self.gesture_context();
        let was_active = self.tracker.is_active();
        match self.tracker.process(event, &ctx) {
            GestureDecision::Press => EventResponse::handled(),
            GestureDecision::Hold => EventResponse::ignored(),
            GestureDecision::BeginDrag => {
                self.transition = None;
                EventResponse {
                    consumed: true,
                    disallow_intercept: true,
                    ..EventResponse::default()
                }
            }
            GestureDecision::Drag { delta_x } => {
                self.thumb_offset = self.metrics().clamp_offset(self.thumb_offset + delta_x);
                EventResponse {
                    consumed: true,
                    redraw: true,
                    ..EventResponse::default()
                }
            }
            GestureDecision::Commit { on } => self.finish_drag(Some(on), event.position()),
            GestureDecision::Revert => self.finish_drag(None, event.position()),
            GestureDecision::Release => {
                if was_active {
                    // The press was claimed at Down; its release cannot
                    // become a click.
                    EventResponse::handled()
                } else {
                    self.tap_path(event)
                }
            }
            GestureDecision::Ignore => self.tap_path(event),
        }
    }

    fn tick(&mut self, now: Duration) -> bool {
        // The pointer owns the thumb while a gesture is alive.
        if self.tracker.is_active() {
            return false;
        }
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        self.thumb_offset = transition.tick(now);
        if transition.is_complete() {
            self.transition = None;
        }
        true
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

//! Widget and render-surface capability traits.

use crate::constraints::Constraints;
use crate::event::{EventResponse, PointerEvent};
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Final size of the widget
    pub size: Size,
}

/// Core widget trait.
///
/// # Lifecycle
///
/// 1. `measure`: compute intrinsic size given constraints
/// 2. `layout`: cache position within allocated bounds
/// 3. `paint`: generate draw commands
///
/// Events arrive through `event`; animation runs through explicit `tick`
/// calls from the host's frame clock, so no scheduling framework is assumed.
/// Everything runs on the single thread that owns the event loop.
pub trait Widget: Send + Sync {
    /// Compute intrinsic size within the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle a pointer event, reporting host obligations as data.
    fn event(&mut self, event: &PointerEvent) -> EventResponse;

    /// Advance animations to `now`. Returns true if a redraw is needed.
    fn tick(&mut self, now: Duration) -> bool {
        let _ = now;
        false
    }

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend; rasterization
/// itself is the backend's concern.
pub trait Canvas {
    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: crate::Color);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: crate::Color);

    /// Draw a text run at a position.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// Text style for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: crate::Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: crate::Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

//! Draw-command recording for tests, diffing, and transport.

use crate::geometry::{CornerRadius, Point, Rect};
use crate::widget::{Canvas, TextStyle};
use crate::Color;
use serde::{Deserialize, Serialize};

/// A single recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle with optional corner rounding.
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radii
        radius: CornerRadius,
        /// Fill color
        color: Color,
    },
    /// Filled circle.
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Text run.
    Text {
        /// Text content
        content: String,
        /// Baseline position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a uniformly rounded, filled rectangle command.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            color,
        }
    }

    /// Create a filled circle command.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            color,
        }
    }
}

/// A Canvas implementation that records draw operations as [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to a remote surface)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: *style,
        });
    }
}

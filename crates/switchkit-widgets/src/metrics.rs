//! Pure thumb-offset geometry for a switch track.

use serde::{Deserialize, Serialize};

/// Maps a thumb offset to its clamped range, canonical endpoints, and the
/// normalized fraction that drives the track color blend.
///
/// All operations are pure and total: degenerate geometry (a track too
/// narrow to hold the thumb) collapses the range to `padding` instead of
/// producing an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackMetrics {
    /// Full track width in pixels
    pub track_width: f32,
    /// Thumb width in pixels
    pub thumb_width: f32,
    /// Padding between track edge and thumb at rest
    pub padding: f32,
}

impl TrackMetrics {
    /// Create metrics for a track.
    #[must_use]
    pub const fn new(track_width: f32, thumb_width: f32, padding: f32) -> Self {
        Self {
            track_width,
            thumb_width,
            padding,
        }
    }

    /// The canonical OFF offset (left rest position).
    #[must_use]
    pub const fn min_offset(&self) -> f32 {
        self.padding
    }

    /// The canonical ON offset (right rest position).
    ///
    /// Floors at [`Self::min_offset`] so the clamp range is never inverted.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.track_width - self.padding - self.thumb_width).max(self.min_offset())
    }

    /// Clamp an offset to `[min_offset, max_offset]`.
    #[must_use]
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(self.min_offset(), self.max_offset())
    }

    /// The canonical offset for a checked state.
    #[must_use]
    pub fn offset_for(&self, checked: bool) -> f32 {
        if checked {
            self.max_offset()
        } else {
            self.min_offset()
        }
    }

    /// Width the thumb can actually travel.
    #[must_use]
    pub fn available_width(&self) -> f32 {
        self.track_width - 2.0 * self.padding - self.thumb_width
    }

    /// Normalized thumb position in [0.0, 1.0].
    ///
    /// Zero when the travel width is degenerate.
    #[must_use]
    pub fn fraction_of(&self, offset: f32) -> f32 {
        let available = self.available_width();
        if available <= 0.0 {
            return 0.0;
        }
        ((offset - self.padding) / available).clamp(0.0, 1.0)
    }

    /// Track blend alpha in [0, 255] derived from the thumb position.
    #[must_use]
    pub fn blend_alpha(&self, offset: f32) -> u8 {
        (self.fraction_of(offset) * 255.0).round().clamp(0.0, 255.0) as u8
    }
}

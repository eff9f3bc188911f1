//! Time-driven value transitions for thumb movement.
//!
//! A [`Transition`] is single-shot and re-triggerable: replacing it with a
//! new one (seeded from the current live value) is the cancellation story.
//! Ticking is explicit — the host's frame clock calls [`Transition::tick`]
//! with its own notion of "now" — so no animation framework is required.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Easing curves for transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity
    #[default]
    Linear,
    /// Quadratic acceleration
    EaseIn,
    /// Quadratic deceleration
    EaseOut,
    /// Quadratic acceleration then deceleration
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a progress value, clamping input to [0.0, 1.0].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    (4.0 - 2.0 * t).mul_add(t, -1.0)
                }
            }
        }
    }
}

/// A single-shot eased sweep between two values, driven by an external clock.
///
/// The clock is anchored lazily: the first [`Transition::tick`] captures its
/// `now` as the start time, so the first sampled value is exactly `from`
/// regardless of when the host clock started counting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Start value
    pub from: f32,
    /// Target value
    pub to: f32,
    /// Sweep duration
    pub duration: Duration,
    /// Easing curve
    pub easing: Easing,
    started_at: Option<Duration>,
    progress: f32,
}

impl Transition {
    /// Create a linear transition between two values.
    #[must_use]
    pub const fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::Linear,
            started_at: None,
            progress: 0.0,
        }
    }

    /// Set the easing curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance to `now` and return the current value.
    ///
    /// Progress is `clamp((now - start) / duration, 0, 1)`. A `now` earlier
    /// than the anchored start saturates to zero elapsed time; a zero
    /// duration completes on the first tick.
    pub fn tick(&mut self, now: Duration) -> f32 {
        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.checked_sub(started).unwrap_or(Duration::ZERO);
        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        self.value()
    }

    /// The value at the last ticked progress.
    ///
    /// Returns `to` exactly once the sweep completes; intermediate values
    /// are the eased interpolation of `from` and `to`.
    #[must_use]
    pub fn value(&self) -> f32 {
        if self.progress >= 1.0 {
            return self.to;
        }
        (self.to - self.from).mul_add(self.easing.apply(self.progress), self.from)
    }

    /// Progress in [0.0, 1.0] as of the last tick.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the sweep has reached its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

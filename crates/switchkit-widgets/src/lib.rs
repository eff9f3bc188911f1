//! Switch widget built on the switchkit interaction core.
//!
//! The crate splits the control into three pieces: [`TrackMetrics`] for pure
//! offset geometry, [`GestureTracker`] for classifying a pointer stream, and
//! [`SwitchButton`] for composing both with the settle animation and paint
//! pass. The first two are plain data machines and can be tested without a
//! widget at all.

pub mod gesture;
pub mod metrics;
pub mod switch;

pub use gesture::{
    DragSession, GestureContext, GestureDecision, GestureTracker, TouchMode, DEFAULT_TOUCH_SLOP,
};
pub use metrics::TrackMetrics;
pub use switch::{SwitchButton, SwitchChanged, DEFAULT_ANIMATION_DURATION};

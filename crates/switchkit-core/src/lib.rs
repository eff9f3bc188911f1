//! Core types and capability traits for switchkit.
//!
//! This crate provides the foundation the switch widgets build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with hex parsing
//! - Layout constraints: [`Constraints`]
//! - Pointer events and host obligations: [`PointerEvent`], [`EventResponse`]
//! - Explicitly ticked transitions: [`Transition`], [`Easing`]
//! - Capability seams: [`Widget`], [`Canvas`], plus the [`RecordingCanvas`]
//!   test/diff surface

mod animation;
mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod widget;

pub use animation::{Easing, Transition};
pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{EventResponse, PointerEvent};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{Canvas, FontWeight, LayoutResult, TextStyle, Widget};

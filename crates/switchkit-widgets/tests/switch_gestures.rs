//! Integration tests for the switch widget.
//!
//! These drive the full measure → layout → event → tick → paint lifecycle
//! through the public API, the way a host event loop would.

use std::time::Duration;
use switchkit_core::{
    Constraints, DrawCommand, Point, PointerEvent, Rect, RecordingCanvas, Size, Widget,
};
use switchkit_widgets::{SwitchButton, SwitchChanged, TrackMetrics};

fn down(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down {
        position: Point::new(x, y),
    }
}

fn mv(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move {
        position: Point::new(x, y),
    }
}

fn up(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Up {
        position: Point::new(x, y),
    }
}

fn cancel(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Cancel {
        position: Point::new(x, y),
    }
}

/// A 100 wide track with a 20 wide thumb and 2 padding, laid out at origin.
/// Rest offsets are 2 (off) and 78 (on); the midline sits at x = 50.
fn wide_switch() -> SwitchButton {
    let mut switch = SwitchButton::new()
        .track_width(100.0)
        .thumb_width(20.0)
        .thumb_padding(2.0);
    switch.layout(Rect::new(0.0, 0.0, 100.0, 24.0));
    switch
}

// =============================================================================
// Lifecycle Integration Tests
// =============================================================================

#[test]
fn test_measure_layout_paint_flow() {
    let mut switch = SwitchButton::new().label("Wi-Fi");

    let size = switch.measure(Constraints::loose(Size::new(300.0, 100.0)));
    assert_eq!(size, Size::new(44.0 + 8.0 + 40.0, 24.0));

    switch.layout(Rect::new(0.0, 0.0, size.width, size.height));
    assert_eq!(switch.bounds().size(), size);

    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    // Track base, on-color overlay, thumb, label.
    assert_eq!(canvas.command_count(), 4);
}

#[test]
fn test_state_set_before_layout_snaps_at_layout() {
    let mut switch = SwitchButton::new();
    let message = switch.set_checked(true);
    assert_eq!(message, Some(SwitchChanged { on: true }));
    assert!(!switch.is_animating());

    switch.layout(Rect::new(0.0, 0.0, 44.0, 24.0));
    let rest = TrackMetrics::new(44.0, 20.0, 2.0).offset_for(true);
    assert_eq!(switch.thumb_offset(), rest);
    assert!(!switch.is_animating());
}

#[test]
fn test_rest_offsets_match_track_metrics() {
    let metrics = TrackMetrics::new(100.0, 20.0, 2.0);
    assert_eq!(metrics.offset_for(false), 2.0);
    assert_eq!(metrics.offset_for(true), 78.0);

    let mut switch = wide_switch();
    assert_eq!(switch.thumb_offset(), metrics.offset_for(false));
    switch.set_checked(true);
    switch.tick(Duration::ZERO);
    switch.tick(Duration::from_millis(200));
    assert_eq!(switch.thumb_offset(), metrics.offset_for(true));
}

// =============================================================================
// Tap Integration Tests
// =============================================================================

#[test]
fn test_tap_toggles_and_animates_to_rest() {
    let mut switch = wide_switch();

    let response = switch.event(&down(60.0, 12.0));
    assert!(response.consumed);

    let response = switch.event(&up(60.0, 12.0));
    assert!(response.consumed);
    assert!(response.feedback);
    let message = response
        .message
        .expect("tap should notify")
        .downcast::<SwitchChanged>()
        .expect("switch message");
    assert_eq!(*message, SwitchChanged { on: true });

    // The host ticks until the settle completes.
    assert!(switch.is_animating());
    switch.tick(Duration::ZERO);
    let mut redraws = 0;
    for ms in (16..=250).step_by(16) {
        if switch.tick(Duration::from_millis(ms)) {
            redraws += 1;
        }
    }
    assert!(redraws > 0);
    assert!(!switch.is_animating());
    assert_eq!(switch.thumb_offset(), 78.0);
}

#[test]
fn test_tap_on_thumb_is_not_a_click() {
    let mut switch = wide_switch();
    switch.event(&down(12.0, 12.0));
    let response = switch.event(&up(12.0, 12.0));
    assert!(response.message.is_none());
    assert!(!switch.is_checked());
}

#[test]
fn test_disabled_switch_ignores_all_input() {
    let mut switch = wide_switch();
    switch.set_disabled(true);
    assert!(!switch.is_interactive());

    for event in [down(60.0, 12.0), mv(70.0, 12.0), up(70.0, 12.0)] {
        let response = switch.event(&event);
        assert!(!response.consumed);
        assert!(response.message.is_none());
    }
    assert!(!switch.is_checked());
}

// =============================================================================
// Drag Integration Tests
// =============================================================================

#[test]
fn test_drag_commit_then_settle_remainder() {
    let mut switch = wide_switch();

    switch.event(&down(12.0, 12.0));
    switch.event(&mv(30.0, 12.0));
    switch.event(&mv(78.0, 12.0));
    assert_eq!(switch.thumb_offset(), 50.0);

    let response = switch.event(&up(78.0, 12.0));
    let message = response
        .message
        .expect("commit should notify")
        .downcast::<SwitchChanged>()
        .expect("switch message");
    assert!(message.on);
    assert!(switch.is_checked());

    // The settle covers the remaining 50 → 78 travel.
    switch.tick(Duration::ZERO);
    switch.tick(Duration::from_millis(100));
    assert_eq!(switch.thumb_offset(), 64.0);
    switch.tick(Duration::from_millis(200));
    assert_eq!(switch.thumb_offset(), 78.0);
}

#[test]
fn test_drag_below_midline_never_notifies() {
    let mut switch = wide_switch();

    switch.event(&down(12.0, 12.0));
    switch.event(&mv(30.0, 12.0));
    switch.event(&mv(65.0, 12.0));
    assert_eq!(switch.thumb_offset(), 37.0);

    let response = switch.event(&up(65.0, 12.0));
    assert!(response.message.is_none());
    assert!(!switch.is_checked());

    switch.tick(Duration::ZERO);
    switch.tick(Duration::from_millis(200));
    assert_eq!(switch.thumb_offset(), 2.0);
}

#[test]
fn test_cancelled_drag_restores_prior_state() {
    let mut switch = wide_switch();
    switch.set_checked(true);
    switch.tick(Duration::ZERO);
    switch.tick(Duration::from_millis(200));
    assert_eq!(switch.thumb_offset(), 78.0);

    // Drag the thumb most of the way home, then the host aborts.
    switch.event(&down(88.0, 12.0));
    switch.event(&mv(70.0, 12.0));
    switch.event(&mv(20.0, 12.0));
    assert_eq!(switch.thumb_offset(), 28.0);

    let response = switch.event(&cancel(20.0, 12.0));
    assert!(response.message.is_none());
    assert!(switch.is_checked());

    switch.tick(Duration::from_millis(300));
    switch.tick(Duration::from_millis(500));
    assert_eq!(switch.thumb_offset(), 78.0);
}

#[test]
fn test_exactly_one_notification_per_flip() {
    let mut switch = wide_switch();
    let mut notifications = 0;

    // Tap on, drag off, drag that does not cross, cancelled drag.
    let gestures: Vec<Vec<PointerEvent>> = vec![
        vec![down(60.0, 12.0), up(60.0, 12.0)],
        vec![
            down(88.0, 12.0),
            mv(70.0, 12.0),
            mv(22.0, 12.0),
            up(22.0, 12.0),
        ],
        vec![
            down(12.0, 12.0),
            mv(30.0, 12.0),
            mv(40.0, 12.0),
            up(40.0, 12.0),
        ],
        vec![
            down(12.0, 12.0),
            mv(30.0, 12.0),
            mv(78.0, 12.0),
            cancel(78.0, 12.0),
        ],
    ];
    for gesture in &gestures {
        for event in gesture {
            if switch.event(event).message.is_some() {
                notifications += 1;
            }
        }
        // Let any settle finish between gestures.
        switch.tick(Duration::ZERO);
        switch.tick(Duration::from_secs(10));
    }

    // Only the tap and the crossing drag flipped the state.
    assert_eq!(notifications, 2);
    assert!(!switch.is_checked());
    assert_eq!(switch.thumb_offset(), 2.0);
}

#[test]
fn test_slop_gate_requires_real_movement() {
    let mut switch = wide_switch();
    switch.event(&down(12.0, 12.0));

    // Wiggle inside the slop: nothing consumed, nothing moves.
    for x in [14.0, 10.0, 16.0, 12.0] {
        let response = switch.event(&mv(x, 12.0));
        assert!(!response.consumed);
    }
    assert_eq!(switch.thumb_offset(), 2.0);
}

// =============================================================================
// Animation Integration Tests
// =============================================================================

#[test]
fn test_reversal_mid_settle_is_continuous() {
    let mut switch = wide_switch();
    switch.set_checked(true);
    switch.tick(Duration::ZERO);
    switch.tick(Duration::from_millis(100));
    let mid = switch.thumb_offset();
    assert_eq!(mid, 40.0);

    // Reverse; the new sweep starts where the old one was interrupted.
    switch.set_checked(false);
    assert_eq!(switch.thumb_offset(), mid);
    switch.tick(Duration::from_millis(116));
    let mut previous = switch.thumb_offset();
    assert!(previous <= mid);
    for ms in (132..=348).step_by(16) {
        switch.tick(Duration::from_millis(ms));
        assert!(switch.thumb_offset() <= previous);
        previous = switch.thumb_offset();
    }
    assert_eq!(switch.thumb_offset(), 2.0);
}

#[test]
fn test_pointer_owns_thumb_during_gesture() {
    let mut switch = wide_switch();
    switch.set_checked(true);
    switch.tick(Duration::ZERO);
    switch.tick(Duration::from_millis(100));
    assert_eq!(switch.thumb_offset(), 40.0);

    // Press the in-flight thumb: frames keep coming, the thumb stays put.
    switch.event(&down(50.0, 12.0));
    for ms in [116, 132, 148] {
        assert!(!switch.tick(Duration::from_millis(ms)));
    }
    assert_eq!(switch.thumb_offset(), 40.0);

    // Dragging takes over entirely; no settle resumes afterwards.
    switch.event(&mv(70.0, 12.0));
    assert!(!switch.is_animating());
}

// =============================================================================
// Paint Integration Tests
// =============================================================================

#[test]
fn test_paint_stream_reflects_drag_position() {
    let mut switch = wide_switch();
    switch.event(&down(12.0, 12.0));
    switch.event(&mv(30.0, 12.0));
    switch.event(&mv(68.0, 12.0));
    assert_eq!(switch.thumb_offset(), 40.0);

    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    let commands = canvas.commands();

    let DrawCommand::Circle { center, .. } = &commands[2] else {
        panic!("expected thumb circle");
    };
    assert_eq!(*center, Point::new(50.0, 12.0));

    let DrawCommand::Rect { color, .. } = &commands[1] else {
        panic!("expected blend overlay");
    };
    assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_paint_stream_serializes() {
    let switch = wide_switch();
    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);

    let json = serde_json::to_string(canvas.commands()).expect("serialize commands");
    let back: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserialize commands");
    assert_eq!(back, canvas.commands());
}

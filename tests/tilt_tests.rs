// Host-side tests for the tilt tracker.
// The main crate is wasm-only, so we include the pure core module directly.

#![allow(dead_code)]
mod tilt {
    include!("../src/core/tilt.rs");
}

use tilt::*;

const EPS: f32 = 1e-6;

#[test]
fn enter_at_center_is_half_half() {
    let mut t = TiltTracker::new();
    t.pointer_enter(100.0, 50.0, 200.0, 100.0);
    assert!(t.is_hovering());
    assert!(!t.is_settled());
    assert!((t.ratio().x - 0.5).abs() < EPS);
    assert!((t.ratio().y - 0.5).abs() < EPS);
}

#[test]
fn corners_clamp_to_unit_range() {
    let mut t = TiltTracker::new();
    t.pointer_enter(0.0, 0.0, 200.0, 100.0);
    assert!((t.ratio().x - 0.0).abs() < EPS);
    assert!((t.ratio().y - 0.0).abs() < EPS);

    // positions outside the box clamp rather than extrapolate
    t.pointer_move(250.0, 130.0, 200.0, 100.0);
    assert!((t.ratio().x - 1.0).abs() < EPS);
    assert!((t.ratio().y - 1.0).abs() < EPS);

    t.pointer_move(-40.0, -10.0, 200.0, 100.0);
    assert!((t.ratio().x - 0.0).abs() < EPS);
    assert!((t.ratio().y - 0.0).abs() < EPS);
}

#[test]
fn quarter_position_maps_linearly() {
    let mut t = TiltTracker::new();
    t.pointer_enter(50.0, 25.0, 200.0, 100.0);
    assert!((t.ratio().x - 0.25).abs() < EPS);
    assert!((t.ratio().y - 0.25).abs() < EPS);
}

#[test]
fn degenerate_box_recenters() {
    let mut t = TiltTracker::new();
    t.pointer_enter(10.0, 10.0, 0.0, 0.0);
    assert!((t.ratio().x - 0.5).abs() < EPS);
    assert!((t.ratio().y - 0.5).abs() < EPS);
}

#[test]
fn leave_resets_tracking_and_ratio() {
    let mut t = TiltTracker::new();
    t.pointer_enter(0.0, 0.0, 200.0, 100.0);
    t.transition_end(SETTLE_PROPERTY);
    assert!(t.is_settled());

    t.pointer_leave();
    assert!(!t.is_hovering());
    assert!(!t.is_settled());
    assert!((t.ratio().x - 0.5).abs() < EPS);
    assert!((t.ratio().y - 0.5).abs() < EPS);
}

#[test]
fn settle_requires_the_transform_property_and_hover() {
    let mut t = TiltTracker::new();

    // transition-end before any hover does nothing
    t.transition_end(SETTLE_PROPERTY);
    assert!(!t.is_settled());

    t.pointer_enter(100.0, 50.0, 200.0, 100.0);

    // other transitioned properties are ignored
    t.transition_end("opacity");
    assert!(!t.is_settled());

    t.transition_end(SETTLE_PROPERTY);
    assert!(t.is_settled());
}

#[test]
fn reenter_clears_settled_until_next_transition_end() {
    let mut t = TiltTracker::new();
    t.pointer_enter(100.0, 50.0, 200.0, 100.0);
    t.transition_end(SETTLE_PROPERTY);
    t.pointer_leave();

    t.pointer_enter(20.0, 20.0, 200.0, 100.0);
    assert!(t.is_hovering());
    assert!(!t.is_settled());
}

#[test]
fn orientation_sample_enters_parallax_immediately() {
    let mut t = TiltTracker::new();
    t.orientation_sample(Some(0.0), Some(0.0));
    assert!(t.is_orientation_active());
    assert!(t.is_hovering());
    assert!(t.is_settled());
    assert!((t.ratio().x - 0.5).abs() < EPS);
    assert!((t.ratio().y - 0.5).abs() < EPS);
}

#[test]
fn orientation_axes_clamp_at_24_degrees() {
    let mut t = TiltTracker::new();
    t.orientation_sample(Some(90.0), Some(-90.0));
    assert!((t.ratio().x - 1.0).abs() < EPS);
    assert!((t.ratio().y - 0.0).abs() < EPS);

    t.orientation_sample(Some(12.0), Some(-12.0));
    assert!((t.ratio().x - 0.75).abs() < EPS);
    assert!((t.ratio().y - 0.25).abs() < EPS);
}

#[test]
fn orientation_sample_requires_both_axes() {
    let mut t = TiltTracker::new();
    t.orientation_sample(Some(10.0), None);
    assert!(!t.is_orientation_active());
    t.orientation_sample(None, Some(10.0));
    assert!(!t.is_orientation_active());
    assert!(!t.is_hovering());
}

#[test]
fn orientation_mode_latches_past_pointer_leave() {
    let mut t = TiltTracker::new();
    t.orientation_sample(Some(12.0), Some(12.0));
    let before = t.ratio();

    t.pointer_leave();
    assert!(t.is_hovering(), "sensor mode ignores pointer leave");
    assert!(t.is_settled());
    assert_eq!(t.ratio(), before);
}

//! Tests for the turn and switch-time primitives.

use super::*;
use approx::assert_relative_eq;

fn p(x: f64, y: f64, z: f64) -> Option<DVec3> {
    Some(DVec3::new(x, y, z))
}

#[test]
fn turn_sign_follows_orientation() {
    // Counter-clockwise in XY
    assert_eq!(turn(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)), Some(1.0));
    // Clockwise in XY
    assert_eq!(turn(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, -1.0, 0.0)), Some(-1.0));
}

#[test]
fn turn_ignores_z() {
    let flat = turn(p(0.0, 0.0, 0.0), p(2.0, 1.0, 0.0), p(3.0, 3.0, 0.0));
    let raised = turn(p(0.0, 0.0, 9.0), p(2.0, 1.0, -4.0), p(3.0, 3.0, 1.5));
    assert_eq!(flat, raised);
}

#[test]
fn turn_with_missing_point_is_none() {
    assert_eq!(turn(None, p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)), None);
    assert_eq!(turn(p(0.0, 0.0, 0.0), None, p(1.0, 0.0, 0.0)), None);
    assert_eq!(turn(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), None), None);
}

#[test]
fn clockwise_turn_requires_negative_area() {
    assert!(clockwise_turn(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, -1.0, 0.0)));
    assert!(!clockwise_turn(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)));
    // Collinear
    assert!(!clockwise_turn(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)));
    assert!(!clockwise_turn(None, p(1.0, 0.0, 0.0), p(1.0, -1.0, 0.0)));
}

#[test]
fn switch_time_is_xz_turn_over_xy_turn() {
    let a = p(0.0, 0.0, 0.0);
    let b = p(1.0, -1.0, 2.0);
    let c = p(3.0, 0.0, 1.0);
    // XY turn: 1 * 1 - (-1) * 2 = 3
    // XZ turn: 1 * (1 - 2) - 2 * 2 = -5
    let time = orientation_switch_time(a, b, c).unwrap();
    assert_relative_eq!(time, -5.0 / 3.0, epsilon = 1e-15);
}

#[test]
fn switch_time_makes_tilted_triple_collinear() {
    let (a, b, c) = (
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(1.5, -0.5, -2.0),
        DVec3::new(2.0, 1.0, 0.5),
    );
    let t = orientation_switch_time(Some(a), Some(b), Some(c)).unwrap();

    // At time t the kinetic hull lives in the (x, z - t * y) plane.
    let tilt = |q: DVec3| DVec3::new(q.x, q.z - t * q.y, 0.0);
    let area = turn(Some(tilt(a)), Some(tilt(b)), Some(tilt(c))).unwrap();
    assert_relative_eq!(area, 0.0, epsilon = 1e-12);
}

#[test]
fn switch_time_none_when_turn_is_zero() {
    let a = p(0.0, 0.0, 0.0);
    let b = p(1.0, 1.0, 5.0);
    let c = p(2.0, 2.0, -1.0);
    assert_eq!(turn(a, b, c), Some(0.0));
    assert_eq!(orientation_switch_time(a, b, c), None);
}

#[test]
fn switch_time_none_when_point_missing() {
    assert_eq!(orientation_switch_time(None, p(1.0, 0.0, 0.0), p(2.0, 1.0, 0.0)), None);
    assert_eq!(orientation_switch_time(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), None), None);
}

// Host-side tests for the pitch/yaw model.

use glam::Vec3;
use pano_core::{OrientationState, PITCH_LIMIT, VELOCITY_SMOOTHING};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn pitch_stays_clamped_after_any_rotation_sequence() {
    let mut s = OrientationState::default();
    let deltas = [0.9, 0.9, 0.9, -3.0, -0.2, 5.0, -10.0, 0.01, 2.5];
    for d in deltas {
        s.rotate(d, d * 0.5, VELOCITY_SMOOTHING);
        s.clamp(PITCH_LIMIT);
        assert!(s.pitch() >= -FRAC_PI_2 && s.pitch() <= FRAC_PI_2);
    }
}

#[test]
fn yaw_is_never_clamped() {
    let mut s = OrientationState::default();
    for _ in 0..10 {
        s.rotate(0.0, 1.0, VELOCITY_SMOOTHING);
        s.clamp(PITCH_LIMIT);
    }
    assert!(approx(s.yaw(), 10.0));
    assert!(s.yaw() > 2.0 * PI);
}

#[test]
fn directional_hold_keeps_the_fast_swipe_then_blends() {
    let mut s = OrientationState::default();
    s.rotate(0.5, 0.0, VELOCITY_SMOOTHING);
    assert!(approx(s.velocity().x, 0.5));

    s.rotate(0.1, 0.0, VELOCITY_SMOOTHING);
    let v = s.velocity().x;
    assert!(v >= 0.1);
    // held at 0.5, then 0.5 + (0.1 - 0.5) * 0.1
    assert!(approx(v, 0.46));
    assert!(!approx(v, 0.1));
}

#[test]
fn directional_hold_works_for_negative_deltas() {
    let mut s = OrientationState::default();
    s.rotate(0.0, -0.4, VELOCITY_SMOOTHING);
    s.rotate(0.0, -0.1, VELOCITY_SMOOTHING);
    // held at -0.4, then -0.4 + (-0.1 + 0.4) * 0.1
    assert!(approx(s.velocity().y, -0.37));
}

#[test]
fn reversing_direction_snaps_past_the_held_velocity() {
    let mut s = OrientationState::default();
    s.rotate(0.3, 0.0, VELOCITY_SMOOTHING);
    s.rotate(-0.2, 0.0, VELOCITY_SMOOTHING);
    // min(0.3, -0.2) = -0.2, blend toward -0.2 leaves it there
    assert!(approx(s.velocity().x, -0.2));
}

#[test]
fn zero_delta_only_blends_toward_rest() {
    let mut s = OrientationState::default();
    s.rotate(0.2, 0.0, VELOCITY_SMOOTHING);
    s.rotate(0.0, 0.0, VELOCITY_SMOOTHING);
    assert!(approx(s.velocity().x, 0.18));
}

#[test]
fn integrate_and_decay_step_by_velocity() {
    let mut s = OrientationState::default();
    s.rotate(0.1, 0.2, VELOCITY_SMOOTHING);
    s.integrate();
    assert!(approx(s.pitch(), 0.2));
    assert!(approx(s.yaw(), 0.4));

    s.decay(2.0);
    assert!(approx(s.velocity().x, 0.05));
    assert!(approx(s.velocity().y, 0.1));
    assert!(approx(s.speed_sq(), 0.05 * 0.05 + 0.1 * 0.1));
}

#[test]
fn quat_composes_yaw_before_pitch() {
    let looking_left = OrientationState::new(0.0, FRAC_PI_2).to_quat() * Vec3::NEG_Z;
    assert!(looking_left.abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPS));

    let looking_up = OrientationState::new(FRAC_PI_4, 0.0).to_quat() * Vec3::NEG_Z;
    assert!(looking_up.y > 0.0);

    // pitch is applied in the yawed frame, so the horizontal part follows yaw
    let up_and_left = OrientationState::new(FRAC_PI_4, FRAC_PI_2).to_quat() * Vec3::NEG_Z;
    assert!(up_and_left.x < 0.0);
    assert!(up_and_left.y > 0.0);
    assert!(up_and_left.z.abs() < EPS);
}

// Host-side tests for the inertia loop and frame scheduling.
// Frames are delivered by hand through a ManualScheduler handle.

use glam::Vec2;
use pano_core::{
    ControlsConfig, FixedSurface, FrameScheduler, LookControls, ManualScheduler, PendingFrame,
    PerspectiveCamera, PointerHandler, TickToken, TouchPoint, REST_VELOCITY_SQ, VELOCITY_DECAY,
};
use std::cell::Cell;
use std::rc::Rc;

type Controls = LookControls<PerspectiveCamera, FixedSurface, ManualScheduler>;

fn setup() -> (Controls, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let controls = LookControls::new(
        PerspectiveCamera::new(800.0 / 600.0),
        FixedSurface::new(800.0, 600.0),
        scheduler.clone(),
    );
    (controls, scheduler)
}

/// Deliver frames until the controls stop asking for more.
fn run_to_rest(controls: &mut Controls, scheduler: &ManualScheduler) -> usize {
    let mut ticks = 0;
    while let Some(token) = scheduler.pop() {
        assert!(controls.on_frame(token));
        ticks += 1;
        assert!(ticks < 10_000, "inertia never settled");
    }
    ticks
}

/// Smallest n with |v|^2 / decay^(2n) <= threshold.
fn expected_ticks(speed_sq: f64) -> usize {
    let decay = VELOCITY_DECAY as f64;
    let rest = REST_VELOCITY_SQ as f64;
    ((speed_sq / rest).ln() / (2.0 * decay.ln())).ceil() as usize
}

#[test]
fn requesting_twice_leaves_one_pending_frame() {
    let (mut c, scheduler) = setup();
    c.request_frame();
    c.request_frame();
    assert_eq!(scheduler.pending(), 1);
    assert!(c.frame_pending());
}

#[test]
fn pending_frame_is_idempotent_and_consumed_on_fire() {
    let mut scheduler = ManualScheduler::new();
    let mut frame = PendingFrame::default();
    assert!(frame.request(&mut scheduler));
    assert!(!frame.request(&mut scheduler));
    assert_eq!(scheduler.pending(), 1);

    let token = scheduler.pop().unwrap();
    assert!(frame.fire(token));
    assert!(!frame.is_scheduled());
    // a token can only fire once
    assert!(!frame.fire(token));

    assert!(frame.request(&mut scheduler));
    assert_ne!(frame.token(), Some(token));
}

#[test]
fn cancel_drops_the_pending_tick() {
    let (mut c, scheduler) = setup();
    c.rotate(0.2, 0.0);
    assert_eq!(scheduler.pending(), 1);
    c.cancel_frame();
    assert_eq!(scheduler.pending(), 0);
    assert!(!c.frame_pending());

    // cancelling again is harmless
    c.cancel_frame();
    assert!(!c.frame_pending());
}

#[test]
fn stale_token_is_ignored() {
    let (mut c, _) = setup();
    let mut other = ManualScheduler::new();
    let stale = other.schedule_tick().unwrap();
    let before = *c.orientation();
    assert!(!c.on_frame(stale));
    assert_eq!(*c.orientation(), before);
}

#[test]
fn inertia_stops_after_closed_form_tick_count() {
    let (mut c, scheduler) = setup();
    c.rotate(0.5, 0.0);
    let speed_sq = c.orientation().speed_sq() as f64;
    assert!((speed_sq - 0.25).abs() < 1e-6);

    let ticks = run_to_rest(&mut c, &scheduler);
    assert_eq!(ticks, expected_ticks(speed_sq));
    assert_eq!(ticks, 111);
    assert!(!c.frame_pending());
    assert!(c.orientation().speed_sq() <= REST_VELOCITY_SQ);
}

#[test]
fn inertia_tick_count_uses_both_axes() {
    let (mut c, scheduler) = setup();
    c.rotate(0.2, -0.5);
    let speed_sq = c.orientation().speed_sq() as f64;
    assert!((speed_sq - 0.29).abs() < 1e-6);
    assert_eq!(run_to_rest(&mut c, &scheduler), expected_ticks(speed_sq));
}

#[test]
fn inertia_keeps_turning_after_release() {
    let (mut c, scheduler) = setup();
    c.rotate(0.0, 0.05);
    let yaw_at_release = c.orientation().yaw();

    let token = scheduler.pop().unwrap();
    c.on_frame(token);
    assert!((c.orientation().yaw() - (yaw_at_release + 0.05)).abs() < 1e-6);
    assert!((c.orientation().velocity().y - 0.05 / VELOCITY_DECAY).abs() < 1e-6);

    run_to_rest(&mut c, &scheduler);
    // total travel is the geometric series of the decaying velocity
    let travel = c.orientation().yaw() - yaw_at_release;
    let limit = 0.05 * VELOCITY_DECAY / (VELOCITY_DECAY - 1.0);
    assert!(travel > 0.05 && travel < limit);
}

#[test]
fn dragging_suppresses_integration_but_not_decay() {
    let (mut c, scheduler) = setup();
    c.on_mouse_down(Vec2::new(100.0, 100.0));
    c.on_mouse_move(Vec2::new(160.0, 100.0));
    let yaw = c.orientation().yaw();
    let v = c.orientation().velocity().y;

    let token = scheduler.pop().unwrap();
    assert!(c.on_frame(token));
    assert!((c.orientation().yaw() - yaw).abs() < 1e-6);
    assert!((c.orientation().velocity().y - v / VELOCITY_DECAY).abs() < 1e-6);
    // still moving, so another frame was requested
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn tracked_touch_suppresses_integration() {
    let (mut c, scheduler) = setup();
    c.rotate(0.0, 0.3);
    c.on_touch_start(&[TouchPoint::new(1, 0.0, 0.0)]);
    let yaw = c.orientation().yaw();

    let token = scheduler.pop().unwrap();
    c.on_frame(token);
    assert!((c.orientation().yaw() - yaw).abs() < 1e-6);
}

#[test]
fn inertia_never_pushes_pitch_past_the_limit() {
    let (mut c, scheduler) = setup();
    c.rotate(1.2, 0.0);
    run_to_rest(&mut c, &scheduler);
    let pitch = c.orientation().pitch();
    assert!(pitch <= std::f32::consts::FRAC_PI_2);
    assert!((pitch - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn custom_config_changes_decay_and_pitch_limit() {
    let scheduler = ManualScheduler::new();
    let config = ControlsConfig {
        decay: 2.0,
        pitch_limit: 0.5,
        ..Default::default()
    };
    let mut c = LookControls::with_config(
        PerspectiveCamera::default(),
        FixedSurface::new(100.0, 100.0),
        scheduler.clone(),
        config,
    );
    c.rotate(1.0, 0.0);
    assert!((c.orientation().pitch() - 0.5).abs() < 1e-6);
    // speed halves each tick: 4^-13 > 1e-8 >= 4^-14
    assert_eq!(run_to_rest(&mut c, &scheduler), 14);
}

/// Refuses requests while `refuse` is set, otherwise queues like the manual one.
#[derive(Clone, Default)]
struct RefusingScheduler {
    inner: ManualScheduler,
    refuse: Rc<Cell<bool>>,
}

impl FrameScheduler for RefusingScheduler {
    fn schedule_tick(&mut self) -> Option<TickToken> {
        if self.refuse.get() {
            return None;
        }
        self.inner.schedule_tick()
    }

    fn cancel_tick(&mut self, token: TickToken) {
        self.inner.cancel_tick(token);
    }
}

#[test]
fn refused_request_leaves_frame_idle() {
    let mut scheduler = RefusingScheduler::default();
    scheduler.refuse.set(true);
    let mut frame = PendingFrame::default();
    assert!(!frame.request(&mut scheduler));
    assert!(!frame.is_scheduled());
    assert_eq!(frame.token(), None);
}

#[test]
fn inertia_recovers_after_a_refused_frame() {
    let scheduler = RefusingScheduler::default();
    let mut c = LookControls::new(
        PerspectiveCamera::default(),
        FixedSurface::new(800.0, 600.0),
        scheduler.clone(),
    );
    scheduler.refuse.set(true);
    c.rotate(0.0, 0.2);
    assert!(!c.frame_pending());
    assert_eq!(scheduler.inner.pending(), 0);

    scheduler.refuse.set(false);
    c.rotate(0.0, 0.01);
    assert!(c.frame_pending());
    let token = scheduler.inner.pop().unwrap();
    assert!(c.on_frame(token));
}

//! Drag-to-look controls with inertia.
//!
//! [`LookControls`] owns the camera orientation. Pointer and touch input
//! rotate it directly; once the drag ends the remaining velocity keeps it
//! turning, one step per animation frame, until the velocity dies out.

use crate::camera::CameraRig;
use crate::constants::{PITCH_LIMIT, REST_VELOCITY_SQ, VELOCITY_DECAY, VELOCITY_SMOOTHING};
use crate::input::{DragSession, TouchPoint};
use crate::orientation::OrientationState;
use crate::scheduler::{FrameScheduler, PendingFrame, TickToken};
use crate::surface::{ListenerHost, ListenerRegistration, PointerHandler, RenderSurface};
use glam::Vec2;

/// Per-instance tuning. Defaults come from [`crate::constants`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsConfig {
    pub pitch_limit: f32,
    pub smoothing: f32,
    pub decay: f32,
    pub rest_speed_sq: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            pitch_limit: PITCH_LIMIT,
            smoothing: VELOCITY_SMOOTHING,
            decay: VELOCITY_DECAY,
            rest_speed_sq: REST_VELOCITY_SQ,
        }
    }
}

pub struct LookControls<C, R, F> {
    camera: C,
    surface: R,
    scheduler: F,
    config: ControlsConfig,
    state: OrientationState,
    session: DragSession,
    frame: PendingFrame,
    registration: Option<ListenerRegistration>,
}

impl<C, R, F> LookControls<C, R, F>
where
    C: CameraRig,
    R: RenderSurface,
    F: FrameScheduler,
{
    pub fn new(camera: C, surface: R, scheduler: F) -> Self {
        Self::with_config(camera, surface, scheduler, ControlsConfig::default())
    }

    pub fn with_config(camera: C, surface: R, scheduler: F, config: ControlsConfig) -> Self {
        Self {
            camera,
            surface,
            scheduler,
            config,
            state: OrientationState::default(),
            session: DragSession::default(),
            frame: PendingFrame::default(),
            registration: None,
        }
    }

    #[inline]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    #[inline]
    pub fn surface(&self) -> &R {
        &self.surface
    }

    #[inline]
    pub fn orientation(&self) -> &OrientationState {
        &self.state
    }

    #[inline]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    #[inline]
    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.registration.is_some()
    }

    #[inline]
    pub fn frame_pending(&self) -> bool {
        self.frame.is_scheduled()
    }

    /// Pixels of drag per radian: the surface height.
    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.surface.size().y.max(1.0)
    }

    /// Attach every pointer and touch listener to `host`.
    pub fn mount<H: ListenerHost + ?Sized>(&mut self, host: &mut H) {
        if self.registration.is_some() {
            log::debug!("[controls] already mounted");
            return;
        }
        let registration = ListenerRegistration::attach_all(host);
        log::debug!("[controls] mounted {} listeners", registration.len());
        self.registration = Some(registration);
    }

    /// Detach everything [`mount`](Self::mount) attached. A pending frame
    /// stays scheduled; call [`cancel_frame`](Self::cancel_frame) to stop it.
    pub fn unmount<H: ListenerHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(registration) = self.registration.take() {
            registration.detach_all(host);
            log::debug!("[controls] unmounted");
        }
    }

    /// Turn the view by the given angles and feed them into the velocity.
    pub fn rotate(&mut self, delta_pitch: f32, delta_yaw: f32) {
        self.state.rotate(delta_pitch, delta_yaw, self.config.smoothing);
        self.apply();
        self.request_frame();
    }

    /// Clamp pitch and push the orientation to the camera.
    pub fn apply(&mut self) {
        self.state.clamp(self.config.pitch_limit);
        self.camera.set_orientation(self.state.to_quat());
    }

    pub fn request_frame(&mut self) {
        self.frame.request(&mut self.scheduler);
    }

    /// Drop the pending frame, if any.
    pub fn cancel_frame(&mut self) {
        self.frame.cancel(&mut self.scheduler);
    }

    /// Deliver a fired frame. Tokens that are not the pending one are
    /// ignored. Returns whether a tick ran.
    pub fn on_frame(&mut self, token: TickToken) -> bool {
        if !self.frame.fire(token) {
            return false;
        }
        self.tick();
        true
    }

    fn tick(&mut self) {
        // direct input already moves the view while dragging
        if !self.session.is_active() {
            self.state.integrate();
            self.apply();
        }

        self.state.decay(self.config.decay);

        if self.state.speed_sq() > self.config.rest_speed_sq {
            self.request_frame();
        } else {
            log::debug!(
                "[controls] inertia settled pitch={:.3} yaw={:.3}",
                self.state.pitch(),
                self.state.yaw()
            );
        }
    }

    fn rotate_by_pixels(&mut self, delta: Vec2) {
        let s = self.sensitivity();
        self.rotate(-delta.y / s, -delta.x / s);
    }
}

impl<C, R, F> PointerHandler for LookControls<C, R, F>
where
    C: CameraRig,
    R: RenderSurface,
    F: FrameScheduler,
{
    fn on_mouse_down(&mut self, position: Vec2) {
        self.session.mouse_down(position);
    }

    fn on_mouse_up(&mut self, position: Vec2) {
        self.session.mouse_up(position);
        self.request_frame();
    }

    fn on_mouse_move(&mut self, position: Vec2) {
        if let Some(delta) = self.session.mouse_move(position) {
            self.rotate_by_pixels(delta);
        }
    }

    fn on_mouse_leave(&mut self, position: Vec2) {
        if let Some(delta) = self.session.mouse_leave(position) {
            self.rotate_by_pixels(delta);
        }
        self.request_frame();
    }

    fn on_touch_start(&mut self, changed: &[TouchPoint]) {
        if self.session.touch_start(changed) {
            log::debug!("[controls] tracking touch {}", changed[0].id);
        }
    }

    fn on_touch_end(&mut self, changed: &[TouchPoint]) {
        for point in changed {
            let Some(delta) = self.session.touch_end(point) else {
                break;
            };
            self.rotate_by_pixels(delta);
            log::debug!("[controls] released touch {}", point.id);
        }
    }

    fn on_touch_move(&mut self, changed: &[TouchPoint]) {
        for point in changed {
            let Some(delta) = self.session.touch_move(point) else {
                break;
            };
            self.rotate_by_pixels(delta);
        }
    }

    fn on_touch_cancel(&mut self, changed: &[TouchPoint]) {
        for point in changed {
            if !self.session.touch_cancel(point) {
                break;
            }
        }
    }
}

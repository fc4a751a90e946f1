//! Look angles and angular velocity for the panorama camera.
//!
//! Angles are kept in radians. `pitch` is the vertical look angle and is
//! clamped to a symmetric limit; `yaw` is the horizontal look angle and
//! wraps freely. Velocity is stored per tick, not per second, because the
//! inertia loop advances once per animation frame.

use glam::{EulerRot, Quat, Vec2};

/// Pitch/yaw angles plus the velocity carried into inertia.
///
/// The fields are private so every caller goes through [`rotate`],
/// [`integrate`] and [`clamp`]; a camera orientation is only ever derived
/// from a clamped state.
///
/// [`rotate`]: OrientationState::rotate
/// [`integrate`]: OrientationState::integrate
/// [`clamp`]: OrientationState::clamp
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationState {
    pitch: f32,
    yaw: f32,
    // x = pitch velocity, y = yaw velocity
    velocity: Vec2,
}

impl OrientationState {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self {
            pitch,
            yaw,
            velocity: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Add a drag delta to the angles and fold it into the velocity.
    ///
    /// Each velocity component first holds the larger magnitude in the
    /// direction of the delta, then blends toward the delta by `smoothing`.
    /// A fast final swipe therefore survives a slow settling one.
    pub fn rotate(&mut self, delta_pitch: f32, delta_yaw: f32, smoothing: f32) {
        self.pitch += delta_pitch;
        self.yaw += delta_yaw;

        self.velocity.x = hold_and_blend(self.velocity.x, delta_pitch, smoothing);
        self.velocity.y = hold_and_blend(self.velocity.y, delta_yaw, smoothing);
    }

    /// Advance the angles by one tick of velocity.
    pub fn integrate(&mut self) {
        self.pitch += self.velocity.x;
        self.yaw += self.velocity.y;
    }

    /// Divide both velocity components by `divisor`.
    pub fn decay(&mut self, divisor: f32) {
        self.velocity /= divisor;
    }

    /// Squared length of the velocity vector.
    #[inline]
    pub fn speed_sq(&self) -> f32 {
        self.velocity.length_squared()
    }

    /// Clamp pitch into `[-limit, limit]`. Yaw is left alone.
    pub fn clamp(&mut self, limit: f32) {
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Camera rotation for the current angles, composed yaw, then pitch,
    /// then a zero roll.
    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

#[inline]
fn hold_and_blend(velocity: f32, delta: f32, smoothing: f32) -> f32 {
    let held = if delta > 0.0 {
        velocity.max(delta)
    } else if delta < 0.0 {
        velocity.min(delta)
    } else {
        velocity
    };
    held + (delta - held) * smoothing
}

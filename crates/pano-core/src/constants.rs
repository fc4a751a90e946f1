use std::f32::consts::FRAC_PI_2;

// Shared look-around and projection tuning used by the web frontend and tests.

// Orientation
pub const PITCH_LIMIT: f32 = FRAC_PI_2; // pitch is clamped to [-limit, limit]; yaw is free

// Drag velocity
pub const VELOCITY_SMOOTHING: f32 = 0.1; // blend factor toward the latest drag delta

// Inertia
pub const VELOCITY_DECAY: f32 = 1.08; // velocity is divided by this every tick
pub const REST_VELOCITY_SQ: f32 = 1e-8; // squared velocity at or below which the loop stops

// Hotspots
pub const NEAR_CENTER_RADIUS: f32 = 0.5; // NDC length under which a hotspot counts as centered

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

use crate::constants::{CAMERA_FOV_Y_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Quat, Vec3};

/// What the controls and the hotspot projector need from a camera.
pub trait CameraRig {
    fn orientation(&self) -> Quat;
    fn set_orientation(&mut self, orientation: Quat);
    /// Project a world-space point to normalized device coordinates.
    fn project(&self, point: Vec3) -> Vec3;

    /// Unit view direction; cameras look down -Z in their own frame.
    fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }
}

/// Right-handed perspective camera sitting at the centre of the panorama
/// sphere. Only its rotation changes while looking around.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub orientation: Quat,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PerspectiveCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Update the aspect ratio after the surface was resized.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation.conjugate())
    }
}

impl CameraRig for PerspectiveCamera {
    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation.normalize();
    }

    fn project(&self, point: Vec3) -> Vec3 {
        (self.projection_matrix() * self.view_matrix()).project_point3(point)
    }
}

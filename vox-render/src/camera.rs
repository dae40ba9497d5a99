use glam::{Mat4, Vec2, Vec3};

use crate::mesh::Bounds;

/// Voxel y is the negated source height, so "up" points along -Y.
pub const WORLD_UP: Vec3 = Vec3::NEG_Y;

const MAX_PITCH: f32 = 89.0_f32 * std::f32::consts::PI / 180.0;
const BOOST: f32 = 4.0;

/// Movement and look deltas gathered from input for one frame.
///
/// Axis values are expected in `[-1, 1]`; `look` is in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    pub forward: f32,
    pub right: f32,
    pub up: f32,
    pub look: Vec2,
    pub boost: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeFlyCamera {
    pub position: Vec3,
    /// Radians around the up axis; 0 looks along +X.
    pub yaw: f32,
    /// Radians, positive looks up.
    pub pitch: f32,
    pub fov_y_rad: f32,
    pub near: f32,
    pub far: f32,
    /// Units per second.
    pub speed: f32,
    /// Radians per pixel.
    pub sensitivity: f32,
}

impl Default for FreeFlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: -std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            fov_y_rad: 60.0_f32.to_radians(),
            near: 0.1,
            far: 10_000.0,
            speed: 50.0,
            sensitivity: 0.002,
        }
    }
}

impl FreeFlyCamera {
    /// Looks down at `bounds` from far enough away to keep it in view.
    pub fn framing(bounds: Bounds) -> Self {
        let mut camera = Self {
            pitch: -30.0_f32.to_radians(),
            ..Self::default()
        };
        let radius = bounds.radius().max(1.0);
        let distance = radius / (camera.fov_y_rad * 0.5).tan() * 1.2;
        camera.position = bounds.center() - camera.forward() * distance;
        camera.far = camera.far.max((distance + radius) * 2.0);
        camera.speed = (radius * 0.5).max(camera.speed);
        camera
    }

    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(cos_yaw * cos_pitch, 0.0, sin_yaw * cos_pitch) + WORLD_UP * sin_pitch
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(WORLD_UP).normalize_or_zero()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), WORLD_UP)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_rad, aspect_ratio, self.near, self.far)
    }

    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }

    pub fn apply(&mut self, input: &CameraInput, dt: f32) {
        self.yaw += input.look.x * self.sensitivity;
        self.pitch = (self.pitch - input.look.y * self.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);

        let direction =
            self.forward() * input.forward + self.right() * input.right + WORLD_UP * input.up;
        let speed = if input.boost { self.speed * BOOST } else { self.speed };
        self.position += direction * speed * dt;
    }
}

use cgmath::{perspective, Deg, InnerSpace, Matrix4, Vector3};

use crate::gfx::geometry::constants::camera;
use crate::gfx::scene::point::Point3;

use super::camera_utils::{Camera, OPENGL_TO_WGPU_MATRIX};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub position: Point3,
    pub target: Point3,
    /// Units per second
    pub speed: f32,
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: camera::INITIAL_POSITION,
            target: camera::INITIAL_TARGET,
            speed: camera::BASE_SPEED,
            fov_degrees: camera::FOV_DEGREES,
            znear: camera::Z_NEAR,
            zfar: camera::Z_FAR,
        }
    }
}

impl CameraSettings {
    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    pub fn with_target(mut self, target: Point3) -> Self {
        self.target = target;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMotion {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free camera that translates eye and target together; it never turns.
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    settings: CameraSettings,
}

impl FlyCamera {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            eye: settings.position.into(),
            target: settings.target.into(),
            up: Vector3::unit_y(),
            settings,
        }
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn move_by(&mut self, motion: CameraMotion, dt: f32) {
        let step = self.settings.speed * dt;
        let forward = self.target - self.eye;
        if forward.magnitude2() == 0.0 {
            return;
        }

        let direction = match motion {
            CameraMotion::Forward => forward.normalize(),
            CameraMotion::Backward => -forward.normalize(),
            CameraMotion::Left => self.up.cross(forward).normalize(),
            CameraMotion::Right => forward.cross(self.up).normalize(),
            CameraMotion::Up => Vector3::unit_y(),
            CameraMotion::Down => -Vector3::unit_y(),
        };

        self.eye += direction * step;
        self.target += direction * step;
    }

    pub fn reset(&mut self) {
        self.eye = self.settings.position.into();
        self.target = self.settings.target.into();
        log::info!("Camera reset to {}", self.settings.position);
    }

    pub fn position(&self) -> Point3 {
        self.eye.into()
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Camera for FlyCamera {
    fn build_view_projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        let eye = cgmath::Point3::new(self.eye.x, self.eye.y, self.eye.z);
        let target = cgmath::Point3::new(self.target.x, self.target.y, self.target.z);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj = OPENGL_TO_WGPU_MATRIX
            * perspective(
                Deg(self.settings.fov_degrees),
                aspect,
                self.settings.znear,
                self.settings.zfar,
            );
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cgmath::Vector4;

    #[test]
    fn test_starts_at_reference_position() {
        let camera = FlyCamera::default();
        assert_eq!(camera.position(), Point3::new(0.0, 6.0, 8.0));
        assert_eq!(camera.settings().fov_degrees, 45.0);
    }

    #[test]
    fn test_moves_eye_and_target_together() {
        let mut camera = FlyCamera::default();
        let offset = camera.target - camera.eye;

        camera.move_by(CameraMotion::Forward, 0.5);
        camera.move_by(CameraMotion::Right, 0.2);
        camera.move_by(CameraMotion::Up, 1.0);
        let after = camera.target - camera.eye;
        assert_abs_diff_eq!(after.x, offset.x, epsilon = 0.001);
        assert_abs_diff_eq!(after.y, offset.y, epsilon = 0.001);
        assert_abs_diff_eq!(after.z, offset.z, epsilon = 0.001);

        // speed 5: right is +X for a camera looking down -Z
        assert_abs_diff_eq!(camera.eye.x, 1.0, epsilon = 0.001);

        camera.reset();
        assert_eq!(camera.position(), Point3::new(0.0, 6.0, 8.0));
    }

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = FlyCamera::default();
        let clip = camera.build_view_projection_matrix(1.5) * Vector4::new(0.0, 1.0, -2.0, 1.0);
        assert_abs_diff_eq!(clip.x / clip.w, 0.0, epsilon = 0.001);
        assert_abs_diff_eq!(clip.y / clip.w, 0.0, epsilon = 0.001);
        let depth = clip.z / clip.w;
        assert!((0.0..=1.0).contains(&depth));
    }
}

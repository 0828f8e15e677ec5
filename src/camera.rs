use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::types::CameraUniform;

/// Perspective camera looking from `position` towards `target`.
///
/// The projection matrix is cached; after changing `aspect`, `fov_y_degrees`,
/// `near` or `far` call [`PerspectiveCamera::update_projection_matrix`].
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 2.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::new(config.fov_y_degrees, aspect, config.near, config.far);
        camera.position = Vec3::from_array(config.position);
        camera.target = Vec3::from_array(config.target);
        camera
    }

    /// Set all projection parameters and rebuild the projection
    pub fn configure_projection(&mut self, aspect: f32, fov_y_degrees: f32, near: f32, far: f32) {
        self.aspect = aspect;
        self.fov_y_degrees = fov_y_degrees;
        self.near = near;
        self.far = far;
        self.update_projection_matrix();
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn to_uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let view_proj = self.projection * view;
        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            inv_view_proj: view_proj.inverse().to_cols_array_2d(),
            position: self.position.to_array(),
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_config_defaults() {
        let camera = PerspectiveCamera::from_config(&CameraConfig::default(), 4.0 / 3.0);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(camera.fov_y_degrees, 75.0);
        assert_eq!(camera.aspect, 4.0 / 3.0);
    }

    #[test]
    fn test_configure_projection_rebuilds_matrix() {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let before = camera.projection_matrix();

        camera.configure_projection(2.0, 75.0, 0.1, 100.0);

        assert_ne!(before, camera.projection_matrix());
        assert_eq!(
            camera.projection_matrix(),
            Mat4::perspective_rh(75f32.to_radians(), 2.0, 0.1, 100.0)
        );
    }

    #[test]
    fn test_aspect_change_needs_update() {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let before = camera.projection_matrix();

        camera.aspect = 2.0;
        assert_eq!(before, camera.projection_matrix());

        camera.update_projection_matrix();
        assert_ne!(before, camera.projection_matrix());
    }

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = PerspectiveCamera::new(75.0, 1.5, 0.1, 100.0);
        let clip = camera.view_projection() * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_forward_points_at_target() {
        let camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        assert_eq!(camera.forward(), Vec3::new(0.0, 0.0, -1.0));
    }
}

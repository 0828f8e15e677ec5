//! Orbit camera controls.
//!
//! Left drag orbits around the target, right or middle drag (or a modified
//! left drag) pans, and the wheel dollies. With damping enabled each update
//! applies only a fraction of the pending motion, so the camera keeps gliding
//! for a while after the input stops.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::config::ControlsConfig;
use crate::core::controller::{Button, Controller};
use crate::math::Spherical;

/// Smallest squared camera movement reported as a change
const CHANGE_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    config: ControlsConfig,
    /// Pending rotation; only `phi` and `theta` are used
    rotate_delta: Spherical,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitControls {
    pub fn new(config: &ControlsConfig, camera: &PerspectiveCamera) -> Self {
        Self {
            target: camera.target,
            config: config.clone(),
            rotate_delta: Spherical::default(),
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    /// Multiplier for one wheel line
    pub fn zoom_scale(&self) -> f32 {
        0.95f32.powf(self.config.zoom_speed)
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.rotate_delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.rotate_delta.phi -= angle;
    }

    /// Move the camera towards the target by `factor` (< 1 moves closer)
    pub fn dolly(&mut self, factor: f32) {
        if factor > 0.0 && factor.is_finite() {
            self.scale *= factor;
        }
    }

    /// Shift the target in screen space by a pointer motion in logical pixels
    pub fn pan(&mut self, dx: f32, dy: f32, camera: &PerspectiveCamera, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }

        let offset = camera.position - self.target;
        // Half the visible height at the target plane
        let target_distance = offset.length() * (camera.fov_y_degrees.to_radians() * 0.5).tan();

        let forward = camera.forward();
        let right = forward.cross(camera.up).normalize_or_zero();
        let screen_up = right.cross(forward);

        let left = 2.0 * dx * target_distance / viewport_height;
        let up = 2.0 * dy * target_distance / viewport_height;
        self.pan_offset += right * -left + screen_up * up;
    }

    /// Turn the pointer and wheel motion accumulated by `controller` into pending motion
    pub fn apply_input(
        &mut self,
        controller: &impl Controller,
        camera: &PerspectiveCamera,
        viewport_height: f32,
    ) {
        let (dx, dy) = controller.pointer_delta();
        let modified = controller.is_down(Button::Shift) || controller.is_down(Button::Control);
        let left = controller.is_down(Button::MouseLeft);

        if (dx != 0.0 || dy != 0.0) && viewport_height > 0.0 {
            if left && !modified {
                let speed = self.config.rotate_speed;
                self.rotate_left(TAU * dx * speed / viewport_height);
                self.rotate_up(TAU * dy * speed / viewport_height);
            } else if left
                || controller.is_down(Button::MouseRight)
                || controller.is_down(Button::MouseMiddle)
            {
                let speed = self.config.pan_speed;
                self.pan(dx * speed, dy * speed, camera, viewport_height);
            }
        }

        let lines = controller.scroll_delta();
        if lines != 0.0 {
            // Scrolling away from the user zooms in.
            self.dolly(self.zoom_scale().powf(lines));
        }
    }

    /// Apply pending motion to `camera`. Returns true when the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let last_position = camera.position;
        let last_target = self.target;

        let mut spherical = Spherical::from_vec3(camera.position - self.target);

        let damping = self.config.enable_damping;
        let factor = self.config.damping_factor;
        if damping {
            spherical.theta += self.rotate_delta.theta * factor;
            spherical.phi += self.rotate_delta.phi * factor;
        } else {
            spherical.theta += self.rotate_delta.theta;
            spherical.phi += self.rotate_delta.phi;
        }
        spherical.make_safe();

        spherical.radius *= self.scale;
        spherical.radius = spherical.radius.max(self.config.min_distance);
        if let Some(max) = self.config.max_distance {
            spherical.radius = spherical.radius.min(max);
        }

        if damping {
            self.target += self.pan_offset * factor;
        } else {
            self.target += self.pan_offset;
        }

        camera.position = self.target + spherical.to_vec3();
        camera.target = self.target;

        if damping {
            self.rotate_delta.theta *= 1.0 - factor;
            self.rotate_delta.phi *= 1.0 - factor;
            self.pan_offset *= 1.0 - factor;
        } else {
            self.rotate_delta = Spherical::default();
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        camera.position.distance_squared(last_position) > CHANGE_EPSILON
            || self.target.distance_squared(last_target) > CHANGE_EPSILON
    }
}

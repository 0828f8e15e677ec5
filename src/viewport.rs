//! Viewport tracking.
//!
//! Keeps the camera aspect ratio and the render surface size in step with the
//! host's viewport.

use crate::camera::PerspectiveCamera;
use crate::core::window::ViewportSource;
use crate::traits::renderer::RenderSurface;

/// Upper bound on the drawing-buffer density
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Clamp a device pixel ratio to `(0, MAX_PIXEL_RATIO]`; unusable values map to 1
pub fn clamp_pixel_ratio(device_pixel_ratio: f64) -> f32 {
    let ratio = device_pixel_ratio as f32;
    if ratio.is_finite() && ratio > 0.0 {
        ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn read(source: &(impl ViewportSource + ?Sized)) -> Self {
        let dims = source.dimensions();
        Self {
            width: dims.width,
            height: dims.height,
            pixel_ratio: clamp_pixel_ratio(source.device_pixel_ratio()),
        }
    }

    /// Width over height, or `None` while either dimension is zero
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }

    /// Drawing-buffer size in physical pixels, never smaller than 1x1
    pub fn physical_size(&self) -> (u32, u32) {
        let scale = |v: u32| ((v as f32 * self.pixel_ratio).round() as u32).max(1);
        (scale(self.width), scale(self.height))
    }
}

/// Owns the viewport state and pushes it to the camera and render surface
#[derive(Debug, Clone)]
pub struct ViewportManager {
    viewport: Viewport,
}

impl ViewportManager {
    /// Read the current viewport and configure `camera` and `surface` to match
    pub fn new<S>(
        source: &(impl ViewportSource + ?Sized),
        camera: &mut PerspectiveCamera,
        surface: &mut S,
    ) -> Self
    where
        S: RenderSurface + ?Sized,
    {
        let manager = Self {
            viewport: Viewport::read(source),
        };
        manager.apply(camera, surface);
        manager
    }

    /// Host notification that the viewport dimensions may have changed
    pub fn on_resize<S>(
        &mut self,
        source: &(impl ViewportSource + ?Sized),
        camera: &mut PerspectiveCamera,
        surface: &mut S,
    ) where
        S: RenderSurface + ?Sized,
    {
        self.viewport = Viewport::read(source);
        log::debug!(
            "Viewport resized to {}x{} @{}",
            self.viewport.width,
            self.viewport.height,
            self.viewport.pixel_ratio
        );
        self.apply(camera, surface);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn apply<S>(&self, camera: &mut PerspectiveCamera, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        // A minimized window reports zero; keep the last usable projection.
        let Some(aspect) = self.viewport.aspect() else {
            log::debug!("Ignoring zero-sized viewport");
            return;
        };

        camera.aspect = aspect;
        camera.update_projection_matrix();
        surface.configure_output_size(
            self.viewport.width,
            self.viewport.height,
            self.viewport.pixel_ratio,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::window::StaticViewport;

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<(u32, u32, f32)>,
    }

    impl RenderSurface for RecordingSurface {
        fn configure_output_size(&mut self, width: u32, height: u32, pixel_ratio: f32) {
            self.calls.push((width, height, pixel_ratio));
        }
    }

    #[test]
    fn test_clamp_pixel_ratio() {
        assert_eq!(clamp_pixel_ratio(1.0), 1.0);
        assert_eq!(clamp_pixel_ratio(1.5), 1.5);
        assert_eq!(clamp_pixel_ratio(3.0), 2.0);
        assert_eq!(clamp_pixel_ratio(0.0), 1.0);
        assert_eq!(clamp_pixel_ratio(f64::NAN), 1.0);
    }

    #[test]
    fn test_physical_size() {
        let viewport = Viewport { width: 800, height: 600, pixel_ratio: 1.5 };
        assert_eq!(viewport.physical_size(), (1200, 900));

        let empty = Viewport { width: 0, height: 0, pixel_ratio: 2.0 };
        assert_eq!(empty.physical_size(), (1, 1));
    }

    #[test]
    fn test_new_configures_camera_and_surface() {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let mut surface = RecordingSurface::default();

        let manager = ViewportManager::new(&StaticViewport::new(800, 600, 3.0), &mut camera, &mut surface);

        assert_eq!(camera.aspect, 800.0 / 600.0);
        assert_eq!(surface.calls, vec![(800, 600, 2.0)]);
        assert_eq!(manager.viewport().pixel_ratio, 2.0);
    }

    #[test]
    fn test_zero_height_keeps_projection() {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let mut surface = RecordingSurface::default();
        let mut manager =
            ViewportManager::new(&StaticViewport::new(800, 600, 1.0), &mut camera, &mut surface);
        let projection = camera.projection_matrix();

        manager.on_resize(&StaticViewport::new(800, 0, 1.0), &mut camera, &mut surface);

        assert_eq!(camera.projection_matrix(), projection);
        assert_eq!(surface.calls.len(), 1);
        assert_eq!(manager.viewport().height, 0);
    }
}

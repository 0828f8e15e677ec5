use crate::camera::PerspectiveCamera;
use crate::error::RenderError;
use crate::loaders::TextureImage;
use crate::material::TextureKey;
use crate::scene::Scene;

/// Output surface whose size follows the viewport
pub trait RenderSurface {
    /// Resize the drawing buffer to `width x height` logical pixels at `pixel_ratio`
    fn configure_output_size(&mut self, width: u32, height: u32, pixel_ratio: f32);
}

/// Scene renderer - draws a scene through a camera
pub trait SceneRenderer: RenderSurface {
    /// Draw one frame
    fn render_frame(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError>;

    /// Make a decoded image available to materials and backgrounds that name `key`
    fn upload_texture(&mut self, key: &TextureKey, image: &TextureImage);
}

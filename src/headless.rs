//! Window-less driver.
//!
//! Runs a sketch for a fixed number of simulated frames against a renderer
//! that records what it was asked to draw.

use std::fmt;

use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::config::SketchConfig;
use crate::core::frame::FixedStepFrames;
use crate::core::window::StaticViewport;
use crate::error::RenderError;
use crate::loaders::TextureImage;
use crate::material::TextureKey;
use crate::renderer::FrameBatches;
use crate::scene::{Scene, ShapeKind};
use crate::sketch::Sketch;
use crate::traits::renderer::{RenderSurface, SceneRenderer};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub shapes: usize,
    pub draw_calls: usize,
    pub camera_position: Vec3,
    pub aspect: f32,
}

/// Renderer that keeps a log instead of drawing
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub output_sizes: Vec<(u32, u32, f32)>,
    pub frames: Vec<RecordedFrame>,
    pub uploads: Vec<(TextureKey, u32, u32)>,
}

impl RenderSurface for RecordingRenderer {
    fn configure_output_size(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        self.output_sizes.push((width, height, pixel_ratio));
    }
}

impl SceneRenderer for RecordingRenderer {
    fn render_frame(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        self.frames.push(RecordedFrame {
            shapes: scene.len(),
            draw_calls: FrameBatches::build(scene).draw_calls(),
            camera_position: camera.position,
            aspect: camera.aspect,
        });
        Ok(())
    }

    fn upload_texture(&mut self, key: &TextureKey, image: &TextureImage) {
        self.uploads.push((key.clone(), image.width, image.height));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSummary {
    pub layout: &'static str,
    pub frames_rendered: u64,
    /// Elapsed time of the last rendered frame
    pub final_elapsed: f32,
    pub shape_counts: Vec<(ShapeKind, usize)>,
    pub animated: usize,
    pub textures_loaded: usize,
    pub textures_failed: usize,
}

impl fmt::Display for HeadlessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} layout: {} frames, t={:.3}s,",
            self.layout, self.frames_rendered, self.final_elapsed
        )?;
        for (kind, count) in &self.shape_counts {
            write!(f, " {} {}", count, kind.name())?;
        }
        write!(
            f,
            ", {} animated, textures {} loaded / {} failed",
            self.animated, self.textures_loaded, self.textures_failed
        )
    }
}

/// Run `frames` frames `step` seconds apart with a [`RecordingRenderer`]
pub fn run_headless(config: &SketchConfig, frames: u64, step: f32) -> Result<HeadlessSummary, RenderError> {
    let mut renderer = RecordingRenderer::default();
    run_headless_with(config, frames, step, &mut renderer)
}

/// Same as [`run_headless`] against a caller-supplied renderer
pub fn run_headless_with<R>(
    config: &SketchConfig,
    frames: u64,
    step: f32,
    renderer: &mut R,
) -> Result<HeadlessSummary, RenderError>
where
    R: SceneRenderer + ?Sized,
{
    let source = StaticViewport::new(config.window.width, config.window.height, 1.0);
    let mut sketch = Sketch::new(config.clone(), &source, renderer);
    sketch.finish_loading(renderer);

    let mut final_elapsed = 0.0;
    for info in FixedStepFrames::new(step) {
        if info.number >= frames {
            break;
        }
        sketch.frame(info.time, renderer)?;
        final_elapsed = info.time;
    }

    let summary = HeadlessSummary {
        layout: config.layout.name(),
        frames_rendered: sketch.frames_rendered(),
        final_elapsed,
        shape_counts: ShapeKind::ALL
            .iter()
            .map(|&kind| (kind, sketch.scene().count_of(kind)))
            .collect(),
        animated: sketch.animation().spins().len(),
        textures_loaded: sketch.assets().loaded(),
        textures_failed: sketch.assets().failed(),
    };

    log::info!("{}", summary);
    Ok(summary)
}

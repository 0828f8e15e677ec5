//! One running sketch: scene, camera, controls and animation driven frame by frame.

use crate::animation::AnimationLoop;
use crate::camera::PerspectiveCamera;
use crate::config::SketchConfig;
use crate::controls::OrbitControls;
use crate::core::controller::Controller;
use crate::core::window::ViewportSource;
use crate::error::RenderError;
use crate::loaders::{AssetRequests, LoadReport};
use crate::scene::Scene;
use crate::scenes::compose_scene;
use crate::traits::renderer::SceneRenderer;
use crate::viewport::{Viewport, ViewportManager};

pub struct Sketch {
    config: SketchConfig,
    scene: Scene,
    camera: PerspectiveCamera,
    controls: OrbitControls,
    animation: AnimationLoop,
    viewport: ViewportManager,
    assets: AssetRequests,
    frames: u64,
}

impl Sketch {
    /// Compose the scene, size camera and surface to `source`, and start texture loads
    pub fn new<R>(config: SketchConfig, source: &(impl ViewportSource + ?Sized), renderer: &mut R) -> Self
    where
        R: SceneRenderer + ?Sized,
    {
        let scene = compose_scene(&config);
        let mut camera = PerspectiveCamera::from_config(&config.camera, 1.0);
        let viewport = ViewportManager::new(source, &mut camera, renderer);
        let controls = OrbitControls::new(&config.controls, &camera);
        let animation = AnimationLoop::for_scene(&scene, &config);
        let assets = AssetRequests::start(scene.texture_keys());

        log::info!(
            "Sketch ready: {} layout, {} shapes, {} animated",
            config.layout.name(),
            scene.len(),
            animation.spins().len()
        );

        Self {
            config,
            scene,
            camera,
            controls,
            animation,
            viewport,
            assets,
            frames: 0,
        }
    }

    pub fn on_resize<R>(&mut self, source: &(impl ViewportSource + ?Sized), renderer: &mut R)
    where
        R: SceneRenderer + ?Sized,
    {
        self.viewport.on_resize(source, &mut self.camera, renderer);
    }

    /// Feed pointer and wheel motion gathered since the last frame to the orbit controls
    pub fn handle_input(&mut self, controller: &impl Controller) {
        let height = self.viewport.viewport().height as f32;
        self.controls.apply_input(controller, &self.camera, height);
    }

    /// Advance to `elapsed` seconds and draw.
    ///
    /// Order per frame: settle finished texture loads, rotate the animated
    /// shapes, let the orbit controls move the camera, render.
    pub fn frame<R>(&mut self, elapsed: f32, renderer: &mut R) -> Result<(), RenderError>
    where
        R: SceneRenderer + ?Sized,
    {
        self.assets.poll(renderer);
        self.animation.tick(elapsed, &mut self.scene);
        self.controls.update(&mut self.camera);
        renderer.render_frame(&self.scene, &self.camera)?;
        self.frames += 1;
        Ok(())
    }

    /// Block until every texture load has settled
    pub fn finish_loading<R>(&mut self, renderer: &mut R) -> Vec<LoadReport>
    where
        R: SceneRenderer + ?Sized,
    {
        self.assets.finish(renderer)
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    pub fn assets(&self) -> &AssetRequests {
        &self.assets
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}

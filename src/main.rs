use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use shape_sketches::cli::Cli;
use shape_sketches::core::{Button, Clock, Controller, WinitController};
use shape_sketches::error::RenderError;
use shape_sketches::renderer::WgpuRenderer;
use shape_sketches::window::Window;
use shape_sketches::{run_headless, Sketch, SketchConfig};

struct App {
    config: SketchConfig,
    window: Option<Window>,
    renderer: Option<WgpuRenderer>,
    sketch: Option<Sketch>,
    controller: WinitController,
    clock: Clock,
    failure: Option<RenderError>,
}

impl App {
    fn new(config: SketchConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            sketch: None,
            controller: WinitController::new(),
            clock: Clock::new(),
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RenderError) {
        log::error!("{}", error);
        self.failure = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = {
            let (Some(renderer), Some(sketch)) = (&mut self.renderer, &mut self.sketch) else {
                return;
            };

            sketch.handle_input(&self.controller);
            self.controller.reset_deltas();
            sketch.frame(self.clock.elapsed(), renderer)
        };

        match result {
            Ok(()) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::debug!("Surface lost or outdated; reconfiguring");
                if let Some(renderer) = &mut self.renderer {
                    renderer.reconfigure();
                }
            }
            Err(RenderError::Surface(wgpu::SurfaceError::Timeout)) => {
                log::debug!("Surface timeout; skipping frame");
            }
            Err(e) => self.fail(event_loop, e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let settings = self.config.window.clone();
        let window = match event_loop.create_window(
            WinitWindow::default_attributes()
                .with_title(settings.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(settings.width, settings.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, RenderError::Setup(format!("Failed to create window: {}", e)));
                return;
            }
        };

        let mut renderer = match pollster::block_on(WgpuRenderer::new(window.clone(), settings.clear_color)) {
            Ok(r) => r,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        let window = Window::new(window);
        self.controller.set_scale_factor(window.inner().scale_factor());
        let sketch = Sketch::new(self.config.clone(), &window, &mut renderer);
        self.clock.reset();

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.sketch = Some(sketch);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);

        if self.controller.is_down(Button::Escape) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(window), Some(renderer), Some(sketch)) =
                    (&self.window, &mut self.renderer, &mut self.sketch)
                {
                    sketch.on_resize(window, renderer);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let config = cli.resolve_config().context("Invalid sketch configuration")?;

    if cli.headless {
        let summary = run_headless(&config, cli.frames, cli.step).context("Headless run failed")?;
        println!("{}", summary);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!("Drag to orbit, right-drag to pan, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.failure {
        return Err(e).context("Render loop stopped");
    }
    Ok(())
}

pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod core;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod loaders;
pub mod material;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod sketch;
pub mod traits;
pub mod types;
pub mod viewport;
pub mod window;

pub use config::SketchConfig;
pub use headless::{run_headless, HeadlessSummary};
pub use scenes::compose_scene;
pub use sketch::Sketch;

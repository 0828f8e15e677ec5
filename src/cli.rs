// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{LayoutConfig, SketchConfig};
use crate::error::ConfigError;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    Fixed,
    Ring,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "shape-sketches")]
#[command(about = "Primitive shapes with orbit controls", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Layout preset, replacing the layout from the file
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Ring positions per side (ring layout)
    #[arg(long)]
    pub count: Option<usize>,

    /// Ring radius (ring layout)
    #[arg(long)]
    pub radius: Option<f32>,

    /// Equirectangular environment map shown behind the scene
    #[arg(long)]
    pub environment: Option<PathBuf>,

    /// Run without a window and print a summary
    #[arg(long)]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 60)]
    pub frames: u64,

    /// Seconds between simulated frames in headless mode
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub step: f32,

    /// Log filter, e.g. "debug" or "shape_sketches=trace"; overrides RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}

impl Cli {
    /// Configuration from the file (or the chosen preset) with flag overrides applied
    pub fn resolve_config(&self) -> Result<SketchConfig, ConfigError> {
        let mut config = match (&self.config, self.layout) {
            (Some(path), _) => SketchConfig::load(path)?,
            (None, Some(LayoutArg::Ring)) => SketchConfig::ring(),
            (None, _) => SketchConfig::fixed(),
        };

        if self.config.is_some() {
            match self.layout {
                Some(LayoutArg::Fixed) if !matches!(config.layout, LayoutConfig::Fixed { .. }) => {
                    config.layout = LayoutConfig::fixed();
                }
                Some(LayoutArg::Ring) if !matches!(config.layout, LayoutConfig::Ring { .. }) => {
                    config.layout = LayoutConfig::ring();
                }
                _ => {}
            }
        }

        if let LayoutConfig::Ring { count, radius, .. } = &mut config.layout {
            if let Some(n) = self.count {
                *count = n;
            }
            if let Some(r) = self.radius {
                *radius = r;
            }
        } else if self.count.is_some() || self.radius.is_some() {
            log::warn!("--count and --radius only apply to the ring layout");
        }

        if let Some(environment) = &self.environment {
            config.assets.environment = Some(environment.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

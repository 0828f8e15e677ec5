mod common;
mod fixed;
mod ring;

pub use common::{apply_background, MaterialPool};
pub use fixed::FixedLayout;
pub use ring::{ring_height, ring_positions, RingLayout};

use crate::config::{LayoutConfig, SketchConfig};
use crate::scene::Scene;
use crate::traits::scene::SceneComposer;

/// Composer for the configured layout
pub fn composer_for(layout: &LayoutConfig) -> Box<dyn SceneComposer> {
    match *layout {
        LayoutConfig::Fixed { offset, shared_material } => {
            Box::new(FixedLayout::new(offset, shared_material))
        }
        LayoutConfig::Ring { count, radius, .. } => Box::new(RingLayout::new(count, radius)),
    }
}

/// Build the scene described by `config`
pub fn compose_scene(config: &SketchConfig) -> Scene {
    let composer = composer_for(&config.layout);
    log::debug!("Composing {} layout", composer.name());
    composer.compose(config)
}

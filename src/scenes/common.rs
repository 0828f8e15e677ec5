use std::sync::Arc;

use crate::config::{AssetConfig, MaterialStyle, SketchConfig};
use crate::material::{Material, TextureKey};
use crate::math::{golden_hue, hsv_to_rgb};
use crate::scene::{Background, Scene};

const POOL_SATURATION: f32 = 0.6;
const POOL_VALUE: f32 = 0.9;

/// Fixed set of materials reused cyclically by the instances of one kind
#[derive(Debug, Clone)]
pub struct MaterialPool {
    materials: Vec<Arc<Material>>,
}

impl MaterialPool {
    /// Build `size` materials of `style`.
    ///
    /// A single flat material uses `base_color`; larger flat pools sweep hues.
    /// Textured and matcap pools cycle through the configured paths and fall
    /// back to flat colors when none are configured.
    pub fn build(size: usize, style: MaterialStyle, assets: &AssetConfig, base_color: [f32; 3]) -> Self {
        let size = size.max(1);
        let paths = match style {
            MaterialStyle::Flat => &[][..],
            MaterialStyle::Textured => assets.texture_maps.as_slice(),
            MaterialStyle::Matcap => assets.matcaps.as_slice(),
        };

        if style != MaterialStyle::Flat && paths.is_empty() {
            log::warn!("{:?} materials requested without image paths, using flat colors", style);
        }

        let materials = (0..size)
            .map(|i| match (style, paths.is_empty()) {
                (MaterialStyle::Textured, false) => {
                    Material::textured(TextureKey::new(&paths[i % paths.len()]))
                }
                (MaterialStyle::Matcap, false) => {
                    Material::matcap(TextureKey::new(&paths[i % paths.len()]))
                }
                _ if size == 1 => Material::flat(base_color),
                _ => Material::flat(hsv_to_rgb(golden_hue(i), POOL_SATURATION, POOL_VALUE)),
            })
            .collect();

        Self { materials }
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Material for instance `index`, wrapping around the pool
    pub fn get(&self, index: usize) -> Arc<Material> {
        Arc::clone(&self.materials[index % self.materials.len()])
    }
}

/// Apply the configured environment map, or the clear color
pub fn apply_background(scene: &mut Scene, config: &SketchConfig) {
    let background = match &config.assets.environment {
        Some(path) => Background::Environment(TextureKey::new(path)),
        None => Background::Color(config.window.clear_color),
    };
    scene.set_background(background);
}

//! Materials shared between shape instances.
//!
//! A material never holds a GPU handle. Textured and matcap materials name
//! their image through a [`TextureKey`]; the renderer resolves the key once the
//! image has been loaded and uses a white fallback until then.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identity of a texture asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureKey(PathBuf);

impl TextureKey {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// How a fragment gets its color; the value is what the shader switches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    Flat = 0,
    Textured = 1,
    Matcap = 2,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Flat { color: [f32; 3] },
    Textured { map: TextureKey, tint: [f32; 3] },
    Matcap { matcap: TextureKey },
}

impl Material {
    pub fn flat(color: [f32; 3]) -> Arc<Self> {
        Arc::new(Material::Flat { color })
    }

    pub fn textured(map: TextureKey) -> Arc<Self> {
        Arc::new(Material::Textured {
            map,
            tint: [1.0, 1.0, 1.0],
        })
    }

    pub fn matcap(matcap: TextureKey) -> Arc<Self> {
        Arc::new(Material::Matcap { matcap })
    }

    pub fn shading_mode(&self) -> ShadingMode {
        match self {
            Material::Flat { .. } => ShadingMode::Flat,
            Material::Textured { .. } => ShadingMode::Textured,
            Material::Matcap { .. } => ShadingMode::Matcap,
        }
    }

    /// Texture sampled by this material, if any
    pub fn texture(&self) -> Option<&TextureKey> {
        match self {
            Material::Flat { .. } => None,
            Material::Textured { map, .. } => Some(map),
            Material::Matcap { matcap } => Some(matcap),
        }
    }

    /// Color multiplied with the sampled texel (or used alone for flat materials)
    pub fn color(&self) -> [f32; 3] {
        match self {
            Material::Flat { color } => *color,
            Material::Textured { tint, .. } => *tint,
            Material::Matcap { .. } => [1.0, 1.0, 1.0],
        }
    }
}

use glam::Vec3;

use super::common::{apply_background, MaterialPool};
use crate::config::SketchConfig;
use crate::scene::{Scene, Shape, ShapeKind};
use crate::traits::scene::SceneComposer;

/// Plane, sphere and torus in a row along x
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLayout {
    pub offset: f32,
    pub shared_material: bool,
}

impl FixedLayout {
    pub fn new(offset: f32, shared_material: bool) -> Self {
        Self { offset, shared_material }
    }

    pub fn position_of(&self, kind: ShapeKind) -> Vec3 {
        match kind {
            ShapeKind::Plane => Vec3::new(self.offset, 0.0, 0.0),
            ShapeKind::Sphere => Vec3::ZERO,
            ShapeKind::Torus => Vec3::new(-self.offset, 0.0, 0.0),
        }
    }
}

impl SceneComposer for FixedLayout {
    fn compose(&self, config: &SketchConfig) -> Scene {
        let materials = &config.materials;
        let pool_for = |style| MaterialPool::build(1, style, &config.assets, materials.base_color);

        let shared = self.shared_material.then(|| pool_for(materials.sphere));

        let mut scene = Scene::new();
        for kind in [ShapeKind::Sphere, ShapeKind::Plane, ShapeKind::Torus] {
            let material = match &shared {
                Some(pool) => pool.get(0),
                None => {
                    let style = match kind {
                        ShapeKind::Plane => materials.plane,
                        ShapeKind::Sphere => materials.sphere,
                        ShapeKind::Torus => materials.torus,
                    };
                    pool_for(style).get(0)
                }
            };
            scene.add(Shape::new(kind, self.position_of(kind), material));
        }

        apply_background(&mut scene, config);
        log::info!("Composed fixed layout: {} shapes", scene.len());
        scene
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3};

use super::common::{apply_background, MaterialPool};
use crate::config::SketchConfig;
use crate::scene::{Scene, Shape, ShapeKind};
use crate::traits::scene::SceneComposer;

/// Positions on a circle of radius `radius` passing through the origin.
///
/// Returns `2 * count` points in the XZ plane: indices `0..count` are the
/// forward samples `x = r cos(PI/2 - i PI/count)`,
/// `z = -(r - r sin(PI/2 - i PI/count))`, and indices `count..2 * count` mirror
/// them across the z axis (same z, negated x).
pub fn ring_positions(count: usize, radius: f32) -> Vec<Vec2> {
    let forward: Vec<Vec2> = (0..count)
        .map(|i| {
            let angle = FRAC_PI_2 - i as f32 * PI / count as f32;
            Vec2::new(radius * angle.cos(), -(radius - radius * angle.sin()))
        })
        .collect();

    let mirrored: Vec<Vec2> = forward.iter().map(|p| Vec2::new(-p.x, p.y)).collect();

    forward.into_iter().chain(mirrored).collect()
}

/// Height of each kind's ring so the three rings stack instead of overlapping
pub fn ring_height(kind: ShapeKind) -> f32 {
    match kind {
        ShapeKind::Plane => 1.5,
        ShapeKind::Sphere => 0.0,
        ShapeKind::Torus => -1.5,
    }
}

/// `2 * count` instances of every kind placed on a ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub count: usize,
    pub radius: f32,
}

impl RingLayout {
    pub fn new(count: usize, radius: f32) -> Self {
        Self { count, radius }
    }
}

impl SceneComposer for RingLayout {
    fn compose(&self, config: &SketchConfig) -> Scene {
        let positions = ring_positions(self.count, self.radius);
        let mut scene = Scene::new();

        for kind in ShapeKind::ALL {
            let style = match kind {
                ShapeKind::Plane => config.materials.plane,
                ShapeKind::Sphere => config.materials.sphere,
                ShapeKind::Torus => config.materials.torus,
            };
            // The pool holds one material per ring index; an instance and its
            // mirror share it.
            let pool = MaterialPool::build(
                self.count,
                style,
                &config.assets,
                config.materials.base_color,
            );
            let y = ring_height(kind);

            for (j, p) in positions.iter().enumerate() {
                scene.add(Shape::new(kind, Vec3::new(p.x, y, p.y), pool.get(j)));
            }

            log::debug!(
                "Ring of {} {} instances ({:?} materials, pool of {})",
                positions.len(),
                kind.name(),
                style,
                pool.len()
            );
        }

        apply_background(&mut scene, config);
        log::info!(
            "Composed ring layout: {} shapes (count={}, radius={})",
            scene.len(),
            self.count,
            self.radius
        );
        scene
    }

    fn name(&self) -> &str {
        "ring"
    }
}

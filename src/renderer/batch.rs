use std::collections::BTreeMap;
use std::ops::Range;

use crate::material::TextureKey;
use crate::scene::{Scene, ShapeKind};
use crate::types::InstanceRaw;

/// Instances sharing one mesh and one texture, drawn with a single call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub kind: ShapeKind,
    pub texture: Option<TextureKey>,
    pub instances: Range<u32>,
}

/// Instance data grouped so each batch occupies a contiguous range
#[derive(Debug, Clone, Default)]
pub struct FrameBatches {
    pub instances: Vec<InstanceRaw>,
    pub batches: Vec<DrawBatch>,
}

impl FrameBatches {
    pub fn build(scene: &Scene) -> Self {
        let mut groups: BTreeMap<(ShapeKind, Option<TextureKey>), Vec<InstanceRaw>> = BTreeMap::new();
        for shape in scene.shapes() {
            groups
                .entry((shape.kind, shape.material.texture().cloned()))
                .or_default()
                .push(InstanceRaw::from_shape(shape));
        }

        let mut frame = Self {
            instances: Vec::with_capacity(scene.len()),
            batches: Vec::with_capacity(groups.len()),
        };

        for ((kind, texture), instances) in groups {
            let start = frame.instances.len() as u32;
            frame.instances.extend(instances);
            frame.batches.push(DrawBatch {
                kind,
                texture,
                instances: start..frame.instances.len() as u32,
            });
        }

        frame
    }

    pub fn draw_calls(&self) -> usize {
        self.batches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::scene::Shape;
    use glam::Vec3;

    #[test]
    fn test_groups_by_kind_and_texture() {
        let wood = Material::textured(TextureKey::new("wood.png"));
        let flat = Material::flat([1.0, 0.0, 0.0]);

        let mut scene = Scene::new();
        scene.add(Shape::new(ShapeKind::Torus, Vec3::ZERO, flat.clone()));
        scene.add(Shape::new(ShapeKind::Plane, Vec3::X, wood.clone()));
        scene.add(Shape::new(ShapeKind::Torus, Vec3::Y, flat));
        scene.add(Shape::new(ShapeKind::Plane, Vec3::Z, wood));

        let frame = FrameBatches::build(&scene);

        assert_eq!(frame.instances.len(), 4);
        assert_eq!(frame.draw_calls(), 2);
        assert_eq!(frame.batches[0].kind, ShapeKind::Plane);
        assert_eq!(frame.batches[0].texture, Some(TextureKey::new("wood.png")));
        assert_eq!(frame.batches[0].instances, 0..2);
        assert_eq!(frame.batches[1].kind, ShapeKind::Torus);
        assert_eq!(frame.batches[1].texture, None);
        assert_eq!(frame.batches[1].instances, 2..4);
    }

    #[test]
    fn test_empty_scene() {
        let frame = FrameBatches::build(&Scene::new());
        assert!(frame.instances.is_empty());
        assert_eq!(frame.draw_calls(), 0);
    }
}

use std::sync::Arc;

use shape_sketches::config::{LayoutConfig, MaterialStyle, SketchConfig};
use shape_sketches::scene::{ShapeId, ShapeKind};
use shape_sketches::scenes::{compose_scene, ring_positions};

#[cfg(test)]
mod ring_composition_tests {
    use super::*;

    #[test]
    fn test_twenty_per_side_gives_forty_of_each_kind() {
        let scene = compose_scene(&SketchConfig::ring());

        assert_eq!(scene.count_of(ShapeKind::Plane), 40);
        assert_eq!(scene.count_of(ShapeKind::Sphere), 40);
        assert_eq!(scene.count_of(ShapeKind::Torus), 40);
        assert_eq!(scene.len(), 120);
    }

    #[test]
    fn test_shapes_start_unrotated() {
        let scene = compose_scene(&SketchConfig::ring());
        assert!(scene.shapes().iter().all(|s| s.rotation == glam::Vec3::ZERO));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let config = SketchConfig::ring();
        let a = compose_scene(&config);
        let b = compose_scene(&config);

        assert_eq!(a.len(), b.len());
        for (x, y) in a.shapes().iter().zip(b.shapes()) {
            assert_eq!(x.kind, y.kind);
            assert_eq!(x.position, y.position);
            // Fresh instances every call
            assert!(!Arc::ptr_eq(&x.material, &y.material));
        }
    }

    #[test]
    fn test_mirror_shares_material() {
        let scene = compose_scene(&SketchConfig::ring());

        for kind in ShapeKind::ALL {
            let ids: Vec<ShapeId> = scene.ids_of(kind).collect();
            assert_eq!(ids.len(), 40);
            for i in 0..20 {
                let forward = scene.shape(ids[i]).unwrap();
                let mirror = scene.shape(ids[i + 20]).unwrap();
                assert!(
                    Arc::ptr_eq(&forward.material, &mirror.material),
                    "{} {} should share its material with {}",
                    kind.name(),
                    i,
                    i + 20
                );
            }
        }
    }

    #[test]
    fn test_neighbours_get_distinct_materials() {
        let scene = compose_scene(&SketchConfig::ring());
        let ids: Vec<ShapeId> = scene.ids_of(ShapeKind::Sphere).collect();

        let first = &scene.shape(ids[0]).unwrap().material;
        let second = &scene.shape(ids[1]).unwrap().material;
        assert!(!Arc::ptr_eq(first, second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_positions_follow_ring() {
        let scene = compose_scene(&SketchConfig::ring());
        let samples = ring_positions(20, 10.0);

        let planes: Vec<ShapeId> = scene.ids_of(ShapeKind::Plane).collect();
        for (id, sample) in planes.iter().zip(&samples) {
            let position = scene.shape(*id).unwrap().position;
            assert_eq!(position.x, sample.x);
            assert_eq!(position.z, sample.y);
            assert_eq!(position.y, 1.5);
        }
    }

    #[test]
    fn test_single_position_ring() {
        let mut config = SketchConfig::ring();
        config.layout = LayoutConfig::Ring { count: 1, radius: 3.0, animated_per_kind: None };
        let scene = compose_scene(&config);

        assert_eq!(scene.count_of(ShapeKind::Torus), 2);
        let ids: Vec<ShapeId> = scene.ids_of(ShapeKind::Torus).collect();
        assert!(Arc::ptr_eq(
            &scene.shape(ids[0]).unwrap().material,
            &scene.shape(ids[1]).unwrap().material
        ));
    }

    #[test]
    fn test_textured_materials_reference_configured_maps() {
        let mut config = SketchConfig::ring();
        config.materials.plane = MaterialStyle::Textured;
        config.assets.texture_maps = vec!["textures/door.jpg".into(), "textures/wood.png".into()];

        let scene = compose_scene(&config);
        let keys = scene.texture_keys();

        assert_eq!(keys.len(), 2);
        assert!(scene
            .ids_of(ShapeKind::Plane)
            .all(|id| scene.shape(id).unwrap().material.texture().is_some()));
    }
}

#[cfg(test)]
mod fixed_composition_tests {
    use super::*;

    #[test]
    fn test_three_shapes_in_a_row() {
        let scene = compose_scene(&SketchConfig::fixed());

        assert_eq!(scene.len(), 3);
        for kind in ShapeKind::ALL {
            assert_eq!(scene.count_of(kind), 1);
        }

        let x_of = |kind| {
            let id = scene.ids_of(kind).next().unwrap();
            scene.shape(id).unwrap().position.x
        };
        assert_eq!(x_of(ShapeKind::Plane), 1.5);
        assert_eq!(x_of(ShapeKind::Sphere), 0.0);
        assert_eq!(x_of(ShapeKind::Torus), -1.5);
    }

    #[test]
    fn test_shared_material() {
        let scene = compose_scene(&SketchConfig::fixed());
        let shapes = scene.shapes();
        assert!(Arc::ptr_eq(&shapes[0].material, &shapes[1].material));
        assert!(Arc::ptr_eq(&shapes[1].material, &shapes[2].material));
    }
}

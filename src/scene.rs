use std::sync::Arc;

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::material::{Material, TextureKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Plane,
    Sphere,
    Torus,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Plane, ShapeKind::Sphere, ShapeKind::Torus];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Torus => "torus",
        }
    }
}

/// One placed mesh. Only `rotation` changes after composition.
#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ShapeKind,
    pub position: Vec3,
    /// XYZ Euler angles in radians
    pub rotation: Vec3,
    pub material: Arc<Material>,
}

impl Shape {
    pub fn new(kind: ShapeKind, position: Vec3, material: Arc<Material>) -> Self {
        Self {
            kind,
            position,
            rotation: Vec3::ZERO,
            material,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// Index of a shape within its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Color([f32; 3]),
    /// Equirectangular image, drawn once it has been loaded
    Environment(TextureKey),
}

impl Default for Background {
    fn default() -> Self {
        Background::Color([0.0, 0.0, 0.0])
    }
}

/// Renderable shape collection
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    background: Background,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: Shape) -> ShapeId {
        self.shapes.push(shape);
        ShapeId(self.shapes.len() - 1)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind == kind).count()
    }

    /// Ids of every shape of `kind`, in insertion order
    pub fn ids_of(&self, kind: ShapeKind) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.kind == kind)
            .map(|(i, _)| ShapeId(i))
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Every texture the scene samples, including the background, sorted and deduplicated
    pub fn texture_keys(&self) -> Vec<TextureKey> {
        let mut keys: Vec<TextureKey> = self
            .shapes
            .iter()
            .filter_map(|s| s.material.texture().cloned())
            .collect();
        if let Background::Environment(key) = &self.background {
            keys.push(key.clone());
        }
        keys.sort();
        keys.dedup();
        keys
    }
}

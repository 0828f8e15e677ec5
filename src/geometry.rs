//! CPU tessellation of the primitive shapes.
//!
//! Vertex order and index winding match the usual plane / UV-sphere / torus
//! generators so textures and matcaps land where artists expect them.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::scene::ShapeKind;

/// Interleaved vertex uploaded as-is to the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Tessellation parameters for one shape kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryParams {
    Plane {
        width: f32,
        height: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

impl GeometryParams {
    pub fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Plane => GeometryParams::Plane {
                width: 1.0,
                height: 1.0,
            },
            ShapeKind::Sphere => GeometryParams::Sphere {
                radius: 0.5,
                width_segments: 16,
                height_segments: 16,
            },
            ShapeKind::Torus => GeometryParams::Torus {
                radius: 0.3,
                tube: 0.2,
                radial_segments: 16,
                tubular_segments: 34,
            },
        }
    }

    pub fn build(&self) -> MeshData {
        match *self {
            GeometryParams::Plane { width, height } => plane(width, height),
            GeometryParams::Sphere {
                radius,
                width_segments,
                height_segments,
            } => sphere(radius, width_segments, height_segments),
            GeometryParams::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(radius, tube, radial_segments, tubular_segments),
        }
    }
}

/// Mesh used for every instance of `kind`
pub fn mesh_for(kind: ShapeKind) -> MeshData {
    GeometryParams::for_kind(kind).build()
}

/// Single quad in the XY plane facing +Z
pub fn plane(width: f32, height: f32) -> MeshData {
    let hw = width * 0.5;
    let hh = height * 0.5;

    let corners = [
        (Vec3::new(-hw, hh, 0.0), Vec2::new(0.0, 1.0)),
        (Vec3::new(hw, hh, 0.0), Vec2::new(1.0, 1.0)),
        (Vec3::new(-hw, -hh, 0.0), Vec2::new(0.0, 0.0)),
        (Vec3::new(hw, -hh, 0.0), Vec2::new(1.0, 0.0)),
    ];

    MeshData {
        vertices: corners
            .iter()
            .map(|&(p, uv)| Vertex::new(p, Vec3::Z, uv))
            .collect(),
        indices: vec![0, 2, 1, 2, 3, 1],
    }
}

/// UV sphere; the pole rows emit a single triangle per segment
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let row = ws + 1;

    let vertices = (0..=hs)
        .flat_map(|iy| {
            (0..=ws).map(move |ix| {
                let u = ix as f32 / ws as f32;
                let v = iy as f32 / hs as f32;

                let position = Vec3::new(
                    -radius * (u * TAU).cos() * (v * PI).sin(),
                    radius * (v * PI).cos(),
                    radius * (u * TAU).sin() * (v * PI).sin(),
                );
                let normal = position.normalize_or_zero();
                Vertex::new(position, normal, Vec2::new(u, 1.0 - v))
            })
        })
        .collect();

    let mut indices = Vec::with_capacity((6 * ws * (hs - 1)) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Torus around the Z axis
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let rs = radial_segments.max(3);
    let ts = tubular_segments.max(3);
    let row = ts + 1;

    let vertices = (0..=rs)
        .flat_map(|j| {
            (0..=ts).map(move |i| {
                let u = i as f32 / ts as f32 * TAU;
                let v = j as f32 / rs as f32 * TAU;

                let position = Vec3::new(
                    (radius + tube * v.cos()) * u.cos(),
                    (radius + tube * v.cos()) * u.sin(),
                    tube * v.sin(),
                );
                let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
                let normal = (position - center).normalize_or_zero();
                Vertex::new(
                    position,
                    normal,
                    Vec2::new(i as f32 / ts as f32, j as f32 / rs as f32),
                )
            })
        })
        .collect();

    let mut indices = Vec::with_capacity((6 * rs * ts) as usize);
    for j in 1..=rs {
        for i in 1..=ts {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData { vertices, indices }
}

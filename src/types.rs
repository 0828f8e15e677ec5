use crate::scene::Shape;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub inv_view_proj: [[f32; 4]; 4], // Background pass reconstructs view rays
    pub position: [f32; 3],
    pub _pad: f32,
}

/// Per-shape instance data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub shading: u32, // ShadingMode discriminant
    pub _pad: [u32; 3],
}

impl InstanceRaw {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Uint32,
    ];

    pub fn from_shape(shape: &Shape) -> Self {
        let [r, g, b] = shape.material.color();
        Self {
            model: shape.model_matrix().to_cols_array_2d(),
            color: [r, g, b, 1.0],
            shading: shape.material.shading_mode() as u32,
            _pad: [0; 3],
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, TextureKey};
    use crate::scene::ShapeKind;
    use glam::Vec3;

    #[test]
    fn test_gpu_struct_sizes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 208);
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 96);
    }

    #[test]
    fn test_instance_from_shape() {
        let shape = Shape::new(
            ShapeKind::Sphere,
            Vec3::new(1.0, 2.0, 3.0),
            Material::matcap(TextureKey::new("m.png")),
        );
        let raw = InstanceRaw::from_shape(&shape);

        assert_eq!(raw.shading, 2);
        assert_eq!(raw.color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(raw.model[3], [1.0, 2.0, 3.0, 1.0]);
    }
}

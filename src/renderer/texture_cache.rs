use std::collections::HashMap;

use crate::loaders::TextureImage;
use crate::material::TextureKey;

struct CachedTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Uploaded textures by key, with a white 1x1 stand-in for anything missing
pub struct TextureCache {
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    fallback: CachedTexture,
    textures: HashMap<TextureKey, CachedTexture>,
    max_dimension: u32,
}

impl TextureCache {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
            label: Some("texture_bind_group_layout"),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let white = TextureImage::solid_color([255, 255, 255, 255]);
        let fallback = Self::create(device, queue, &layout, &sampler, "Fallback Texture", &white);

        Self {
            layout,
            sampler,
            fallback,
            textures: HashMap::new(),
            max_dimension: device.limits().max_texture_dimension_2d,
        }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Upload `image` under `key`, replacing any previous upload
    pub fn insert(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        key: &TextureKey,
        image: &TextureImage,
    ) {
        if image.width == 0 || image.height == 0 {
            log::warn!("{} is empty; keeping fallback texture", key);
            return;
        }
        if image.width > self.max_dimension || image.height > self.max_dimension {
            log::warn!(
                "{} is {}x{}, larger than the device limit {}; keeping fallback texture",
                key,
                image.width,
                image.height,
                self.max_dimension
            );
            return;
        }

        let label = key.to_string();
        let cached = Self::create(device, queue, &self.layout, &self.sampler, &label, image);
        self.textures.insert(key.clone(), cached);
    }

    pub fn contains(&self, key: &TextureKey) -> bool {
        self.textures.contains_key(key)
    }

    /// Bind group for `key`, or the fallback while it is missing
    pub fn bind_group(&self, key: Option<&TextureKey>) -> &wgpu::BindGroup {
        key.and_then(|k| self.textures.get(k))
            .map(|cached| &cached.bind_group)
            .unwrap_or(&self.fallback.bind_group)
    }

    fn create(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        label: &str,
        image: &TextureImage,
    ) -> CachedTexture {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            &image.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.bytes_per_row()),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
            label: Some(label),
        });

        CachedTexture {
            _texture: texture,
            bind_group,
        }
    }
}

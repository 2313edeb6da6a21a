use std::collections::HashMap;

use crate::render::{check_upload, TextureError, TextureFilter};
use crate::scene::TextureId;

struct GpuTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Sampled textures keyed by the ids handed out to callers.
///
/// Ids are issued monotonically from 1 and never reused. A 1x1 white
/// texture backs untextured draws.
pub(super) struct TextureRegistry {
    layout: wgpu::BindGroupLayout,
    linear: wgpu::Sampler,
    nearest: wgpu::Sampler,
    entries: HashMap<TextureId, GpuTexture>,
    next_id: u32,
    white: GpuTexture,
}

impl TextureRegistry {
    pub(super) fn new(device: &wgpu::Device, queue: &wgpu::Queue, layout: wgpu::BindGroupLayout) -> Self {
        let linear = device.create_sampler(&sampler_descriptor(TextureFilter::Linear));
        let nearest = device.create_sampler(&sampler_descriptor(TextureFilter::Nearest));
        let white = create_texture(device, queue, &layout, &linear, 1, 1, &[255; 4], "veneer white texture");

        Self {
            layout,
            linear,
            nearest,
            entries: HashMap::new(),
            next_id: 1,
            white,
        }
    }

    pub(super) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        pixels: &[u8],
        filter: TextureFilter,
    ) -> Result<TextureId, TextureError> {
        check_upload(width, height, pixels, device.limits().max_texture_dimension_2d)?;

        let sampler = match filter {
            TextureFilter::Linear => &self.linear,
            TextureFilter::Nearest => &self.nearest,
        };
        let tex = create_texture(device, queue, &self.layout, sampler, width, height, pixels, "veneer texture");
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, tex);
        log::debug!("uploaded texture {id:?} ({width}x{height}, {filter:?})");
        Ok(id)
    }

    pub(super) fn release(&mut self, id: TextureId) {
        if self.entries.remove(&id).is_some() {
            log::debug!("released texture {id:?}");
        }
    }

    /// Bind group for `id`, or `None` when it was never uploaded or released.
    #[inline]
    pub(super) fn bind_group(&self, id: TextureId) -> Option<&wgpu::BindGroup> {
        self.entries.get(&id).map(|t| &t.bind_group)
    }

    #[inline]
    pub(super) fn white(&self) -> &wgpu::BindGroup {
        &self.white.bind_group
    }
}

fn sampler_descriptor(filter: TextureFilter) -> wgpu::SamplerDescriptor<'static> {
    let (label, address, mode) = match filter {
        TextureFilter::Linear => ("veneer linear sampler", wgpu::AddressMode::Repeat, wgpu::FilterMode::Linear),
        TextureFilter::Nearest => ("veneer atlas sampler", wgpu::AddressMode::ClampToEdge, wgpu::FilterMode::Nearest),
    };
    wgpu::SamplerDescriptor {
        label: Some(label),
        address_mode_u: address,
        address_mode_v: address,
        address_mode_w: address,
        mag_filter: mode,
        min_filter: mode,
        mipmap_filter: wgpu::MipmapFilterMode::Nearest,
        ..Default::default()
    }
}

#[allow(clippy::too_many_arguments)]
fn create_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    width: u32,
    height: u32,
    pixels: &[u8],
    label: &str,
) -> GpuTexture {
    let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
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
    });

    GpuTexture { _texture: texture, bind_group }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atlas_sampler_does_not_blend_neighbouring_cells() {
        let d = sampler_descriptor(TextureFilter::Nearest);
        assert_eq!(d.mag_filter, wgpu::FilterMode::Nearest);
        assert_eq!(d.min_filter, wgpu::FilterMode::Nearest);
        assert_eq!(d.address_mode_u, wgpu::AddressMode::ClampToEdge);
        assert_eq!(d.address_mode_v, wgpu::AddressMode::ClampToEdge);
    }

    #[test]
    fn image_sampler_is_linear() {
        let d = sampler_descriptor(TextureFilter::Linear);
        assert_eq!(d.mag_filter, wgpu::FilterMode::Linear);
        assert_eq!(d.address_mode_u, wgpu::AddressMode::Repeat);
    }
}

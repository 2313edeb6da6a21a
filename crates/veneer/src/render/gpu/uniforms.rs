use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::paint::Color;

// ── camera ────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct CameraUniform {
    pub proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub(super) fn new(proj: Mat4) -> Self {
        Self { proj: proj.to_cols_array_2d() }
    }
}

// ── per-draw ──────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct DrawUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

impl DrawUniform {
    pub(super) fn new(model: Mat4, color: Color, textured: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.to_array(),
            params: [if textured { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

/// Rounds `size` up to the device's dynamic-offset alignment.
pub(super) fn aligned_stride(size: u64, alignment: u64) -> u64 {
    let a = alignment.max(1);
    size.div_ceil(a) * a
}

/// Per-draw uniforms packed at aligned offsets in one buffer.
///
/// The buffer grows to the largest frame seen and never shrinks.
pub(super) struct DrawUniformBuffer {
    stride: u64,
    staging: Vec<u8>,
    buffer: Option<wgpu::Buffer>,
    capacity: u64,
}

impl DrawUniformBuffer {
    pub(super) fn new(alignment: u64) -> Self {
        Self {
            stride: aligned_stride(std::mem::size_of::<DrawUniform>() as u64, alignment),
            staging: Vec::new(),
            buffer: None,
            capacity: 0,
        }
    }

    pub(super) fn clear(&mut self) {
        self.staging.clear();
    }

    /// Appends one entry and returns its dynamic offset.
    pub(super) fn push(&mut self, u: &DrawUniform) -> u32 {
        let offset = self.staging.len();
        self.staging.extend_from_slice(bytemuck::bytes_of(u));
        self.staging.resize(offset + self.stride as usize, 0);
        offset as u32
    }

    /// Ensures capacity and uploads staged entries. Returns `true` when the
    /// buffer was recreated and bind groups referencing it must be rebuilt.
    pub(super) fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) -> bool {
        let needed = (self.staging.len() as u64).max(self.stride);
        let mut recreated = false;
        if self.buffer.is_none() || needed > self.capacity {
            let new_cap = needed.next_power_of_two().max(self.stride * 64);
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("veneer draw ubo"),
                size: new_cap,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = new_cap;
            recreated = true;
        }
        if let (Some(buf), false) = (self.buffer.as_ref(), self.staging.is_empty()) {
            queue.write_buffer(buf, 0, &self.staging);
        }
        recreated
    }

    pub(super) fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_rounds_up_to_alignment() {
        assert_eq!(aligned_stride(96, 256), 256);
        assert_eq!(aligned_stride(256, 256), 256);
        assert_eq!(aligned_stride(257, 256), 512);
        assert_eq!(aligned_stride(96, 0), 96);
    }

    #[test]
    fn draw_uniform_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<DrawUniform>(), 96);
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }

    #[test]
    fn push_returns_aligned_offsets() {
        let mut b = DrawUniformBuffer::new(256);
        let u = DrawUniform::new(Mat4::IDENTITY, Color::WHITE, false);
        assert_eq!(b.push(&u), 0);
        assert_eq!(b.push(&u), 256);
        assert_eq!(b.staging.len(), 512);
        b.clear();
        assert_eq!(b.push(&u), 0);
    }
}

use wgpu::util::DeviceExt;

use crate::mesh::{self, Topology, Vertex};
use crate::scene::PrimitiveKind;

/// GPU objects owned for one primitive kind.
///
/// Rect, OutlineRect, Circle and Image upload a static unit mesh once;
/// Line, Polygon and Text draw from the frame's dynamic vertex buffer.
pub(super) struct KindBindings {
    static_mesh: Option<(wgpu::Buffer, u32)>,
}

impl KindBindings {
    /// Static vertices of `kind`, already expanded to a native topology.
    fn static_vertices(kind: PrimitiveKind, circle_segments: u32) -> Option<Vec<Vertex>> {
        let authored = match kind {
            PrimitiveKind::Rect | PrimitiveKind::Image => mesh::unit_quad().to_vec(),
            PrimitiveKind::OutlineRect => mesh::outline_quad().to_vec(),
            PrimitiveKind::Circle => mesh::circle(circle_segments),
            PrimitiveKind::Line | PrimitiveKind::Polygon | PrimitiveKind::Text => return None,
        };
        Some(match kind.topology() {
            Topology::TriangleFan => mesh::fan_to_list(&authored),
            Topology::LineLoop => mesh::close_loop(&authored),
            Topology::LineList | Topology::TriangleList => authored,
        })
    }

    fn new(device: &wgpu::Device, kind: PrimitiveKind, circle_segments: u32) -> Self {
        let static_mesh = Self::static_vertices(kind, circle_segments).map(|verts| {
            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("veneer static mesh vbo"),
                contents: bytemuck::cast_slice(&verts),
                usage: wgpu::BufferUsages::VERTEX,
            });
            (buffer, verts.len() as u32)
        });
        Self { static_mesh }
    }

    /// One binding set per kind, indexed by [`PrimitiveKind::index`].
    pub(super) fn create_all(device: &wgpu::Device, circle_segments: u32) -> Vec<KindBindings> {
        PrimitiveKind::FLUSH_ORDER
            .iter()
            .map(|k| KindBindings::new(device, *k, circle_segments))
            .collect()
    }

    #[inline]
    pub(super) fn static_mesh(&self) -> Option<(&wgpu::Buffer, u32)> {
        self.static_mesh.as_ref().map(|(b, n)| (b, *n))
    }
}

/// Grow-only vertex buffer for meshes regenerated every frame.
#[derive(Default)]
pub(super) struct DynamicVertexBuffer {
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
}

impl DynamicVertexBuffer {
    pub(super) fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, verts: &[Vertex]) {
        if verts.is_empty() {
            return;
        }
        if self.buffer.is_none() || verts.len() > self.capacity {
            let new_cap = verts.len().next_power_of_two().max(1024);
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("veneer dynamic vbo"),
                size: (new_cap * std::mem::size_of::<Vertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = new_cap;
        }
        if let Some(buf) = self.buffer.as_ref() {
            queue.write_buffer(buf, 0, bytemuck::cast_slice(verts));
        }
    }

    #[inline]
    pub(super) fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::static_vertex_count;

    #[test]
    fn static_meshes_match_expanded_counts() {
        for kind in PrimitiveKind::FLUSH_ORDER {
            let verts = KindBindings::static_vertices(kind, 90);
            let expected = static_vertex_count(kind, 90).map(|n| kind.topology().expanded_len(n));
            assert_eq!(verts.map(|v| v.len() as u32), expected, "{kind:?}");
        }
    }
}

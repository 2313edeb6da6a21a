use glam::Mat4;

use crate::coords::Viewport;
use crate::mesh::{Topology, Vertex};
use crate::paint::Color;
use crate::scene::{PrimitiveKind, TextureId};

/// Where a draw call reads its vertices from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MeshSource {
    /// The kind's static unit mesh, uploaded once by the sink.
    Static(PrimitiveKind),
    /// A range of [`FramePlan::vertices`].
    Dynamic { first: u32, count: u32 },
}

/// One GPU draw, fully resolved on the CPU.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub kind: PrimitiveKind,
    pub topology: Topology,
    pub mesh: MeshSource,
    /// `false` requests wireframe rasterization of triangle topologies.
    pub fill: bool,
    pub model: Mat4,
    pub color: Color,
    /// Sampled texture for Image/Text; `None` disables texturing.
    pub texture: Option<TextureId>,
}

/// The CPU result of one flush, handed to a [`FrameSink`](super::FrameSink).
///
/// Draw calls are in submission order: grouped by kind in flush order, then
/// by insertion order within a kind.
#[derive(Debug, Clone)]
pub struct FramePlan {
    pub viewport: Viewport,
    pub projection: Mat4,
    pub clear_color: Color,
    /// Regenerated meshes of every Line, Polygon and Text draw this frame.
    pub vertices: Vec<Vertex>,
    pub draws: Vec<DrawCall>,
}

impl Default for FramePlan {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            projection: Mat4::IDENTITY,
            clear_color: Color::TRANSPARENT,
            vertices: Vec::new(),
            draws: Vec::new(),
        }
    }
}

impl FramePlan {
    /// Resets lengths, keeping capacity.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.draws.clear();
    }

    /// Appends `verts` and returns the range they occupy.
    pub fn push_vertices(&mut self, verts: &[Vertex]) -> MeshSource {
        let first = self.vertices.len() as u32;
        self.vertices.extend_from_slice(verts);
        MeshSource::Dynamic { first, count: verts.len() as u32 }
    }

    /// Draw calls of one kind, in submission order.
    pub fn draws_of(&self, kind: PrimitiveKind) -> impl Iterator<Item = &DrawCall> {
        self.draws.iter().filter(move |d| d.kind == kind)
    }
}

/// Vertex count of the static mesh a kind draws with, in authored topology.
pub fn static_vertex_count(kind: PrimitiveKind, circle_segments: u32) -> Option<u32> {
    match kind {
        PrimitiveKind::Rect | PrimitiveKind::Image => Some(6),
        PrimitiveKind::OutlineRect => Some(4),
        PrimitiveKind::Circle => Some(circle_segments),
        PrimitiveKind::Line | PrimitiveKind::Polygon | PrimitiveKind::Text => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_ranges_are_contiguous() {
        let mut plan = FramePlan::default();
        let a = plan.push_vertices(&[Vertex::default(); 2]);
        let b = plan.push_vertices(&[Vertex::default(); 3]);
        assert_eq!(a, MeshSource::Dynamic { first: 0, count: 2 });
        assert_eq!(b, MeshSource::Dynamic { first: 2, count: 3 });

        plan.clear();
        assert!(plan.vertices.is_empty());
        assert!(plan.vertices.capacity() >= 5);
    }

    #[test]
    fn static_counts() {
        assert_eq!(static_vertex_count(PrimitiveKind::Circle, 360), Some(360));
        assert_eq!(static_vertex_count(PrimitiveKind::OutlineRect, 360), Some(4));
        assert_eq!(static_vertex_count(PrimitiveKind::Text, 360), None);
    }
}

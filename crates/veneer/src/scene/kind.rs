use crate::mesh::Topology;

/// Closed set of primitive kinds, one scene buffer each.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveKind {
    Line,
    OutlineRect,
    Rect,
    Circle,
    Polygon,
    Image,
    Text,
}

impl PrimitiveKind {
    pub const COUNT: usize = 7;

    /// Order in which buffers are drained at flush.
    pub const FLUSH_ORDER: [PrimitiveKind; PrimitiveKind::COUNT] = [
        PrimitiveKind::Line,
        PrimitiveKind::OutlineRect,
        PrimitiveKind::Rect,
        PrimitiveKind::Circle,
        PrimitiveKind::Polygon,
        PrimitiveKind::Image,
        PrimitiveKind::Text,
    ];

    /// Position in [`Self::FLUSH_ORDER`], used as the buffer index.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PrimitiveKind::Line => 0,
            PrimitiveKind::OutlineRect => 1,
            PrimitiveKind::Rect => 2,
            PrimitiveKind::Circle => 3,
            PrimitiveKind::Polygon => 4,
            PrimitiveKind::Image => 5,
            PrimitiveKind::Text => 6,
        }
    }

    /// Topology the kind's mesh is authored in.
    #[inline]
    pub const fn topology(self) -> Topology {
        match self {
            PrimitiveKind::Line => Topology::LineList,
            PrimitiveKind::OutlineRect => Topology::LineLoop,
            PrimitiveKind::Circle => Topology::TriangleFan,
            PrimitiveKind::Rect
            | PrimitiveKind::Polygon
            | PrimitiveKind::Image
            | PrimitiveKind::Text => Topology::TriangleList,
        }
    }

    /// Kinds whose vertices are rebuilt for every record.
    #[inline]
    pub const fn has_dynamic_mesh(self) -> bool {
        matches!(self, PrimitiveKind::Line | PrimitiveKind::Polygon | PrimitiveKind::Text)
    }

    #[inline]
    pub const fn is_textured(self) -> bool {
        matches!(self, PrimitiveKind::Image | PrimitiveKind::Text)
    }
}

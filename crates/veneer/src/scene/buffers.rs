use super::{Primitive, PrimitiveKind};

/// One ordered buffer of primitives per kind.
///
/// Buffers are drained every frame; [`clear`](Self::clear) resets lengths but
/// keeps capacity so a warmed-up frame does not allocate.
#[derive(Debug, Default)]
pub struct SceneBuffers {
    buffers: [Vec<Primitive>; PrimitiveKind::COUNT],
}

impl SceneBuffers {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, primitive: Primitive) {
        self.buffers[primitive.kind().index()].push(primitive);
    }

    /// Records of one kind in insertion order.
    #[inline]
    pub fn of_kind(&self, kind: PrimitiveKind) -> &[Primitive] {
        &self.buffers[kind.index()]
    }

    /// Total number of queued records.
    pub fn len(&self) -> usize {
        self.buffers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.iter().all(Vec::is_empty)
    }

    /// Iterates every record, kind by kind in flush order.
    pub fn iter_in_flush_order(&self) -> impl Iterator<Item = &Primitive> {
        PrimitiveKind::FLUSH_ORDER
            .iter()
            .flat_map(move |k| self.buffers[k.index()].iter())
    }

    #[inline]
    pub fn clear(&mut self) {
        for b in &mut self.buffers {
            b.clear();
        }
    }
}

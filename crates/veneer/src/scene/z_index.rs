/// Per-frame depth counter value.
///
/// Every enqueued primitive takes the next value, so later calls sit nearer
/// to the viewer. It is a depth offset only; submission order is fixed by
/// primitive kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub u32);

impl ZIndex {
    #[inline]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Model-space Z used by the transform builder.
    #[inline]
    pub fn depth(self) -> f32 {
        self.0 as f32
    }
}

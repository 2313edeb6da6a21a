/// Opaque handle to a texture owned by a [`TextureStore`](crate::render::TextureStore).
///
/// `0` is reserved: loaders return [`TextureId::UNSET`] on failure and the
/// frame renderer skips records that reference it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const UNSET: TextureId = TextureId(0);

    #[inline]
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }
}

use crate::coords::Viewport;
use crate::scene::TextureId;

use super::FramePlan;

/// Consumer of finished frames.
///
/// The wgpu renderer is the production implementation; tests use recording
/// fakes so the batching pipeline runs without a GPU.
pub trait FrameSink {
    /// Current drawable size, queried once per flush.
    fn viewport(&self) -> Viewport;

    /// Draws and presents `plan`.
    fn present(&mut self, plan: &FramePlan) -> anyhow::Result<()>;
}

/// Owner of sampled textures.
pub trait TextureStore {
    /// Uploads tightly packed RGBA8 pixels and returns a fresh, non-zero id.
    fn upload_rgba(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<TextureId, TextureError>;

    /// Uploads a glyph atlas. Atlas texels must not bleed across cell edges,
    /// so stores that filter should sample these with [`TextureFilter::Nearest`].
    fn upload_atlas(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<TextureId, TextureError> {
        self.upload_rgba(width, height, pixels)
    }

    /// Releases `id`. Unknown or unset ids are ignored.
    fn release(&mut self, id: TextureId);
}

/// Sampling mode of an uploaded texture.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    /// Bilinear, repeating. Used for images.
    Linear,
    /// Nearest texel, clamped to the edge. Used for glyph atlases.
    Nearest,
}

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("texture size {width}x{height} is empty")]
    Empty { width: u32, height: u32 },
    #[error("texture size {width}x{height} exceeds the device limit of {max}")]
    TooLarge { width: u32, height: u32, max: u32 },
    #[error("expected {expected} bytes of RGBA data, got {actual}")]
    DataLength { expected: usize, actual: usize },
}

/// Shared argument validation for [`TextureStore::upload_rgba`] implementations.
pub fn check_upload(width: u32, height: u32, pixels: &[u8], max_dim: u32) -> Result<(), TextureError> {
    if width == 0 || height == 0 {
        return Err(TextureError::Empty { width, height });
    }
    if width > max_dim || height > max_dim {
        return Err(TextureError::TooLarge { width, height, max: max_dim });
    }
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(TextureError::DataLength { expected, actual: pixels.len() });
    }
    Ok(())
}

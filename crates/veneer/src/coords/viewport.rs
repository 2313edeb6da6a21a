/// Drawable size in physical pixels.
///
/// Queried from the window every flush; the orthographic camera and the GPU
/// viewport are both derived from it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns a viewport with both sides clamped to at least one pixel.
    #[inline]
    pub fn at_least_one_px(self) -> Self {
        Self::new(self.width.max(1.0), self.height.max(1.0))
    }
}

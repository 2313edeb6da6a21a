use std::path::Path;

use crate::coords::Viewport;
use crate::input::InputState;
use crate::render::TextureStore;
use crate::resources::{self, FontLoader, LoadedImage};
use crate::scene::{Canvas, TextureId};
use crate::time::FrameTime;

/// Per-frame context passed to [`OverlayApp`](super::OverlayApp) callbacks.
///
/// `'a` is the duration of the callback invocation.
pub struct FrameCtx<'a> {
    /// Draw-state register and scene buffers for this frame.
    pub canvas: &'a mut Canvas,
    pub input: &'a InputState,
    pub time: FrameTime,

    store: &'a mut dyn TextureStore,
    fonts: &'a mut FontLoader,
    screen: Viewport,
    monitor: Option<Viewport>,
}

impl<'a> FrameCtx<'a> {
    pub(crate) fn new(
        canvas: &'a mut Canvas,
        store: &'a mut dyn TextureStore,
        fonts: &'a mut FontLoader,
        input: &'a InputState,
        time: FrameTime,
        screen: Viewport,
        monitor: Option<Viewport>,
    ) -> Self {
        Self { canvas, input, time, store, fonts, screen, monitor }
    }

    // ── resources ─────────────────────────────────────────────────────────

    /// Loads an image texture; failures yield an unset id and a 0x0 size.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> LoadedImage {
        resources::load_image(&mut *self.store, path)
    }

    pub fn delete_image(&mut self, id: TextureId) {
        resources::delete_image(&mut *self.store, id);
    }

    /// Bakes and uploads a font at `size` points. Returns `TextureId::UNSET` on failure.
    pub fn load_font(&mut self, path: impl AsRef<Path>, size: f32) -> TextureId {
        self.fonts.load_font(&mut *self.store, &mut *self.canvas, path, size)
    }

    pub fn release_font(&mut self, id: TextureId) {
        self.fonts.release_font(&mut *self.store, &mut *self.canvas, id);
    }

    /// Atlas geometry used by subsequent [`load_font`](Self::load_font) calls.
    pub fn font_loader(&mut self) -> &mut FontLoader {
        &mut *self.fonts
    }

    // ── timing ────────────────────────────────────────────────────────────

    #[inline]
    pub fn fps(&self) -> f32 {
        self.time.fps()
    }

    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.time.dt
    }

    /// Seconds since the runtime started.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time.elapsed
    }

    // ── window ────────────────────────────────────────────────────────────

    /// Drawable size in physical pixels.
    #[inline]
    pub fn screen_size(&self) -> Viewport {
        self.screen
    }

    /// Size of the monitor hosting the overlay, if the platform reports one.
    #[inline]
    pub fn monitor_size(&self) -> Option<Viewport> {
        self.monitor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextureError;
    use crate::time::FrameClock;

    #[derive(Default)]
    struct NullStore {
        released: Vec<TextureId>,
    }

    impl TextureStore for NullStore {
        fn upload_rgba(&mut self, _w: u32, _h: u32, _p: &[u8]) -> Result<TextureId, TextureError> {
            Ok(TextureId(1))
        }

        fn release(&mut self, id: TextureId) {
            self.released.push(id);
        }
    }

    #[test]
    fn failed_loads_return_unset_and_queries_pass_through() {
        let mut canvas = Canvas::new();
        let mut store = NullStore::default();
        let mut fonts = FontLoader::default();
        let input = InputState::default();
        let time = FrameClock::new().tick();
        let missing = std::env::temp_dir().join("veneer-ctx-missing.ttf");

        let mut ctx = FrameCtx::new(
            &mut canvas,
            &mut store,
            &mut fonts,
            &input,
            time,
            Viewport::new(800.0, 600.0),
            None,
        );

        assert_eq!(ctx.load_font(&missing, 12.0), TextureId::UNSET);
        assert!(!ctx.load_image(&missing).is_loaded());
        ctx.delete_image(TextureId(3));
        assert_eq!(ctx.screen_size(), Viewport::new(800.0, 600.0));
        assert!(ctx.fps().is_finite());
        assert!(ctx.monitor_size().is_none());

        drop(ctx);
        assert_eq!(store.released, vec![TextureId(3)]);
    }
}

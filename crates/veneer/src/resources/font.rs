use std::path::Path;

use crate::atlas::{bake_atlas, AtlasConfig};
use crate::render::TextureStore;
use crate::scene::{Canvas, TextureId};

use super::LoadError;

/// Bakes fonts into atlas textures and registers their grids on a [`Canvas`].
///
/// The atlas geometry is shared by every subsequent load; fonts already
/// loaded keep the grid they were baked with.
#[derive(Debug, Clone, Default)]
pub struct FontLoader {
    config: AtlasConfig,
}

impl FontLoader {
    pub fn new(config: AtlasConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn atlas_config(&self) -> &AtlasConfig {
        &self.config
    }

    pub fn set_atlas_config(&mut self, config: AtlasConfig) {
        self.config = config;
    }

    pub fn set_glyphs_per_row(&mut self, per_row: u32) {
        self.config.glyphs_per_row = per_row;
    }

    pub fn set_glyph_count(&mut self, count: u32) {
        self.config.glyph_count = count;
    }

    pub fn set_dpi(&mut self, dpi: f32) {
        self.config.dpi = dpi;
    }

    pub fn reset_atlas_config(&mut self) {
        self.config = AtlasConfig::default();
    }

    /// Bakes `bytes` at `size` points, uploads the atlas and registers its grid.
    pub fn try_load_font_bytes<S>(
        &self,
        store: &mut S,
        canvas: &mut Canvas,
        bytes: &[u8],
        size: f32,
    ) -> Result<TextureId, LoadError>
    where
        S: TextureStore + ?Sized,
    {
        let atlas = bake_atlas(bytes, size, &self.config)?;
        let (w, h) = atlas.pixels.dimensions();
        let id = store.upload_atlas(w, h, atlas.pixels.as_raw())?;
        canvas.register_font(id, atlas.grid);
        Ok(id)
    }

    pub fn try_load_font<S>(
        &self,
        store: &mut S,
        canvas: &mut Canvas,
        path: impl AsRef<Path>,
        size: f32,
    ) -> Result<TextureId, LoadError>
    where
        S: TextureStore + ?Sized,
    {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| LoadError::io(path, e))?;
        let id = self.try_load_font_bytes(store, canvas, &bytes, size)?;
        log::debug!("loaded font {} at {size}pt as {id:?}", path.display());
        Ok(id)
    }

    /// Loads a font, returning [`TextureId::UNSET`] on any failure.
    pub fn load_font<S>(&self, store: &mut S, canvas: &mut Canvas, path: impl AsRef<Path>, size: f32) -> TextureId
    where
        S: TextureStore + ?Sized,
    {
        let path = path.as_ref();
        self.try_load_font(store, canvas, path, size).unwrap_or_else(|err| {
            log::warn!("font {} not loaded: {:#}", path.display(), anyhow::Error::from(err));
            TextureId::UNSET
        })
    }

    /// Unregisters the font's grid and releases its atlas texture.
    pub fn release_font<S>(&self, store: &mut S, canvas: &mut Canvas, id: TextureId)
    where
        S: TextureStore + ?Sized,
    {
        if id.is_unset() {
            return;
        }
        canvas.unregister_font(id);
        store.release(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::{AtlasError, GlyphGrid};
    use crate::render::TextureError;

    #[derive(Default)]
    struct FakeStore {
        next: u32,
        atlases: Vec<TextureId>,
        released: Vec<TextureId>,
    }

    impl TextureStore for FakeStore {
        fn upload_rgba(&mut self, _w: u32, _h: u32, _pixels: &[u8]) -> Result<TextureId, TextureError> {
            self.next += 1;
            Ok(TextureId(self.next))
        }

        fn upload_atlas(&mut self, w: u32, h: u32, pixels: &[u8]) -> Result<TextureId, TextureError> {
            let id = self.upload_rgba(w, h, pixels)?;
            self.atlases.push(id);
            Ok(id)
        }

        fn release(&mut self, id: TextureId) {
            self.released.push(id);
        }
    }

    #[test]
    fn missing_font_file_returns_unset() {
        let mut store = FakeStore::default();
        let mut canvas = Canvas::new();
        let path = std::env::temp_dir().join("veneer-no-such-font.ttf");
        let id = FontLoader::default().load_font(&mut store, &mut canvas, path, 16.0);
        assert_eq!(id, TextureId::UNSET);
        assert_eq!(store.next, 0);
    }

    #[test]
    fn garbage_bytes_do_not_upload() {
        let mut store = FakeStore::default();
        let mut canvas = Canvas::new();
        let err = FontLoader::default()
            .try_load_font_bytes(&mut store, &mut canvas, b"definitely not a font", 16.0)
            .unwrap_err();
        assert!(matches!(err, LoadError::Atlas(_)));
        assert_eq!(store.next, 0);
    }

    #[test]
    fn huge_point_size_fails_before_baking() {
        let mut store = FakeStore::default();
        let mut canvas = Canvas::new();
        let err = FontLoader::default()
            .try_load_font_bytes(&mut store, &mut canvas, b"never parsed", 2.0e8)
            .unwrap_err();
        assert!(matches!(err, LoadError::Atlas(AtlasError::TooLarge { .. })));
        assert_eq!(store.next, 0);

        let path = std::env::temp_dir().join(format!("veneer-huge-font-{}.ttf", std::process::id()));
        std::fs::write(&path, b"never parsed").unwrap();
        let id = FontLoader::default().load_font(&mut store, &mut canvas, &path, 2.0e8);
        let _ = std::fs::remove_file(&path);
        assert_eq!(id, TextureId::UNSET);
    }

    #[test]
    fn baked_font_is_uploaded_as_atlas() {
        let Some(bytes) = ["/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf", "/usr/share/fonts/TTF/DejaVuSans.ttf"]
            .iter()
            .find_map(|p| std::fs::read(p).ok())
        else {
            eprintln!("no system font found, skipping");
            return;
        };
        let mut store = FakeStore::default();
        let mut canvas = Canvas::new();
        let id = FontLoader::default().try_load_font_bytes(&mut store, &mut canvas, &bytes, 12.0).unwrap();
        assert_eq!(store.atlases, vec![id]);
        assert_eq!(canvas.font_grid(id).map(|g| g.cell_size), Some(12));
    }

    #[test]
    fn release_unregisters_grid() {
        let mut store = FakeStore::default();
        let mut canvas = Canvas::new();
        let grid = GlyphGrid::from_config(&AtlasConfig::default(), 16.0).unwrap();
        canvas.register_font(TextureId(7), grid);

        let loader = FontLoader::default();
        loader.release_font(&mut store, &mut canvas, TextureId(7));
        loader.release_font(&mut store, &mut canvas, TextureId::UNSET);

        assert!(canvas.font_grid(TextureId(7)).is_none());
        assert_eq!(store.released, vec![TextureId(7)]);
    }

    #[test]
    fn atlas_config_resets_to_default() {
        let mut loader = FontLoader::default();
        loader.set_glyphs_per_row(16);
        loader.set_glyph_count(256);
        loader.set_dpi(96.0);
        assert_eq!(loader.atlas_config().glyphs_per_row, 16);
        loader.reset_atlas_config();
        assert_eq!(*loader.atlas_config(), AtlasConfig::default());
    }
}

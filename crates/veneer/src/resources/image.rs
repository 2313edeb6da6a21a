use std::path::Path;

use crate::render::TextureStore;
use crate::scene::TextureId;

use super::LoadError;

/// Result of [`load_image`]. A failed load is `UNSET` with a 0x0 size.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct LoadedImage {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    #[inline]
    pub fn is_loaded(&self) -> bool {
        !self.id.is_unset()
    }
}

/// Decodes the image at `path` and uploads it as an RGBA8 texture.
pub fn try_load_image<S>(store: &mut S, path: impl AsRef<Path>) -> Result<LoadedImage, LoadError>
where
    S: TextureStore + ?Sized,
{
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| LoadError::io(path, e))?;
    let rgba = ::image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    let id = store.upload_rgba(width, height, rgba.as_raw())?;
    log::debug!("loaded image {} ({width}x{height}) as {id:?}", path.display());
    Ok(LoadedImage { id, width, height })
}

/// Like [`try_load_image`], but logs failures and returns an unset image.
pub fn load_image<S>(store: &mut S, path: impl AsRef<Path>) -> LoadedImage
where
    S: TextureStore + ?Sized,
{
    let path = path.as_ref();
    try_load_image(store, path).unwrap_or_else(|err| {
        log::warn!("image {} not loaded: {:#}", path.display(), anyhow::Error::from(err));
        LoadedImage::default()
    })
}

/// Releases an image texture. Unset ids are ignored.
pub fn delete_image<S>(store: &mut S, id: TextureId)
where
    S: TextureStore + ?Sized,
{
    if !id.is_unset() {
        store.release(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextureError;

    #[derive(Default)]
    struct FakeStore {
        uploads: Vec<(u32, u32, usize)>,
        released: Vec<TextureId>,
    }

    impl TextureStore for FakeStore {
        fn upload_rgba(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<TextureId, TextureError> {
            self.uploads.push((width, height, pixels.len()));
            Ok(TextureId(self.uploads.len() as u32))
        }

        fn release(&mut self, id: TextureId) {
            self.released.push(id);
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("veneer-{}-{name}", std::process::id()))
    }

    #[test]
    fn png_round_trips_through_store() {
        let path = temp_path("img.png");
        ::image::RgbaImage::from_pixel(3, 2, ::image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let mut store = FakeStore::default();
        let img = load_image(&mut store, &path);
        let _ = std::fs::remove_file(&path);

        assert!(img.is_loaded());
        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(store.uploads, vec![(3, 2, 24)]);
    }

    #[test]
    fn missing_file_yields_unset() {
        let mut store = FakeStore::default();
        let img = load_image(&mut store, temp_path("does-not-exist.png"));
        assert_eq!(img, LoadedImage::default());
        assert!(store.uploads.is_empty());
    }

    #[test]
    fn undecodable_file_yields_unset() {
        let path = temp_path("garbage.png");
        std::fs::write(&path, b"not an image").unwrap();
        let mut store = FakeStore::default();
        let err = try_load_image(&mut store, &path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn delete_ignores_unset() {
        let mut store = FakeStore::default();
        delete_image(&mut store, TextureId::UNSET);
        delete_image(&mut store, TextureId(4));
        assert_eq!(store.released, vec![TextureId(4)]);
    }
}

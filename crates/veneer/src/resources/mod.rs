//! File-backed resources: images and baked fonts.
//!
//! Public loaders never fail loudly. A failure is logged at `warn` and
//! reported as [`TextureId::UNSET`](crate::scene::TextureId::UNSET), which the
//! frame renderer skips.

mod error;
mod font;
mod image;

pub use error::LoadError;
pub use font::FontLoader;
pub use self::image::{delete_image, load_image, try_load_image, LoadedImage};

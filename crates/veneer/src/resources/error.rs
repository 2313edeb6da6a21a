use std::path::PathBuf;

use thiserror::Error;

use crate::atlas::AtlasError;
use crate::render::TextureError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image")]
    Decode(#[from] ::image::ImageError),

    #[error(transparent)]
    Atlas(#[from] AtlasError),

    #[error("texture upload failed")]
    Upload(#[from] TextureError),
}

impl LoadError {
    pub(super) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}

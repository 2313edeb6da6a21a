use crate::scene::{Canvas, DrawSnapshot, Primitive, TextureId};

/// Textured quad payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub texture: TextureId,
    pub state: DrawSnapshot,
}

impl Canvas {
    /// Queues an image previously loaded through
    /// [`load_image`](crate::resources::load_image).
    ///
    /// An unset handle is still queued (and consumes a z value); the frame
    /// renderer skips it.
    pub fn draw_image(&mut self, x: f32, y: f32, width: f32, height: f32, texture: TextureId) {
        let state = self.snapshot();
        self.push(Primitive::Image(ImageCmd { x, y, width, height, texture, state }));
    }
}

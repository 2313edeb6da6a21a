use crate::scene::{Canvas, DrawSnapshot, Primitive};

/// Rectangle payload shared by filled and outlined rectangles.
///
/// Width and height may be negative; the quad is simply mirrored.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub state: DrawSnapshot,
}

impl Canvas {
    /// Queues a filled (or wireframe, per the fill flag) rectangle.
    pub fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let state = self.snapshot();
        self.push(Primitive::Rect(RectCmd { x, y, width, height, state }));
    }

    /// Queues a rectangle outline. Always drawn as a closed line loop.
    pub fn draw_outline_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let state = self.snapshot();
        self.push(Primitive::OutlineRect(RectCmd { x, y, width, height, state }));
    }
}

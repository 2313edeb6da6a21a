use crate::scene::{Canvas, DrawSnapshot, Primitive};

/// Line segment payload, endpoints in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub state: DrawSnapshot,
}

impl Canvas {
    /// Queues a line from `(x1, y1)` to `(x2, y2)`.
    ///
    /// Only the translation of the current state moves a line; rotation and
    /// anchor are captured but not applied.
    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let state = self.snapshot();
        self.push(Primitive::Line(LineCmd { x1, y1, x2, y2, state }));
    }
}

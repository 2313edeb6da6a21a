use crate::scene::{Canvas, DrawSnapshot, Primitive};

/// Ellipse payload.
///
/// `(x, y)` is the top-left of the bounding box and `(scale_x, scale_y)` its
/// size, matching the shared unit circle mesh that spans `[0,1]²`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub state: DrawSnapshot,
}

impl Canvas {
    pub fn draw_circle(&mut self, x: f32, y: f32, scale_x: f32, scale_y: f32) {
        let state = self.snapshot();
        self.push(Primitive::Circle(CircleCmd { x, y, scale_x, scale_y, state }));
    }
}

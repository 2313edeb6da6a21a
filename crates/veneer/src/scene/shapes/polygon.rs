use crate::scene::{Canvas, DrawSnapshot, Primitive};

/// Triangle payload, vertices in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: [[f32; 2]; 3],
    pub state: DrawSnapshot,
}

impl Canvas {
    /// Queues a triangle. Rotation turns it about the translation origin.
    pub fn draw_polygon(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        let state = self.snapshot();
        self.push(Primitive::Polygon(PolygonCmd { points: [[x1, y1], [x2, y2], [x3, y3]], state }));
    }
}

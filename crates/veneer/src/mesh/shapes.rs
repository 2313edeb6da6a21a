use std::f32::consts::TAU;

use super::Vertex;

/// Number of rim vertices in the shared circle mesh.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 360;

/// Two triangles covering `[0,1]²`, UV equal to position.
pub fn unit_quad() -> [Vertex; 6] {
    [
        Vertex::new(0.0, 0.0, 0.0, 0.0),
        Vertex::new(1.0, 0.0, 1.0, 0.0),
        Vertex::new(1.0, 1.0, 1.0, 1.0),
        Vertex::new(1.0, 1.0, 1.0, 1.0),
        Vertex::new(0.0, 1.0, 0.0, 1.0),
        Vertex::new(0.0, 0.0, 0.0, 0.0),
    ]
}

/// The unit square's perimeter as a line loop (clockwise in screen space).
pub fn outline_quad() -> [Vertex; 4] {
    [
        Vertex::new(0.0, 0.0, 0.0, 0.0),
        Vertex::new(1.0, 0.0, 1.0, 0.0),
        Vertex::new(1.0, 1.0, 1.0, 1.0),
        Vertex::new(0.0, 1.0, 0.0, 1.0),
    ]
}

/// A segment between two points, in absolute coordinates.
pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> [Vertex; 2] {
    [Vertex::new(x1, y1, 0.0, 0.0), Vertex::new(x2, y2, 1.0, 0.0)]
}

/// A single triangle in absolute coordinates. UVs are unused.
pub fn polygon(p1: [f32; 2], p2: [f32; 2], p3: [f32; 2]) -> [Vertex; 3] {
    [
        Vertex::new(p1[0], p1[1], 0.0, 0.0),
        Vertex::new(p2[0], p2[1], 0.0, 0.0),
        Vertex::new(p3[0], p3[1], 0.0, 0.0),
    ]
}

/// Rim of a circle of radius 0.5 centred at `(0.5, 0.5)`, as a triangle fan.
///
/// Vertex `i` sits at angle `2π·i/segments`. UVs are `(p + r) / 2r`.
pub fn circle(segments: u32) -> Vec<Vertex> {
    let r = 0.5_f32;
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            let x = angle.cos() * r + r;
            let y = angle.sin() * r + r;
            Vertex::new(x, y, (x + r) / (2.0 * r), (y + r) / (2.0 * r))
        })
        .collect()
}

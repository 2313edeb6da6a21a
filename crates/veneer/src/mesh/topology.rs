use super::Vertex;

/// Primitive topology a mesh is authored in.
///
/// `TriangleFan` and `LineLoop` have no native GPU counterpart; the GPU layer
/// expands them with [`fan_to_list`] and [`close_loop`] before upload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    LineList,
    LineLoop,
    TriangleList,
    TriangleFan,
}

impl Topology {
    /// `true` for topologies that rasterize as lines regardless of fill mode.
    #[inline]
    pub fn is_lines(self) -> bool {
        matches!(self, Topology::LineList | Topology::LineLoop)
    }

    /// Vertex count after [`fan_to_list`] / [`close_loop`] expansion.
    pub fn expanded_len(self, authored: u32) -> u32 {
        match self {
            Topology::LineList | Topology::TriangleList => authored,
            Topology::LineLoop => authored + u32::from(authored > 0),
            Topology::TriangleFan => authored.saturating_sub(2) * 3,
        }
    }
}

/// Expands a triangle fan into an equivalent triangle list.
///
/// Fewer than three vertices produce an empty list.
pub fn fan_to_list(fan: &[Vertex]) -> Vec<Vertex> {
    if fan.len() < 3 {
        return Vec::new();
    }
    let hub = fan[0];
    let mut out = Vec::with_capacity((fan.len() - 2) * 3);
    for pair in fan[1..].windows(2) {
        out.extend_from_slice(&[hub, pair[0], pair[1]]);
    }
    out
}

/// Turns a line loop into a line strip by repeating the first vertex at the end.
pub fn close_loop(ring: &[Vertex]) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(ring.len() + 1);
    out.extend_from_slice(ring);
    if let Some(first) = ring.first() {
        out.push(*first);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32) -> Vertex {
        Vertex::new(x, 0.0, 0.0, 0.0)
    }

    #[test]
    fn fan_of_four_becomes_two_triangles() {
        let list = fan_to_list(&[v(0.0), v(1.0), v(2.0), v(3.0)]);
        let xs: Vec<f32> = list.iter().map(|p| p.pos[0]).collect();
        assert_eq!(xs, [0.0, 1.0, 2.0, 0.0, 2.0, 3.0]);
    }

    #[test]
    fn degenerate_fan_is_empty() {
        assert!(fan_to_list(&[v(0.0), v(1.0)]).is_empty());
    }

    #[test]
    fn expanded_len_matches_helpers() {
        let ring: Vec<Vertex> = (0..6).map(|i| v(i as f32)).collect();
        assert_eq!(Topology::TriangleFan.expanded_len(6) as usize, fan_to_list(&ring).len());
        assert_eq!(Topology::LineLoop.expanded_len(6) as usize, close_loop(&ring).len());
        assert_eq!(Topology::TriangleList.expanded_len(6), 6);
    }

    #[test]
    fn loop_repeats_first_vertex() {
        let strip = close_loop(&[v(0.0), v(1.0), v(2.0)]);
        assert_eq!(strip.len(), 4);
        assert_eq!(strip[3], strip[0]);
        assert!(close_loop(&[]).is_empty());
    }
}

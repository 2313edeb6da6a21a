use crate::atlas::GlyphGrid;

use super::Vertex;

/// Line/column extent of a string, used to size the text anchor box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TextExtent {
    /// Character count of the longest line.
    pub max_cols: usize,
    /// Number of lines (a trailing `\n` starts an empty line).
    pub lines: usize,
}

/// Measures `s` in glyph cells.
pub fn text_extent(s: &str) -> TextExtent {
    s.split('\n').fold(TextExtent::default(), |acc, line| TextExtent {
        max_cols: acc.max_cols.max(line.chars().count()),
        lines: acc.lines + 1,
    })
}

/// Lays out `s` as one quad per character in glyph units.
///
/// Character `c` of line `l` covers `[c·interval, c·interval + 1] × [l, l + 1]`
/// and samples the atlas cell of its codepoint. Tabs become a single space.
/// Characters whose codepoint lies outside `grid` advance the column but emit
/// nothing.
pub fn text(s: &str, grid: &GlyphGrid, interval: f32) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(s.len() * 6);

    for (line_idx, line) in s.split('\n').enumerate() {
        let y = line_idx as f32;
        for (col, ch) in line.chars().enumerate() {
            let ch = if ch == '\t' { ' ' } else { ch };
            let code = ch as u32;
            if !grid.contains(code) {
                continue;
            }

            let x = col as f32 * interval;
            let ([u0, v0], [u1, v1]) = grid.uv_rect(code);
            out.extend_from_slice(&[
                Vertex::new(x, y, u0, v0),
                Vertex::new(x + 1.0, y, u1, v0),
                Vertex::new(x + 1.0, y + 1.0, u1, v1),
                Vertex::new(x + 1.0, y + 1.0, u1, v1),
                Vertex::new(x, y + 1.0, u0, v1),
                Vertex::new(x, y, u0, v0),
            ]);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::AtlasConfig;

    fn grid() -> GlyphGrid {
        GlyphGrid::from_config(&AtlasConfig::default(), 16.0).unwrap()
    }

    #[test]
    fn one_quad_per_char() {
        let v = text("ab", &grid(), 1.0);
        assert_eq!(v.len(), 12);
        assert_eq!(v[0].pos, [0.0, 0.0]);
        assert_eq!(v[6].pos, [1.0, 0.0]);
    }

    #[test]
    fn newline_moves_down_and_resets_column() {
        let v = text("a\nb", &grid(), 0.5);
        assert_eq!(v.len(), 12);
        assert_eq!(v[6].pos, [0.0, 1.0]);
    }

    #[test]
    fn interval_spaces_columns() {
        let v = text("abc", &grid(), 0.6);
        assert!((v[12].pos[0] - 1.2).abs() < 1e-6);
    }

    #[test]
    fn tab_samples_space_cell() {
        let g = grid();
        let tab = text("\t", &g, 1.0);
        let space = text(" ", &g, 1.0);
        assert_eq!(tab, space);
    }

    #[test]
    fn uv_follows_codepoint_cell() {
        let g = grid();
        // '!' is 33 -> cell (1, 1) with 32 per row.
        let v = text("!", &g, 1.0);
        let ([u0, v0], _) = g.uv_rect(33);
        assert_eq!(v[0].uv, [u0, v0]);
        assert!((u0 - 1.0 / 32.0).abs() < 1e-6);
        assert!((v0 - 1.0 / 64.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_atlas_chars_keep_their_column() {
        // U+4E2D is far past the default 2048 cells.
        let v = text("a\u{4E2D}b", &grid(), 1.0);
        assert_eq!(v.len(), 12);
        assert_eq!(v[6].pos[0], 2.0);
    }

    #[test]
    fn extent_counts_chars_and_lines() {
        assert_eq!(text_extent("hello\nhi"), TextExtent { max_cols: 5, lines: 2 });
        assert_eq!(text_extent("é"), TextExtent { max_cols: 1, lines: 1 });
        assert_eq!(text_extent("a\n"), TextExtent { max_cols: 1, lines: 2 });
    }

    #[test]
    fn layout_is_deterministic() {
        let g = grid();
        let a = text("FPS: 60\n\tok", &g, 0.55);
        let b = text("FPS: 60\n\tok", &g, 0.55);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&a), bytemuck::cast_slice::<Vertex, u8>(&b));
    }
}

use image::{Rgba, RgbaImage};

use super::{AtlasConfig, AtlasError, GlyphGrid};

/// A baked glyph atlas: the RGBA bitmap plus the grid needed to address it.
///
/// Pixels are white with coverage in the alpha channel, so the shader's
/// `color * texel` tints glyphs with the record color.
pub struct GlyphAtlas {
    pub pixels: RgbaImage,
    pub grid: GlyphGrid,
}

/// Rasterizes `font_bytes` at `size` into a fixed glyph grid.
///
/// Codepoints `0..glyph_count` are drawn in sequence, each into its own cell.
/// Codepoints that are not valid `char`s, that the font has no glyph for, or
/// that produce an empty bitmap leave their cell blank. No caching is done
/// here; every call bakes a fresh atlas.
pub fn bake_atlas(font_bytes: &[u8], size: f32, config: &AtlasConfig) -> Result<GlyphAtlas, AtlasError> {
    let grid = GlyphGrid::from_config(config, size)?;

    let px = size * config.dpi / 72.0;
    let font = fontdue::Font::from_bytes(
        font_bytes,
        fontdue::FontSettings { scale: px, ..fontdue::FontSettings::default() },
    )
    .map_err(|e| AtlasError::InvalidFont(e.to_string()))?;

    // Baseline sits at the ascent so descenders stay inside their own cell.
    let ascent = font
        .horizontal_line_metrics(px)
        .map_or(px, |m| m.ascent)
        .round() as i64;

    let (width, height) = grid.pixel_size();
    let mut pixels = RgbaImage::new(width, height);
    let mut drawn = 0u32;

    for code in 0..config.glyph_count {
        if !grid.contains(code) {
            break;
        }
        let Some(ch) = char::from_u32(code) else { continue };
        if font.lookup_glyph_index(ch) == 0 {
            continue;
        }

        let (metrics, coverage) = font.rasterize(ch, px);
        if metrics.width == 0 || metrics.height == 0 {
            continue;
        }

        let (cx, cy) = grid.cell_origin_px(code);
        let cell = CellBounds::new(cx, cy, grid.cell_size);
        let gx = cx as i64 + metrics.xmin as i64;
        let gy = cy as i64 + ascent - (metrics.height as i64 + metrics.ymin as i64);

        blit_coverage(&mut pixels, &coverage, metrics.width, metrics.height, gx, gy, cell);
        drawn += 1;
    }

    log::debug!(
        "baked glyph atlas: {drawn}/{} glyphs, {width}x{height} px, cell {} px",
        config.glyph_count,
        grid.cell_size
    );

    Ok(GlyphAtlas { pixels, grid })
}

/// Pixel bounds of one cell, half-open.
#[derive(Debug, Copy, Clone)]
struct CellBounds {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl CellBounds {
    fn new(x: u32, y: u32, size: u32) -> Self {
        Self {
            x0: x as i64,
            y0: y as i64,
            x1: (x + size) as i64,
            y1: (y + size) as i64,
        }
    }
}

/// Copies a coverage bitmap to `(x, y)` as white pixels, clipped to `cell`.
fn blit_coverage(
    dst: &mut RgbaImage,
    coverage: &[u8],
    w: usize,
    h: usize,
    x: i64,
    y: i64,
    cell: CellBounds,
) {
    for row in 0..h {
        let py = y + row as i64;
        if py < cell.y0 || py >= cell.y1 || py >= dst.height() as i64 {
            continue;
        }
        for col in 0..w {
            let px = x + col as i64;
            if px < cell.x0 || px >= cell.x1 || px >= dst.width() as i64 {
                continue;
            }
            let a = coverage[row * w + col];
            if a != 0 {
                dst.put_pixel(px as u32, py as u32, Rgba([255, 255, 255, a]));
            }
        }
    }
}

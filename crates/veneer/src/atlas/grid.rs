use super::AtlasError;

/// Atlas geometry used by every bake.
///
/// Defaults to 32 glyphs per row and 2048 glyph slots (64 rows) at 72 dpi, which
/// covers Latin, Greek and Cyrillic blocks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AtlasConfig {
    pub glyphs_per_row: u32,
    pub glyph_count: u32,
    pub dpi: f32,
    /// Largest bitmap edge a bake may allocate, usually the device texture limit.
    pub max_dimension: u32,
}

impl AtlasConfig {
    pub const DEFAULT_GLYPHS_PER_ROW: u32 = 32;
    pub const DEFAULT_GLYPH_COUNT: u32 = 2048;
    pub const DEFAULT_DPI: f32 = 72.0;
    pub const DEFAULT_MAX_DIMENSION: u32 = 8192;

    /// Cell edge in pixels for a font of `size` points: `size * dpi / 72`, truncated.
    pub fn cell_size_for(&self, size: f32) -> Result<u32, AtlasError> {
        let px = size * self.dpi / 72.0;
        if !px.is_finite() || px < 1.0 {
            return Err(AtlasError::InvalidSize { size, dpi: self.dpi });
        }
        Ok(px as u32)
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            glyphs_per_row: Self::DEFAULT_GLYPHS_PER_ROW,
            glyph_count: Self::DEFAULT_GLYPH_COUNT,
            dpi: Self::DEFAULT_DPI,
            max_dimension: Self::DEFAULT_MAX_DIMENSION,
        }
    }
}

/// Metadata needed to address a glyph cell by codepoint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphGrid {
    pub per_row: u32,
    pub count: u32,
    /// Cell edge in pixels.
    pub cell_size: u32,
    /// Font size the atlas was baked at.
    pub font_size: f32,
}

impl GlyphGrid {
    /// Validates `config` and derives the cell size for `font_size`.
    ///
    /// Fails with [`AtlasError::TooLarge`] when the resulting bitmap would not
    /// fit in `config.max_dimension` on either axis.
    pub fn from_config(config: &AtlasConfig, font_size: f32) -> Result<Self, AtlasError> {
        let (per_row, count) = (config.glyphs_per_row, config.glyph_count);
        if per_row == 0 || count < per_row {
            return Err(AtlasError::InvalidGrid { per_row, count });
        }
        let cell_size = config.cell_size_for(font_size)?;
        let rows = count / per_row;

        let too_large = || AtlasError::TooLarge { font_size, cell_size, max: config.max_dimension };
        let width = per_row.checked_mul(cell_size).ok_or_else(too_large)?;
        let height = rows.checked_mul(cell_size).ok_or_else(too_large)?;
        if width > config.max_dimension || height > config.max_dimension {
            return Err(too_large());
        }

        Ok(Self { per_row, count, cell_size, font_size })
    }

    /// Number of full rows; a trailing partial row is not allocated.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.count / self.per_row
    }

    /// Bitmap dimensions `(per_row * cell, rows * cell)`.
    #[inline]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.per_row * self.cell_size, self.rows() * self.cell_size)
    }

    /// Whether `code` has a cell inside the bitmap.
    #[inline]
    pub fn contains(&self, code: u32) -> bool {
        code / self.per_row < self.rows()
    }

    /// `(column, row)` of the cell holding `code`.
    #[inline]
    pub fn cell_of(&self, code: u32) -> (u32, u32) {
        (code % self.per_row, code / self.per_row)
    }

    /// Top-left pixel of the cell holding `code`.
    #[inline]
    pub fn cell_origin_px(&self, code: u32) -> (u32, u32) {
        let (col, row) = self.cell_of(code);
        (col * self.cell_size, row * self.cell_size)
    }

    /// Texture-space rectangle `(uv_min, uv_max)` of the cell holding `code`.
    pub fn uv_rect(&self, code: u32) -> ([f32; 2], [f32; 2]) {
        let (col, row) = self.cell_of(code);
        let du = 1.0 / self.per_row as f32;
        let dv = 1.0 / self.rows() as f32;
        let u0 = col as f32 * du;
        let v0 = row as f32 * dv;
        ([u0, v0], [u0 + du, v0 + dv])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_grid() -> GlyphGrid {
        GlyphGrid::from_config(&AtlasConfig::default(), 16.0).unwrap()
    }

    #[test]
    fn codepoint_33_lands_in_cell_1_1() {
        assert_eq!(default_grid().cell_of(33), (1, 1));
    }

    #[test]
    fn codepoint_0_lands_in_cell_0_0() {
        let g = default_grid();
        assert_eq!(g.cell_of(0), (0, 0));
        assert_eq!(g.uv_rect(0), ([0.0, 0.0], [1.0 / 32.0, 1.0 / 64.0]));
    }

    #[test]
    fn pixel_size_follows_grid() {
        assert_eq!(default_grid().pixel_size(), (32 * 16, 64 * 16));
    }

    #[test]
    fn cell_origin_is_scaled_by_cell_size() {
        assert_eq!(default_grid().cell_origin_px(65), (16, 32));
    }

    #[test]
    fn contains_stops_at_last_full_row() {
        let cfg = AtlasConfig { glyph_count: 70, ..AtlasConfig::default() };
        let g = GlyphGrid::from_config(&cfg, 8.0).unwrap();
        assert_eq!(g.rows(), 2);
        assert!(g.contains(63));
        assert!(!g.contains(64));
        assert!(!default_grid().contains(2048));
    }

    #[test]
    fn zero_per_row_is_rejected() {
        let cfg = AtlasConfig { glyphs_per_row: 0, ..AtlasConfig::default() };
        assert!(matches!(
            GlyphGrid::from_config(&cfg, 16.0),
            Err(AtlasError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn cell_size_truncates() {
        let cfg = AtlasConfig::default();
        assert_eq!(cfg.cell_size_for(16.9).unwrap(), 16);
        let hi_dpi = AtlasConfig { dpi: 144.0, ..AtlasConfig::default() };
        assert_eq!(hi_dpi.cell_size_for(12.0).unwrap(), 24);
    }

    #[test]
    fn overflowing_bitmap_is_rejected() {
        let cfg = AtlasConfig { max_dimension: u32::MAX, ..AtlasConfig::default() };
        assert!(matches!(
            GlyphGrid::from_config(&cfg, 2.0e8),
            Err(AtlasError::TooLarge { .. })
        ));
    }

    #[test]
    fn bitmap_beyond_max_dimension_is_rejected() {
        // 512pt on the default 32x64 grid needs a 16384x32768 bitmap.
        assert!(matches!(
            GlyphGrid::from_config(&AtlasConfig::default(), 512.0),
            Err(AtlasError::TooLarge { cell_size: 512, max: 8192, .. })
        ));

        // 128pt: 4096x8192 fits exactly.
        let g = GlyphGrid::from_config(&AtlasConfig::default(), 128.0).unwrap();
        assert_eq!(g.pixel_size(), (4096, 8192));
    }

    #[test]
    fn sub_pixel_size_is_rejected() {
        assert!(AtlasConfig::default().cell_size_for(0.5).is_err());
        assert!(AtlasConfig::default().cell_size_for(f32::NAN).is_err());
    }
}

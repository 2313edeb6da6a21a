use thiserror::Error;

/// Failure while baking a glyph atlas.
///
/// Per-glyph rasterization problems are never reported here; they leave a blank
/// cell instead.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to parse font: {0}")]
    InvalidFont(String),

    #[error("font size {size} at {dpi} dpi yields an empty glyph cell")]
    InvalidSize { size: f32, dpi: f32 },

    #[error("invalid atlas grid: {per_row} glyphs per row, {count} glyphs total")]
    InvalidGrid { per_row: u32, count: u32 },

    #[error("font size {font_size} needs {cell_size} px cells; atlas exceeds {max} px")]
    TooLarge { font_size: f32, cell_size: u32, max: u32 },
}

//! Font atlas baking.
//!
//! A font is rasterized once, at a fixed size, into a grid of equally sized
//! cells. Cell `i` holds codepoint `i`, so the mesh generator can address any
//! glyph with `col = code % per_row`, `row = code / per_row` and never needs
//! per-glyph metrics at draw time.

mod baker;
mod error;
mod grid;

pub use baker::{bake_atlas, GlyphAtlas};
pub use error::AtlasError;
pub use grid::{AtlasConfig, GlyphGrid};

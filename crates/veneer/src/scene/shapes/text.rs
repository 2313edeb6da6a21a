use crate::scene::{Canvas, DrawSnapshot, Primitive, TextureId};

/// Text payload.
///
/// Glyphs are laid out in unit cells and scaled by `(width + size,
/// height + size)`; `interval` is the horizontal advance in cell units.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub width: f32,
    pub height: f32,
    pub font: TextureId,
    pub interval: f32,
    pub text: String,
    pub state: DrawSnapshot,
}

impl Canvas {
    /// Queues a string rendered with a font from
    /// [`FontLoader::load_font`](crate::resources::FontLoader::load_font).
    ///
    /// An empty string queues nothing and consumes no z value.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        width: f32,
        height: f32,
        font: TextureId,
        interval: f32,
        text: &str,
    ) {
        if text.is_empty() {
            return;
        }
        let state = self.snapshot();
        self.push(Primitive::Text(TextCmd {
            x,
            y,
            size,
            width,
            height,
            font,
            interval,
            text: text.to_owned(),
            state,
        }));
    }
}

#[cfg(test)]
mod tests {
    use crate::scene::{Canvas, TextureId, ZIndex};

    #[test]
    fn empty_text_is_ignored() {
        let mut c = Canvas::new();
        c.draw_text(0.0, 0.0, 12.0, 0.0, 0.0, TextureId(1), 0.6, "");
        assert!(c.buffers().is_empty());
        assert_eq!(c.state().z, ZIndex(0));
    }

    #[test]
    fn unknown_font_is_still_queued() {
        let mut c = Canvas::new();
        c.draw_text(0.0, 0.0, 12.0, 0.0, 0.0, TextureId(42), 0.6, "hi");
        assert_eq!(c.buffers().len(), 1);
    }
}

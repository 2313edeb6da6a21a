use super::shapes::{CircleCmd, ImageCmd, LineCmd, PolygonCmd, RectCmd, TextCmd};
use super::{DrawSnapshot, PrimitiveKind};

/// One queued primitive: kind-specific payload plus the captured draw state.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*`
/// - add a variant here and a [`PrimitiveKind`]
/// - handle it in the frame renderer's plan builder
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LineCmd),
    OutlineRect(RectCmd),
    Rect(RectCmd),
    Circle(CircleCmd),
    Polygon(PolygonCmd),
    Image(ImageCmd),
    Text(TextCmd),
}

impl Primitive {
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Line(_) => PrimitiveKind::Line,
            Primitive::OutlineRect(_) => PrimitiveKind::OutlineRect,
            Primitive::Rect(_) => PrimitiveKind::Rect,
            Primitive::Circle(_) => PrimitiveKind::Circle,
            Primitive::Polygon(_) => PrimitiveKind::Polygon,
            Primitive::Image(_) => PrimitiveKind::Image,
            Primitive::Text(_) => PrimitiveKind::Text,
        }
    }

    #[inline]
    pub fn state(&self) -> &DrawSnapshot {
        match self {
            Primitive::Line(c) => &c.state,
            Primitive::OutlineRect(c) | Primitive::Rect(c) => &c.state,
            Primitive::Circle(c) => &c.state,
            Primitive::Polygon(c) => &c.state,
            Primitive::Image(c) => &c.state,
            Primitive::Text(c) => &c.state,
        }
    }
}

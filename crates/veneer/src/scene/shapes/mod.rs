//! Per-shape payloads and their `Canvas::draw_*` entry points.

mod circle;
mod image;
mod line;
mod polygon;
mod progress;
mod rect;
mod text;

pub use circle::CircleCmd;
pub use self::image::ImageCmd;
pub use line::LineCmd;
pub use polygon::PolygonCmd;
pub use progress::ProgressDirection;
pub use rect::RectCmd;
pub use text::TextCmd;

//! Draw-state register and per-kind scene buffers.
//!
//! Responsibilities:
//! - hold the "current" color/rotation/translation/anchor/z/fill state
//! - snapshot it into a typed record on every `draw_*` call
//! - keep one ordered buffer per primitive kind until the next flush
//!
//! Shape-specific payloads and their entry points live under `scene::shapes`.

mod buffers;
mod canvas;
mod cmd;
mod kind;
mod state;
mod texture;
mod z_index;

pub mod shapes;

pub use buffers::SceneBuffers;
pub use canvas::Canvas;
pub use cmd::Primitive;
pub use kind::PrimitiveKind;
pub use shapes::{CircleCmd, ImageCmd, LineCmd, PolygonCmd, ProgressDirection, RectCmd, TextCmd};
pub use state::{DrawSnapshot, DrawState, ResetPolicy};
pub use texture::TextureId;
pub use z_index::ZIndex;

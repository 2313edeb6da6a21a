//! Primitive mesh generation.
//!
//! Pure functions from primitive parameters to flat vertex lists. Static unit
//! meshes (quad, circle) are generated once and scaled by the model
//! transform; lines, polygons and text are regenerated for every record.
//!
//! Output is deterministic: identical inputs give identical vertices in the
//! same order, with fixed winding.

mod shapes;
mod text;
mod topology;
mod vertex;

pub use shapes::{circle, line, outline_quad, polygon, unit_quad, DEFAULT_CIRCLE_SEGMENTS};
pub use text::{text, text_extent, TextExtent};
pub use topology::{close_loop, fan_to_list, Topology};
pub use vertex::Vertex;

//! Frame rendering.
//!
//! [`FrameRenderer`] turns the canvas into a [`FramePlan`] on the CPU; a
//! [`FrameSink`] draws it. The wgpu sink lives in [`gpu`].
//!
//! Convention:
//! - positions are physical pixels, top-left origin, +Y down
//! - a record's z maps to depth; larger z is nearer

mod frame;
pub mod gpu;
mod plan;
mod sink;
pub mod transform;

pub use frame::{FrameRenderer, FrameStats};
pub use plan::{static_vertex_count, DrawCall, FramePlan, MeshSource};
pub use sink::{check_upload, FrameSink, TextureError, TextureFilter, TextureStore};

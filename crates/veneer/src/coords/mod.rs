//! Coordinate and geometry types shared by the scene, mesh and render layers.
//!
//! Canonical CPU space:
//! - Physical pixels of the drawable surface
//! - Origin top-left
//! - +X right, +Y down
//!
//! The frame renderer converts to clip space with an orthographic projection
//! rebuilt from the viewport every flush.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;

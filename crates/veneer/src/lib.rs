//! Immediate-mode 2D overlay renderer.
//!
//! Applications set draw state and enqueue primitives on a [`scene::Canvas`]
//! every frame. The [`render::FrameRenderer`] drains the queues once per
//! frame in a fixed kind order, issues one draw per record and resets the
//! transient parts of the draw state.
//!
//! The [`window::Runtime`] hosts everything in a transparent, always-on-top
//! window driven by an [`core::OverlayApp`].

pub mod atlas;
pub mod config;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod mesh;
pub mod paint;
pub mod render;
pub mod resources;
pub mod scene;
pub mod time;
pub mod window;

pub use config::OverlayConfig;
pub use crate::core::{AppControl, FrameCtx, OverlayApp};
pub use paint::Color;
pub use scene::{Canvas, ProgressDirection, TextureId};
pub use window::Runtime;

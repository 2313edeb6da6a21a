//! Application-facing contracts.
//!
//! The runtime owns the window, GPU and frame loop; applications implement
//! [`OverlayApp`] and draw through the [`FrameCtx`] they are handed.

mod app;
mod ctx;

pub use app::{AppControl, OverlayApp};
pub use ctx::FrameCtx;

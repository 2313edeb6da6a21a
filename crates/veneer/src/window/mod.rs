//! Overlay window and frame loop.
//!
//! Owns the `winit` EventLoop and the overlay window, and wires them to the
//! GPU renderer.

mod runtime;

pub use runtime::Runtime;

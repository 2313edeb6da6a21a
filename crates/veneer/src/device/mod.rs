//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain) and its depth target
//! - acquiring frames and providing encoders/views for rendering

mod context;
mod depth;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use depth::{DepthTarget, DEPTH_FORMAT};
pub use frame::{GpuFrame, SurfaceErrorAction};
pub use init::GpuInit;

//! Time subsystem.
//!
//! Provides frame timing without coupling to the runtime:
//! - one `FrameClock` per overlay loop
//! - call `tick()` once per presented frame to obtain `FrameTime` (delta, FPS)

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by the overlay runtime.
pub trait OverlayApp {
    /// Called once after the window and GPU are ready, before the first frame.
    ///
    /// Fonts and images are usually loaded here.
    fn setup(&mut self, ctx: &mut FrameCtx<'_>) {
        let _ = ctx;
    }

    /// Called once per frame. Records queued on `ctx.canvas` are flushed and
    /// presented after this returns.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

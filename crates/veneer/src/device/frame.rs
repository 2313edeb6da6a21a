/// Surface texture and encoder for one overlay frame.
///
/// Dropped by [`Gpu::submit`](super::Gpu::submit), which also presents it;
/// the next frame cannot be acquired while this is alive.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What the renderer should do after failing to acquire a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was lost or outdated and has been configured again.
    Reconfigured,
    /// Acquisition timed out; drop this frame and try the next one.
    SkipFrame,
    /// Out of memory. The overlay cannot continue.
    Fatal,
}

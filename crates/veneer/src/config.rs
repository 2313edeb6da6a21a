use crate::atlas::AtlasConfig;
use crate::device::GpuInit;
use crate::mesh::DEFAULT_CIRCLE_SEGMENTS;
use crate::paint::Color;
use crate::scene::ResetPolicy;

/// Overlay window and renderer configuration.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub title: String,

    pub always_on_top: bool,
    pub transparent: bool,
    /// Lets mouse input pass through to windows underneath. While set, the
    /// overlay window itself receives no pointer events.
    pub click_through: bool,
    pub decorations: bool,

    /// Initial inner size in physical pixels; `None` covers the primary monitor.
    pub size: Option<(u32, u32)>,

    /// Frames to wait for display sync before presenting.
    ///
    /// `0` presents immediately, any other value waits for vsync.
    pub swap_interval: u32,

    pub clear_color: Color,
    pub circle_segments: u32,
    pub atlas: AtlasConfig,
    pub reset_policy: ResetPolicy,
    pub gpu: GpuInit,
}

impl OverlayConfig {
    /// Present mode requested for the configured swap interval.
    pub fn present_mode(&self) -> wgpu::PresentMode {
        match self.swap_interval {
            0 => wgpu::PresentMode::Immediate,
            _ => wgpu::PresentMode::Fifo,
        }
    }

    /// GPU settings with the present mode and alpha preference derived from
    /// this config.
    pub fn gpu_init(&self) -> GpuInit {
        let mut init = self.gpu.clone();
        init.present_mode = self.present_mode();
        if self.transparent && init.alpha_mode.is_none() {
            init.alpha_mode = Some(wgpu::CompositeAlphaMode::PreMultiplied);
        }
        init
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title: "veneer".to_string(),
            always_on_top: true,
            transparent: true,
            click_through: true,
            decorations: false,
            size: None,
            swap_interval: 0,
            clear_color: Color::TRANSPARENT,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            atlas: AtlasConfig::default(),
            reset_policy: ResetPolicy::default(),
            gpu: GpuInit::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_interval_selects_present_mode() {
        let mut c = OverlayConfig::default();
        assert_eq!(c.present_mode(), wgpu::PresentMode::Immediate);
        c.swap_interval = 1;
        assert_eq!(c.present_mode(), wgpu::PresentMode::Fifo);
    }

    #[test]
    fn transparent_overlay_asks_for_premultiplied_alpha() {
        let c = OverlayConfig::default();
        assert_eq!(c.gpu_init().alpha_mode, Some(wgpu::CompositeAlphaMode::PreMultiplied));

        let opaque = OverlayConfig { transparent: false, ..Default::default() };
        assert_eq!(opaque.gpu_init().alpha_mode, None);
    }
}

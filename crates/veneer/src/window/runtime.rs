use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

use crate::config::OverlayConfig;
use crate::coords::Viewport;
use crate::core::{AppControl, FrameCtx, OverlayApp};
use crate::device::Gpu;
use crate::input::platform::winit::translate_window_event;
use crate::input::InputState;
use crate::render::gpu::GpuRenderer;
use crate::render::{FrameRenderer, FrameSink};
use crate::resources::FontLoader;
use crate::scene::Canvas;
use crate::time::FrameClock;

/// Entry point for the overlay runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the overlay window and drives `app` until it returns
    /// [`AppControl::Exit`] or the window is closed.
    ///
    /// GPU initialization and unrecoverable surface failures end the loop and
    /// are returned as errors.
    pub fn run<A>(config: OverlayConfig, app: A) -> Result<()>
    where
        A: OverlayApp + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct OverlayEntry {
    canvas: Canvas,
    frames: FrameRenderer,
    fonts: FontLoader,
    input: InputState,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    renderer: GpuRenderer<'this>,
}

struct AppState<A>
where
    A: OverlayApp + 'static,
{
    config: OverlayConfig,
    app: A,

    entry: Option<OverlayEntry>,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: OverlayApp + 'static,
{
    fn new(config: OverlayConfig, app: A) -> Self {
        Self {
            config,
            app,
            entry: None,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.entry = None;
        event_loop.exit();
    }

    fn window_attributes(&self, event_loop: &ActiveEventLoop) -> WindowAttributes {
        let config = &self.config;
        let level = if config.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };

        let mut attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_transparent(config.transparent)
            .with_decorations(config.decorations)
            .with_window_level(level);

        match config.size {
            Some((w, h)) => {
                attrs = attrs.with_inner_size(PhysicalSize::new(w.max(1), h.max(1)));
            }
            None => {
                if let Some(monitor) = event_loop.primary_monitor() {
                    attrs = attrs
                        .with_inner_size(monitor.size())
                        .with_position(monitor.position());
                }
            }
        }

        attrs
    }

    fn create_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<OverlayEntry> {
        let window = event_loop
            .create_window(self.window_attributes(event_loop))
            .context("failed to create overlay window")?;

        if self.config.click_through {
            if let Err(e) = window.set_cursor_hittest(false) {
                log::warn!("click-through unavailable on this platform: {e}");
            }
        }

        let gpu_init = self.config.gpu_init();
        let circle_segments = self.config.circle_segments;
        let mut atlas = self.config.atlas;
        atlas.max_dimension = atlas.max_dimension.min(gpu_init.required_limits.max_texture_dimension_2d);

        OverlayEntryTryBuilder {
            canvas: Canvas::new(),
            frames: FrameRenderer::new(self.config.reset_policy, self.config.clear_color),
            fonts: FontLoader::new(atlas),
            input: InputState::default(),
            clock: FrameClock::new(),
            window,
            renderer_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed")
                    .and_then(|gpu| GpuRenderer::new(gpu, circle_segments))
            },
        }
        .try_build()
    }

    /// Runs the app's one-time setup against a fresh entry.
    fn setup(app: &mut A, entry: &mut OverlayEntry) {
        entry.with_mut(|f| {
            let time = f.clock.tick();
            let screen = f.renderer.viewport();
            let monitor = monitor_viewport(f.window);
            let mut ctx = FrameCtx::new(f.canvas, f.renderer, f.fonts, f.input, time, screen, monitor);
            app.setup(&mut ctx);
            // Asset loading should not show up as the first frame's delta.
            f.clock.reset();
        });
    }

    /// Drives one frame: tick, app callback, flush and present.
    fn redraw(&mut self) -> Result<AppControl> {
        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else {
            return Ok(AppControl::Continue);
        };

        entry.with_mut(|f| -> Result<AppControl> {
            let time = f.clock.tick();
            let screen = f.renderer.viewport();
            let monitor = monitor_viewport(f.window);

            let control = {
                let mut ctx = FrameCtx::new(f.canvas, f.renderer, f.fonts, f.input, time, screen, monitor);
                app.on_frame(&mut ctx)
            };

            f.window.pre_present_notify();
            let stats = f.frames.flush(f.canvas, f.renderer)?;
            if time.frame_index % 600 == 0 {
                log::debug!(
                    "frame {}: {} draws, {} skipped, {} dynamic vertices, {:.0} fps",
                    time.frame_index,
                    stats.draws,
                    stats.skipped,
                    stats.dynamic_vertices,
                    time.fps(),
                );
            }
            Ok(control)
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if let Some(entry) = self.entry.as_mut() {
            entry.with_renderer_mut(|r| r.gpu_mut().resize(size));
            entry.with_window(|w| w.request_redraw());
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: OverlayApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.failure.is_some() {
            return;
        }

        let mut entry = match self.create_entry(event_loop) {
            Ok(entry) => entry,
            Err(e) => return self.fail(event_loop, e),
        };

        Self::setup(&mut self.app, &mut entry);
        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Overlays redraw continuously.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            entry.with_input_mut(|input| input.apply_event(ev));
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("overlay window closed");
                self.entry = None;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = entry.with_window(|w| w.inner_size());
                self.resize(size);
            }

            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => {
                    log::info!("overlay stopped by application");
                    self.entry = None;
                    event_loop.exit();
                }
                Err(e) => self.fail(event_loop, e.context("frame failed")),
            },

            _ => {}
        }
    }
}

fn monitor_viewport(window: &Window) -> Option<Viewport> {
    window.current_monitor().map(|m| {
        let size = m.size();
        Viewport::new(size.width as f32, size.height as f32)
    })
}

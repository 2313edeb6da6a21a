use veneer::input::{Key, MouseButton};
use veneer::logging::{init_logging, LoggingConfig};
use veneer::{AppControl, FrameCtx, OverlayApp, OverlayConfig, ProgressDirection, Runtime, TextureId};

const FONT_CANDIDATES: [&str; 5] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Heads-up display exercising every primitive kind.
///
/// `Esc` quits; holding the left mouse button (with click-through disabled)
/// switches shapes to wireframe.
struct Hud {
    font: TextureId,
    load: f32,
}

impl OverlayApp for Hud {
    fn setup(&mut self, ctx: &mut FrameCtx<'_>) {
        self.font = FONT_CANDIDATES
            .iter()
            .filter(|p| std::path::Path::new(p).exists())
            .map(|p| ctx.load_font(p, 16.0))
            .find(|id| !id.is_unset())
            .unwrap_or(TextureId::UNSET);

        if self.font.is_unset() {
            log::warn!("no system font found; text will not be drawn");
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        let t = ctx.time();
        let fps = ctx.fps();
        let screen = ctx.screen_size();
        let wireframe = ctx.input.button_down(MouseButton::Left);
        self.load = 0.5 + 0.5 * (t * 0.7).sin();

        let c = &mut *ctx.canvas;
        c.set_mode(!wireframe);

        // ── status panel ──────────────────────────────────────────────────
        c.translate(20.0, 20.0);

        c.set_color(0, 0, 0, 140);
        c.draw_rect(0.0, 0.0, 260.0, 120.0);
        c.set_color(0, 200, 255, 255);
        c.draw_outline_rect(0.0, 0.0, 260.0, 120.0);

        c.set_color(255, 255, 255, 255);
        c.draw_text(12.0, 12.0, 14.0, 0.0, 0.0, self.font, 0.6, &format!("FPS {fps:>5.0}"));
        c.set_color(180, 180, 180, 255);
        c.draw_text(12.0, 36.0, 12.0, 0.0, 0.0, self.font, 0.6, &format!("uptime {t:>7.1}s\nscreen {}x{}", screen.width, screen.height));

        c.set_color(60, 220, 120, 255);
        c.draw_progress_bar(12.0, 90.0, 236.0, 14.0, self.load, 1.0, ProgressDirection::Right);

        // ── shapes ────────────────────────────────────────────────────────
        c.translate(0.0, 0.0);
        let cx = screen.width * 0.5;
        let cy = screen.height * 0.5;

        c.set_color(255, 80, 80, 200);
        c.anchor_point(0.5, 0.5);
        c.rotate_rad(t);
        c.draw_rect(cx - 150.0, cy, 80.0, 80.0);

        c.set_color(255, 200, 0, 200);
        c.anchor_point(0.5, 0.5);
        c.draw_circle(cx, cy, 90.0, 90.0);

        c.set_color(120, 120, 255, 220);
        c.rotate_deg(t * 45.0);
        c.draw_polygon(cx + 120.0, cy - 40.0, cx + 190.0, cy + 40.0, cx + 120.0, cy + 40.0);

        c.set_color(255, 255, 255, 160);
        c.draw_line(cx - 200.0, cy + 80.0, cx + 200.0, cy + 80.0);

        c.set_color(255, 255, 255, 200);
        c.anchor_point(0.5, 0.0);
        c.draw_progress_bar(cx, cy + 110.0, 300.0, 10.0, 1.0 - self.load, 1.0, ProgressDirection::Center);

        AppControl::Continue
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = OverlayConfig {
        title: "veneer hud".to_string(),
        ..Default::default()
    };

    Runtime::run(config, Hud { font: TextureId::UNSET, load: 0.0 })
}

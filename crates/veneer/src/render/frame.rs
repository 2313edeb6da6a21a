use anyhow::Result;

use crate::coords::{Vec2, Viewport};
use crate::mesh;
use crate::paint::Color;
use crate::scene::{Canvas, DrawSnapshot, Primitive, PrimitiveKind, ResetPolicy};

use super::transform::{projection, ModelTransform};
use super::{DrawCall, FramePlan, FrameSink, MeshSource};

/// Per-flush counters.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    /// Draw calls handed to the sink.
    pub draws: usize,
    /// Records dropped for an unset texture or unknown font.
    pub skipped: usize,
    /// Dynamic vertices generated this frame.
    pub dynamic_vertices: usize,
}

/// Drains a [`Canvas`] into a [`FramePlan`] once per frame.
///
/// Records are visited kind by kind in [`PrimitiveKind::FLUSH_ORDER`]; the
/// z value captured at enqueue time only affects depth.
#[derive(Debug, Default)]
pub struct FrameRenderer {
    plan: FramePlan,
    reset_policy: ResetPolicy,
    clear_color: Color,
}

impl FrameRenderer {
    pub fn new(reset_policy: ResetPolicy, clear_color: Color) -> Self {
        Self {
            plan: FramePlan::default(),
            reset_policy,
            clear_color,
        }
    }

    #[inline]
    pub fn reset_policy(&self) -> &ResetPolicy {
        &self.reset_policy
    }

    pub fn set_reset_policy(&mut self, policy: ResetPolicy) {
        self.reset_policy = policy;
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// The plan built by the last flush.
    #[inline]
    pub fn last_plan(&self) -> &FramePlan {
        &self.plan
    }

    /// Builds the frame, presents it through `sink`, then empties every scene
    /// buffer and applies the reset policy.
    ///
    /// Buffers are cleared even when presenting fails.
    pub fn flush(&mut self, canvas: &mut Canvas, sink: &mut impl FrameSink) -> Result<FrameStats> {
        let stats = self.build(canvas, sink.viewport());
        let presented = sink.present(&self.plan);
        canvas.end_frame(&self.reset_policy);
        presented.map(|()| stats)
    }

    /// Builds the plan for `canvas` without presenting or clearing it.
    pub fn build(&mut self, canvas: &Canvas, viewport: Viewport) -> FrameStats {
        self.plan.clear();
        self.plan.viewport = viewport;
        self.plan.projection = projection(viewport);
        self.plan.clear_color = self.clear_color;

        let mut stats = FrameStats::default();
        for kind in PrimitiveKind::FLUSH_ORDER {
            for record in canvas.buffers().of_kind(kind) {
                match self.plan_record(canvas, record) {
                    Some(draw) => {
                        self.plan.draws.push(draw);
                        stats.draws += 1;
                    }
                    None => stats.skipped += 1,
                }
            }
        }
        stats.dynamic_vertices = self.plan.vertices.len();

        log::trace!(
            "frame plan: {} draws, {} skipped, {} dynamic vertices",
            stats.draws,
            stats.skipped,
            stats.dynamic_vertices
        );
        stats
    }

    fn plan_record(&mut self, canvas: &Canvas, record: &Primitive) -> Option<DrawCall> {
        let kind = record.kind();
        let (model, mesh, texture) = match record {
            Primitive::Line(l) => {
                let verts = mesh::line(l.x1, l.y1, l.x2, l.y2);
                let src = self.plan.push_vertices(&verts);
                (ModelTransform::absolute(&l.state, 0.0), src, None)
            }
            Primitive::OutlineRect(r) | Primitive::Rect(r) => (
                ModelTransform::boxed(Vec2::new(r.x, r.y), Vec2::new(r.width, r.height), &r.state),
                MeshSource::Static(kind),
                None,
            ),
            Primitive::Circle(c) => (
                ModelTransform::boxed(Vec2::new(c.x, c.y), Vec2::new(c.scale_x, c.scale_y), &c.state),
                MeshSource::Static(kind),
                None,
            ),
            Primitive::Polygon(p) => {
                let verts = mesh::polygon(p.points[0], p.points[1], p.points[2]);
                let src = self.plan.push_vertices(&verts);
                (ModelTransform::absolute(&p.state, p.state.rotation), src, None)
            }
            Primitive::Image(i) => {
                if i.texture.is_unset() {
                    log::debug!("skipping image with unset texture");
                    return None;
                }
                (
                    ModelTransform::boxed(Vec2::new(i.x, i.y), Vec2::new(i.width, i.height), &i.state),
                    MeshSource::Static(kind),
                    Some(i.texture),
                )
            }
            Primitive::Text(t) => {
                let Some(grid) = canvas.font_grid(t.font) else {
                    log::debug!("skipping text with unknown font {:?}", t.font);
                    return None;
                };
                let verts = mesh::text(&t.text, grid, t.interval);
                let src = self.plan.push_vertices(&verts);
                (text_transform(t.x, t.y, t.size, t.width, t.height, t.interval, &t.text, &t.state), src, Some(t.font))
            }
        };

        let state = record.state();
        Some(DrawCall {
            kind,
            topology: kind.topology(),
            mesh,
            fill: state.fill || kind.topology().is_lines(),
            model: model.matrix(),
            color: state.color,
            texture,
        })
    }
}

/// Text scales each unit glyph cell by `(width + size, height + size)` and
/// anchors against the whole block: `max_cols · interval` cells wide and
/// one cell per line tall.
#[allow(clippy::too_many_arguments)]
fn text_transform(
    x: f32,
    y: f32,
    size: f32,
    width: f32,
    height: f32,
    interval: f32,
    text: &str,
    state: &DrawSnapshot,
) -> ModelTransform {
    let extent = mesh::text_extent(text);
    let scale = Vec2::new(width + size, height + size);
    let mut t = ModelTransform::boxed(Vec2::new(x, y), scale, state);
    t.extent = Vec2::new(scale.x * extent.max_cols as f32 * interval, scale.y * extent.lines as f32);
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::{AtlasConfig, GlyphGrid};
    use crate::scene::{TextureId, ZIndex};
    use glam::Vec3;

    fn build(canvas: &Canvas) -> (FrameRenderer, FrameStats) {
        let mut r = FrameRenderer::default();
        let stats = r.build(canvas, Viewport::new(800.0, 600.0));
        (r, stats)
    }

    #[test]
    fn draws_follow_flush_order() {
        let mut c = Canvas::new();
        c.draw_circle(0.0, 0.0, 5.0, 5.0);
        c.draw_rect(0.0, 0.0, 10.0, 10.0);
        c.draw_line(0.0, 0.0, 1.0, 1.0);

        let (r, stats) = build(&c);
        let kinds: Vec<_> = r.last_plan().draws.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, [PrimitiveKind::Line, PrimitiveKind::Rect, PrimitiveKind::Circle]);
        assert_eq!(stats.draws, 3);
    }

    #[test]
    fn unset_image_is_skipped() {
        let mut c = Canvas::new();
        c.draw_image(0.0, 0.0, 10.0, 10.0, TextureId::UNSET);
        c.draw_image(0.0, 0.0, 10.0, 10.0, TextureId(3));
        let (r, stats) = build(&c);
        assert_eq!(stats.skipped, 1);
        assert_eq!(r.last_plan().draws[0].texture, Some(TextureId(3)));
    }

    #[test]
    fn text_needs_registered_font() {
        let mut c = Canvas::new();
        c.draw_text(0.0, 0.0, 12.0, 0.0, 0.0, TextureId(7), 1.0, "ab");
        let (_, stats) = build(&c);
        assert_eq!(stats.skipped, 1);

        let grid = GlyphGrid::from_config(&AtlasConfig::default(), 12.0).unwrap();
        c.register_font(TextureId(7), grid);
        let (r, stats) = build(&c);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.dynamic_vertices, 12);
        assert_eq!(r.last_plan().draws[0].mesh, MeshSource::Dynamic { first: 0, count: 12 });
    }

    #[test]
    fn text_scale_adds_size() {
        let mut c = Canvas::new();
        c.register_font(TextureId(1), GlyphGrid::from_config(&AtlasConfig::default(), 16.0).unwrap());
        c.draw_text(100.0, 50.0, 16.0, 4.0, 2.0, TextureId(1), 0.5, "abcd\nx");

        let (r, _) = build(&c);
        let m = r.last_plan().draws[0].model;
        // Glyph-unit (1, 1) lands one scaled cell away from the origin.
        let p = m.transform_point3(Vec3::new(1.0, 1.0, 0.0));
        assert!((p.x - 120.0).abs() < 1e-4 && (p.y - 68.0).abs() < 1e-4);
    }

    #[test]
    fn text_anchor_spans_block() {
        let mut c = Canvas::new();
        c.register_font(TextureId(1), GlyphGrid::from_config(&AtlasConfig::default(), 10.0).unwrap());
        c.anchor_point(1.0, 1.0);
        c.draw_text(0.0, 0.0, 10.0, 0.0, 0.0, TextureId(1), 0.5, "abcd\nx");

        let (r, _) = build(&c);
        let p = r.last_plan().draws[0].model.transform_point3(Vec3::ZERO);
        // 4 columns * 0.5 interval * 10 px, 2 lines * 10 px.
        assert!((p.x + 20.0).abs() < 1e-4 && (p.y + 20.0).abs() < 1e-4);
    }

    #[test]
    fn line_ignores_rotation_polygon_uses_it() {
        let mut c = Canvas::new();
        c.rotate_deg(90.0);
        c.draw_line(10.0, 0.0, 20.0, 0.0);
        c.draw_polygon(10.0, 0.0, 0.0, 0.0, 0.0, 10.0);

        let (r, _) = build(&c);
        let line = r.last_plan().draws_of(PrimitiveKind::Line).next().unwrap();
        let poly = r.last_plan().draws_of(PrimitiveKind::Polygon).next().unwrap();
        let lp = line.model.transform_point3(Vec3::new(10.0, 0.0, 0.0));
        let pp = poly.model.transform_point3(Vec3::new(10.0, 0.0, 0.0));
        assert!((lp.x - 10.0).abs() < 1e-4 && lp.y.abs() < 1e-4);
        assert!(pp.x.abs() < 1e-4 && (pp.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn wireframe_flag_reaches_triangle_draws_only() {
        let mut c = Canvas::new();
        c.set_wireframe_mode();
        c.draw_rect(0.0, 0.0, 1.0, 1.0);
        c.draw_outline_rect(0.0, 0.0, 1.0, 1.0);
        let (r, _) = build(&c);
        assert!(!r.last_plan().draws_of(PrimitiveKind::Rect).next().unwrap().fill);
        assert!(r.last_plan().draws_of(PrimitiveKind::OutlineRect).next().unwrap().fill);
    }

    #[test]
    fn depth_comes_from_captured_z() {
        let mut c = Canvas::new();
        c.draw_rect(0.0, 0.0, 1.0, 1.0);
        c.draw_rect(0.0, 0.0, 1.0, 1.0);
        let (r, _) = build(&c);
        let z: Vec<f32> = r.last_plan().draws.iter().map(|d| d.model.w_axis.z).collect();
        assert_eq!(z, [ZIndex(1).depth(), ZIndex(2).depth()]);
    }

}

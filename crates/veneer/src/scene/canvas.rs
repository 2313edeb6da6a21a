use std::collections::HashMap;

use crate::atlas::GlyphGrid;
use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawSnapshot, DrawState, Primitive, ResetPolicy, SceneBuffers, TextureId};

/// Per-frame drawing context.
///
/// Owns the current draw state, the scene buffers and the table of loaded
/// font atlases. State setters take effect for every primitive enqueued
/// after them; the `draw_*` methods (one module per shape under
/// `scene::shapes`) snapshot the state and queue a record.
#[derive(Debug, Default)]
pub struct Canvas {
    state: DrawState,
    buffers: SceneBuffers,
    fonts: HashMap<TextureId, GlyphGrid>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    #[inline]
    pub fn buffers(&self) -> &SceneBuffers {
        &self.buffers
    }

    // ── state setters ─────────────────────────────────────────────────────

    /// Sets the current color from 8-bit channels.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.state.color = Color::from_rgba8(r, g, b, a);
    }

    pub fn set_color_f32(&mut self, color: Color) {
        self.state.color = color;
    }

    pub fn reset_color(&mut self) {
        self.state.color = Color::WHITE;
    }

    /// Sets (does not accumulate) the translation applied to later primitives.
    pub fn translate(&mut self, x: f32, y: f32) {
        self.state.translation = Vec2::new(x, y);
    }

    pub fn rotate_deg(&mut self, degrees: f32) {
        self.state.rotation = degrees.to_radians();
    }

    pub fn rotate_rad(&mut self, radians: f32) {
        self.state.rotation = radians;
    }

    pub fn reset_rotation(&mut self) {
        self.state.rotation = 0.0;
    }

    /// Sets the pivot as a fraction of each primitive's own size.
    pub fn anchor_point(&mut self, x: f32, y: f32) {
        self.state.anchor = Vec2::new(x, y);
    }

    pub fn reset_anchor_point(&mut self) {
        self.state.anchor = Vec2::zero();
    }

    pub fn set_fill_mode(&mut self) {
        self.state.fill = true;
    }

    pub fn set_wireframe_mode(&mut self) {
        self.state.fill = false;
    }

    pub fn set_mode(&mut self, fill: bool) {
        self.state.fill = fill;
    }

    // ── fonts ─────────────────────────────────────────────────────────────

    pub fn register_font(&mut self, id: TextureId, grid: GlyphGrid) {
        self.fonts.insert(id, grid);
    }

    pub fn unregister_font(&mut self, id: TextureId) -> Option<GlyphGrid> {
        self.fonts.remove(&id)
    }

    #[inline]
    pub fn font_grid(&self, id: TextureId) -> Option<&GlyphGrid> {
        self.fonts.get(&id)
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    #[inline]
    pub(crate) fn snapshot(&mut self) -> DrawSnapshot {
        self.state.snapshot()
    }

    #[inline]
    pub(crate) fn push(&mut self, primitive: Primitive) {
        self.buffers.push(primitive);
    }

    /// Drops every queued record and applies `policy` to the draw state.
    pub fn end_frame(&mut self, policy: &ResetPolicy) {
        self.buffers.clear();
        self.state.reset_after_flush(policy);
    }
}

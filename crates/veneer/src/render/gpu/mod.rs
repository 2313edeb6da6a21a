//! wgpu implementation of the frame and texture seams.
//!
//! One WGSL program draws every kind. Per-draw model/color/texture-flag
//! uniforms live in a single buffer addressed with dynamic offsets; meshes
//! regenerated this frame share one vertex buffer. Both are written before
//! the render pass is recorded.

mod bindings;
mod pipeline;
mod textures;
mod uniforms;

use std::num::NonZeroU64;

use anyhow::{bail, Result};

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::mesh::DEFAULT_CIRCLE_SEGMENTS;
use crate::scene::TextureId;

use super::{FramePlan, FrameSink, MeshSource, TextureError, TextureFilter, TextureStore};
use bindings::{DynamicVertexBuffer, KindBindings};
use pipeline::{PipelineKey, PipelineSet};
use textures::TextureRegistry;
use uniforms::{CameraUniform, DrawUniform, DrawUniformBuffer};

/// Renders [`FramePlan`]s to a window surface and owns sampled textures.
pub struct GpuRenderer<'w> {
    gpu: Gpu<'w>,
    pipelines: PipelineSet,
    kinds: Vec<KindBindings>,
    dynamic: DynamicVertexBuffer,

    camera_ubo: wgpu::Buffer,
    draw_ubo: DrawUniformBuffer,
    frame_bind_group: Option<wgpu::BindGroup>,
    draw_offsets: Vec<u32>,

    textures: TextureRegistry,

    warned_wireframe: bool,
}

impl<'w> GpuRenderer<'w> {
    /// Builds the program, static meshes and fallback texture.
    ///
    /// Shader and pipeline validation errors are captured and returned; the
    /// renderer is unusable without its program.
    pub fn new(gpu: Gpu<'w>, circle_segments: u32) -> Result<Self> {
        let device = gpu.device().clone();
        let queue = gpu.queue().clone();

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipelines = PipelineSet::new(&device, gpu.surface_format());
        let segments = if circle_segments < 3 { DEFAULT_CIRCLE_SEGMENTS } else { circle_segments };
        let kinds = KindBindings::create_all(&device, segments);
        let camera_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("veneer camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let textures = TextureRegistry::new(&device, &queue, pipelines.texture_layout.clone());
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;

        if let Some(err) = pollster::block_on(scope.pop()) {
            bail!("overlay pipeline creation failed: {err}");
        }

        if !pipelines.wireframe_supported() {
            log::info!("POLYGON_MODE_LINE unavailable; wireframe draws will be filled");
        }

        Ok(Self {
            gpu,
            pipelines,
            kinds,
            dynamic: DynamicVertexBuffer::default(),
            camera_ubo,
            draw_ubo: DrawUniformBuffer::new(alignment),
            frame_bind_group: None,
            draw_offsets: Vec::new(),
            textures,
            warned_wireframe: false,
        })
    }

    #[inline]
    pub fn gpu(&self) -> &Gpu<'w> {
        &self.gpu
    }

    #[inline]
    pub fn gpu_mut(&mut self) -> &mut Gpu<'w> {
        &mut self.gpu
    }

    /// Writes camera, per-draw uniforms and dynamic vertices for `plan`.
    fn upload_frame_data(&mut self, plan: &FramePlan) {
        let device = self.gpu.device();
        let queue = self.gpu.queue();

        queue.write_buffer(&self.camera_ubo, 0, bytemuck::bytes_of(&CameraUniform::new(plan.projection)));

        self.draw_ubo.clear();
        self.draw_offsets.clear();
        for draw in &plan.draws {
            let u = DrawUniform::new(draw.model, draw.color, draw.texture.is_some());
            self.draw_offsets.push(self.draw_ubo.push(&u));
        }
        let recreated = self.draw_ubo.upload(device, queue);

        if recreated || self.frame_bind_group.is_none() {
            self.frame_bind_group = self.draw_ubo.buffer().map(|draw_buf| {
                device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("veneer frame bind group"),
                    layout: &self.pipelines.frame_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: self.camera_ubo.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                                buffer: draw_buf,
                                offset: 0,
                                size: NonZeroU64::new(std::mem::size_of::<DrawUniform>() as u64),
                            }),
                        },
                    ],
                })
            });
        }

        self.dynamic.upload(device, queue, &plan.vertices);
    }

    fn record_pass(&mut self, plan: &FramePlan, frame: &mut crate::device::GpuFrame) {
        let Some(frame_bg) = self.frame_bind_group.as_ref() else { return };

        let c = plan.clear_color;
        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("veneer overlay pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: c.r as f64,
                        g: c.g as f64,
                        b: c.b as f64,
                        a: c.a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: self.gpu.depth_view(),
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let wireframe = self.pipelines.wireframe_supported();
        let mut bound: Option<PipelineKey> = None;

        for (draw, offset) in plan.draws.iter().zip(&self.draw_offsets) {
            let (key, fell_back) = PipelineKey::for_draw(draw.topology, draw.fill, wireframe);
            if fell_back && !self.warned_wireframe {
                log::warn!("wireframe mode requested but unsupported by the device; drawing filled");
                self.warned_wireframe = true;
            }

            let (vbo, range) = match draw.mesh {
                MeshSource::Static(kind) => {
                    let Some((vbo, count)) = self.kinds[kind.index()].static_mesh() else { continue };
                    (vbo, 0..count)
                }
                MeshSource::Dynamic { first, count } => {
                    let Some(vbo) = self.dynamic.buffer() else { continue };
                    (vbo, first..first + count)
                }
            };
            if range.is_empty() {
                continue;
            }

            let texture_bg = match draw.texture {
                Some(id) => match self.textures.bind_group(id) {
                    Some(bg) => bg,
                    None => {
                        log::debug!("skipping draw with released texture {id:?}");
                        continue;
                    }
                },
                None => self.textures.white(),
            };

            if bound != Some(key) {
                let Some(pipeline) = self.pipelines.get(key) else { continue };
                rpass.set_pipeline(pipeline);
                bound = Some(key);
            }
            rpass.set_bind_group(0, frame_bg, &[*offset]);
            rpass.set_bind_group(1, texture_bg, &[]);
            rpass.set_vertex_buffer(0, vbo.slice(..));
            rpass.draw(range, 0..1);
        }
    }
}

impl FrameSink for GpuRenderer<'_> {
    fn viewport(&self) -> Viewport {
        let size = self.gpu.size();
        Viewport::new(size.width as f32, size.height as f32)
    }

    fn present(&mut self, plan: &FramePlan) -> Result<()> {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            // Minimized; nothing to present.
            return Ok(());
        }

        self.upload_frame_data(plan);

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(e) => {
                return match self.gpu.handle_surface_error(e) {
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => Ok(()),
                    SurfaceErrorAction::Fatal => bail!("surface error is unrecoverable"),
                };
            }
        };

        self.record_pass(plan, &mut frame);
        self.gpu.submit(frame);
        Ok(())
    }
}

impl TextureStore for GpuRenderer<'_> {
    fn upload_rgba(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<TextureId, TextureError> {
        self.textures
            .upload(self.gpu.device(), self.gpu.queue(), width, height, pixels, TextureFilter::Linear)
    }

    fn upload_atlas(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<TextureId, TextureError> {
        self.textures
            .upload(self.gpu.device(), self.gpu.queue(), width, height, pixels, TextureFilter::Nearest)
    }

    fn release(&mut self, id: TextureId) {
        self.textures.release(id);
    }
}

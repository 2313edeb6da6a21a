use std::collections::HashMap;
use std::num::NonZeroU64;

use crate::device::DEPTH_FORMAT;
use crate::mesh::{Topology, Vertex};

use super::uniforms::{CameraUniform, DrawUniform};

/// wgpu-side pipeline variant.
///
/// Fans are uploaded as triangle lists and loops as closed line strips, so
/// four variants cover every kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(super) enum PipelineKey {
    Lines,
    LineStrip,
    Triangles,
    TrianglesWireframe,
}

impl PipelineKey {
    pub(super) const ALL: [PipelineKey; 4] = [
        PipelineKey::Lines,
        PipelineKey::LineStrip,
        PipelineKey::Triangles,
        PipelineKey::TrianglesWireframe,
    ];

    /// Picks the variant for a draw. The second value is `true` when
    /// wireframe was requested but is unavailable and fill is used instead.
    pub(super) fn for_draw(topology: Topology, fill: bool, wireframe_supported: bool) -> (Self, bool) {
        match topology {
            Topology::LineList => (PipelineKey::Lines, false),
            Topology::LineLoop => (PipelineKey::LineStrip, false),
            Topology::TriangleList | Topology::TriangleFan => match (fill, wireframe_supported) {
                (true, _) => (PipelineKey::Triangles, false),
                (false, true) => (PipelineKey::TrianglesWireframe, false),
                (false, false) => (PipelineKey::Triangles, true),
            },
        }
    }

    fn primitive(self) -> (wgpu::PrimitiveTopology, wgpu::PolygonMode) {
        match self {
            PipelineKey::Lines => (wgpu::PrimitiveTopology::LineList, wgpu::PolygonMode::Fill),
            PipelineKey::LineStrip => (wgpu::PrimitiveTopology::LineStrip, wgpu::PolygonMode::Fill),
            PipelineKey::Triangles => (wgpu::PrimitiveTopology::TriangleList, wgpu::PolygonMode::Fill),
            PipelineKey::TrianglesWireframe => {
                (wgpu::PrimitiveTopology::TriangleList, wgpu::PolygonMode::Line)
            }
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x2, // pos
    1 => Float32x2  // uv
];

pub(super) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

/// The overlay program, its bind group layouts and every pipeline variant.
pub(super) struct PipelineSet {
    pub frame_layout: wgpu::BindGroupLayout,
    pub texture_layout: wgpu::BindGroupLayout,
    pipelines: HashMap<PipelineKey, wgpu::RenderPipeline>,
    wireframe_supported: bool,
}

impl PipelineSet {
    pub(super) fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("veneer overlay shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/overlay.wgsl").into()),
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("veneer frame bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(std::mem::size_of::<CameraUniform>() as u64),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: NonZeroU64::new(std::mem::size_of::<DrawUniform>() as u64),
                    },
                    count: None,
                },
            ],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("veneer texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("veneer pipeline layout"),
            bind_group_layouts: &[&frame_layout, &texture_layout],
            immediate_size: 0,
        });

        let wireframe_supported = device.features().contains(wgpu::Features::POLYGON_MODE_LINE);

        let pipelines = PipelineKey::ALL
            .into_iter()
            .filter(|k| *k != PipelineKey::TrianglesWireframe || wireframe_supported)
            .map(|k| (k, create_pipeline(device, &layout, &shader, format, k)))
            .collect();

        Self {
            frame_layout,
            texture_layout,
            pipelines,
            wireframe_supported,
        }
    }

    #[inline]
    pub(super) fn wireframe_supported(&self) -> bool {
        self.wireframe_supported
    }

    #[inline]
    pub(super) fn get(&self, key: PipelineKey) -> Option<&wgpu::RenderPipeline> {
        self.pipelines.get(&key)
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    key: PipelineKey,
) -> wgpu::RenderPipeline {
    let (topology, polygon_mode) = key.primitive();

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("veneer overlay pipeline"),
        layout: Some(layout),

        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[vertex_layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),

        multiview_mask: None,
        cache: None,
    })
}

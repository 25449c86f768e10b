use bytemuck::{Pod, Zeroable};

use super::{RenderCtx, RenderTarget};

/// Vertex format shared by every strip: NDC position + straight RGBA.
///
/// Layout (28 bytes):
///
///  offset  0  position  [f32; 3]   loc 0
///  offset 12  color     [f32; 4]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position (NDC)
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Fixed-capacity GPU vertex buffer backing one line strip.
///
/// The CPU side owns its vertex data and re-uploads a prefix every frame;
/// this type never grows. Uploads past capacity truncate, so no call here
/// can fail at runtime.
pub struct StripBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
}

impl StripBuffer {
    pub fn new(device: &wgpu::Device, capacity: usize, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<LineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self { buffer, capacity }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copies `vertices` into the buffer starting at offset 0.
    pub fn upload(&self, queue: &wgpu::Queue, vertices: &[LineVertex]) {
        let n = vertices.len().min(self.capacity);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&vertices[..n]));
    }
}

/// One strip draw: which buffer, and how many of its vertices.
pub struct StripDraw<'a> {
    pub buffer: &'a StripBuffer,
    pub vertex_count: u32,
}

/// Renderer for colored line strips.
///
/// The pipeline is built lazily and rebuilt if the surface format changes
/// (e.g. after the window moves to another monitor). No bind groups: the
/// vertex stage passes NDC positions straight through.
#[derive(Default)]
pub struct LineStripRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
}

impl LineStripRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `strips` in order over the current target contents.
    ///
    /// Strips with fewer than two vertices are skipped; a line strip only
    /// produces segments from the second vertex on.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        strips: &[StripDraw<'_>],
    ) {
        self.ensure_pipeline(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };

        if strips.iter().all(|s| s.vertex_count < 2) {
            return;
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("corda strip pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);

        for strip in strips {
            if strip.vertex_count < 2 {
                continue;
            }

            let count = strip.vertex_count.min(strip.buffer.capacity() as u32);
            rpass.set_vertex_buffer(0, strip.buffer.buffer.slice(..));
            rpass.draw(0..count, 0..1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("corda strip shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/strip.wgsl").into()),
        });

        // Geometry is pre-transformed; the layout carries no bindings.
        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("corda strip pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("corda strip pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[LineVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }
}

//! The render pass that draws the cube.
//!
//! # Architecture
//!
//! A single bind group (group 0) carries [`CubeUniforms`]: the
//! view-projection matrix, the model matrix built from the accumulated
//! translation, and the rainbow tint. Geometry lives in two buffers:
//!
//! - a vertex buffer of exactly eight [`Vertex`]es, rewritten every frame by
//!   [`CubePass::upload`] because the transform protocol moves the corners on
//!   the CPU
//! - a static index buffer holding [`CUBE_INDICES`]
//!
//! # Depth Buffer
//!
//! The pass owns a `Depth32Float` depth buffer. Call
//! [`CubePass::ensure_depth_size`] before drawing if the window may have been
//! resized.

use wgpu::util::DeviceExt;

use crate::cube::{CUBE_INDICES, CubeVertices, Vertex};
use crate::error::{Error, Result};
use crate::gpu::GpuContext;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Per-frame uniforms for the cube shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeUniforms {
    /// Projection * view, column-major.
    pub view_proj: [[f32; 4]; 4],
    /// Model matrix (the accumulated translation), column-major.
    pub model: [[f32; 4]; 4],
    /// RGB tint in `xyz`; `w` is padding.
    pub rainbow: [f32; 4],
}

/// Draws the cube with depth testing and back-face culling.
pub struct CubePass {
    pipeline: wgpu::RenderPipeline,
    pipeline_layout: wgpu::PipelineLayout,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    depth_view: wgpu::TextureView,
    depth_size: (u32, u32),
}

impl CubePass {
    /// Creates the pass, its buffers and a pipeline compiled from `shader`.
    pub fn new(gpu: &GpuContext, shader: &str, vertices: &CubeVertices) -> Result<Self> {
        let device = &gpu.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Cube Uniforms"),
            size: std::mem::size_of::<CubeUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Cube Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Cube Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Cube Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: vertices.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Index Buffer"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let pipeline = Self::build_pipeline(gpu, &pipeline_layout, shader)?;
        let depth_view = Self::create_depth_view(gpu);

        Ok(Self {
            pipeline,
            pipeline_layout,
            uniform_buffer,
            uniform_bind_group,
            vertex_buffer,
            index_buffer,
            depth_view,
            depth_size: (gpu.width(), gpu.height()),
        })
    }

    /// Compiles `shader` and builds the render pipeline.
    ///
    /// Validation errors are captured with an error scope and returned as
    /// [`Error::ShaderCompile`] instead of reaching the uncaptured-error
    /// handler.
    fn build_pipeline(
        gpu: &GpuContext,
        layout: &wgpu::PipelineLayout,
        shader: &str,
    ) -> Result<wgpu::RenderPipeline> {
        let device = &gpu.device;
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cube Shader"),
            source: wgpu::ShaderSource::Wgsl(shader.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cube Pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs"),
                buffers: &[Vertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                front_face: wgpu::FrontFace::Ccw,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        match pollster::block_on(device.pop_error_scope()) {
            Some(e) => Err(Error::ShaderCompile(e.to_string())),
            None => Ok(pipeline),
        }
    }

    /// Recompiles the pipeline from new shader source.
    ///
    /// On failure the previous pipeline stays in use and the error is returned.
    pub fn rebuild(&mut self, gpu: &GpuContext, shader: &str) -> Result<()> {
        self.pipeline = Self::build_pipeline(gpu, &self.pipeline_layout, shader)?;
        Ok(())
    }

    fn create_depth_view(gpu: &GpuContext) -> wgpu::TextureView {
        let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: gpu.width(),
                height: gpu.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Ensures the depth buffer matches the current screen size.
    pub fn ensure_depth_size(&mut self, gpu: &GpuContext) {
        if self.depth_size != (gpu.width(), gpu.height()) {
            self.depth_view = Self::create_depth_view(gpu);
            self.depth_size = (gpu.width(), gpu.height());
        }
    }

    /// Copies all eight vertices to the GPU.
    ///
    /// Must run after the frame's transforms and before [`draw`](Self::draw).
    pub fn upload(&self, gpu: &GpuContext, vertices: &CubeVertices) {
        gpu.queue.write_buffer(&self.vertex_buffer, 0, vertices.as_bytes());
    }

    /// Records the cube draw into `encoder`, clearing `target` to black first.
    pub fn draw(
        &self,
        gpu: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        uniforms: &CubeUniforms,
    ) {
        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Cube Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..CUBE_INDICES.len() as u32, 0, 0..1);
    }
}

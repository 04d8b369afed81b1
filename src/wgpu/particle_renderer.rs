use bytemuck::{cast_slice, Pod, Zeroable};
use wgpu::util::DeviceExt;
use wgpu::PipelineCompilationOptions;

use crate::choreography::{cytokine, Frame};
use crate::wgpu::Wgpu;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable, Default)]
pub struct ParticleVertex {
    position: [f32; 4],
    color: [f32; 4],
}

impl ParticleVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0=>Float32x4, 1=>Float32x4];

    fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<ParticleVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Draws the cytokine cloud as a point field, rewritten every frame into a
/// buffer sized once for the whole cloud.
pub struct ParticleRenderer {
    vertices: Vec<ParticleVertex>,
    render_pipeline: wgpu::RenderPipeline,
    buffer: wgpu::Buffer,
}

impl ParticleRenderer {
    pub fn new(wgpu: &Wgpu) -> Self {
        let vertices = vec![ParticleVertex::default(); cytokine::PARTICLE_COUNT];
        let buffer = wgpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Particle Buffer"),
                contents: cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });
        let pipeline_layout = wgpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Particle Pipeline Layout"),
                bind_group_layouts: &[&wgpu.uniform_bind_group_layout],
                push_constant_ranges: &[],
            });
        let render_pipeline = wgpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                cache: None,
                label: Some("Particle Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    compilation_options: PipelineCompilationOptions::default(),
                    module: wgpu.shader(),
                    entry_point: Some("particle_vertex"),
                    buffers: &[ParticleVertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    compilation_options: PipelineCompilationOptions::default(),
                    module: wgpu.shader(),
                    entry_point: Some("particle_fragment"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: wgpu.surface_configuration.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::PointList,
                    strip_index_format: None,
                    ..Default::default()
                },
                // Points read depth but never occlude the cells
                depth_stencil: Some(Wgpu::depth_stencil_state(false)),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            });
        Self {
            vertices,
            render_pipeline,
            buffer,
        }
    }

    pub fn update(&mut self, wgpu: &Wgpu, frame: &Frame) {
        self.vertices.clear();
        self.vertices
            .extend(frame.cloud_points.iter().map(|point| ParticleVertex {
                position: [point.x, point.y, point.z, 1.0],
                color: cytokine::COLOR,
            }));
        wgpu.queue
            .write_buffer(&self.buffer, 0, cast_slice(&self.vertices));
    }

    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.buffer.slice(..));
        render_pass.draw(0..self.vertices.len() as u32, 0..1);
    }
}

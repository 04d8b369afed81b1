use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;
use wgpu::PipelineCompilationOptions;

use crate::choreography::{fragment, nk_cell, t_cell, tumour, Frame};
use crate::wgpu::sphere::{sphere_mesh, SphereVertex};
use crate::wgpu::Wgpu;

// Instance data for one sphere: every cell body, antigen site, receptor
// nub, and debris fragment in the scene is an instance of the same mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CellInstance {
    position: [f32; 3],
    scale: f32,
    color: [f32; 4],
    // Emission tint with intensity in the fourth component
    emissive: [f32; 4],
}

pub struct CellRenderer {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: Option<wgpu::Buffer>,
    render_pipeline: wgpu::RenderPipeline,
    num_indices: u32,
    num_instances: u32,
}

impl CellRenderer {
    pub fn new(wgpu: &Wgpu) -> Self {
        let (vertices, indices) = sphere_mesh();
        let num_indices = indices.len() as u32;
        let vertex_buffer = wgpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sphere Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = wgpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sphere Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CellInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // scale
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32,
                },
                // color
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // emissive
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        };

        let pipeline_layout = wgpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Cell Pipeline Layout"),
                bind_group_layouts: &[&wgpu.uniform_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = wgpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                cache: None,
                label: Some("Cell Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    compilation_options: PipelineCompilationOptions::default(),
                    module: wgpu.shader(),
                    entry_point: Some("cell_vertex"),
                    buffers: &[SphereVertex::layout(), instance_layout],
                },
                fragment: Some(wgpu::FragmentState {
                    compilation_options: PipelineCompilationOptions::default(),
                    module: wgpu.shader(),
                    entry_point: Some("cell_fragment"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: wgpu.surface_configuration.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    ..Default::default()
                },
                depth_stencil: Some(Wgpu::depth_stencil_state(true)),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            });

        Self {
            vertex_buffer,
            index_buffer,
            instance_buffer: None,
            render_pipeline,
            num_indices,
            num_instances: 0,
        }
    }

    pub fn update(&mut self, wgpu: &Wgpu, frame: &Frame) {
        let instances = Self::instances(frame);
        self.num_instances = instances.len() as u32;
        if self.num_instances > 0 {
            self.instance_buffer = Some(wgpu.device.create_buffer_init(
                &wgpu::util::BufferInitDescriptor {
                    label: Some("Cell Instance Buffer"),
                    contents: bytemuck::cast_slice(&instances),
                    usage: wgpu::BufferUsages::VERTEX,
                },
            ));
        }
    }

    fn instances(frame: &Frame) -> Vec<CellInstance> {
        let mut instances = Vec::new();

        instances.push(CellInstance {
            position: [0.0, 0.0, 0.0],
            scale: frame.tumour.scale,
            color: frame.tumour.color,
            emissive: frame.tumour.emissive,
        });

        instances.extend(frame.antigens.iter().map(|site| CellInstance {
            position: (*site).into(),
            scale: frame.antigen_scale,
            color: tumour::ANTIGEN_COLOR,
            emissive: tumour::ANTIGEN_EMISSIVE,
        }));

        for pose in &frame.t_cells {
            instances.push(CellInstance {
                position: pose.body.into(),
                scale: t_cell::BODY_RADIUS,
                color: t_cell::BODY_COLOR,
                emissive: t_cell::BODY_EMISSIVE,
            });
            instances.push(CellInstance {
                position: pose.receptor.into(),
                scale: t_cell::RECEPTOR_RADIUS,
                color: t_cell::RECEPTOR_COLOR,
                emissive: t_cell::RECEPTOR_EMISSIVE,
            });
        }

        instances.extend(frame.nk_cells.iter().map(|position| CellInstance {
            position: (*position).into(),
            scale: nk_cell::BODY_RADIUS,
            color: nk_cell::BODY_COLOR,
            emissive: nk_cell::BODY_EMISSIVE,
        }));

        instances.extend(frame.fragments.iter().map(|pose| {
            let [red, green, blue, _] = fragment::COLOR;
            let [em_red, em_green, em_blue, em_intensity] = fragment::EMISSIVE;
            CellInstance {
                position: pose.position.into(),
                scale: pose.scale,
                color: [red, green, blue, pose.opacity],
                emissive: [em_red, em_green, em_blue, em_intensity * pose.opacity],
            }
        }));

        instances
    }

    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        let Some(instance_buffer) = &self.instance_buffer else {
            return;
        };
        if self.num_instances == 0 {
            return;
        }
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, instance_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.num_indices, 0, 0..self.num_instances);
    }
}

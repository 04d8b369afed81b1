use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use bytemuck::cast_slice;
use cgmath::{Matrix4, Point3};
use wgpu::util::DeviceExt;
use wgpu::MemoryHints::Performance;
use wgpu::{DepthStencilState, ShaderModule};
use winit::window::Window;

use crate::camera::Camera;
use crate::{Radio, SceneEvent};

pub mod cell_renderer;
pub mod particle_renderer;
pub mod sphere;

pub struct Wgpu {
    surface: wgpu::Surface<'static>,
    uniform_buffer: wgpu::Buffer,
    shader: ShaderModule,
    depth_texture: wgpu::Texture,
    pub surface_configuration: wgpu::SurfaceConfiguration,
    pub queue: wgpu::Queue,
    pub device: wgpu::Device,
    pub uniform_bind_group_layout: wgpu::BindGroupLayout,
    pub uniform_bind_group: wgpu::BindGroup,
}

impl Debug for Wgpu {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wgpu")
    }
}

impl Clone for Wgpu {
    fn clone(&self) -> Self {
        panic!("Clone of Wgpu")
    }

    fn clone_from(&mut self, _source: &Self) {
        panic!("Clone of Wgpu")
    }
}

impl Wgpu {
    pub async fn new_async(window: Arc<Window>) -> Wgpu {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(Arc::clone(&window)).unwrap();
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                // Request an adapter which can render to our surface
                compatible_surface: Some(&surface),
            })
            .await
            .expect("Failed to find an appropriate adapter");
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default().using_resolution(adapter.limits()),
                    memory_hints: Performance,
                },
                None,
            )
            .await
            .expect("Failed to create device");
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface_configuration = surface.get_default_config(&adapter, width, height).unwrap();
        surface.configure(&device, &surface_configuration);
        // MVP matrix followed by the kill light (rgb, intensity)
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniforms"),
            contents: cast_slice(&[0.0f32; 20]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("Uniform Bind Group"),
        });
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });
        let depth_texture = Self::create_depth_texture(&device, &surface_configuration);
        Self {
            surface,
            surface_configuration,
            device,
            queue,
            uniform_buffer,
            uniform_bind_group_layout,
            uniform_bind_group,
            shader,
            depth_texture,
        }
    }

    pub fn create_and_send(window: Arc<Window>, radio: Radio) {
        #[cfg(target_arch = "wasm32")]
        {
            let future = Self::new_async(window);
            wasm_bindgen_futures::spawn_local(async move {
                let wgpu = future.await;
                SceneEvent::ContextCreated(wgpu).send(&radio);
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let wgpu = futures::executor::block_on(Self::new_async(window));
            SceneEvent::ContextCreated(wgpu).send(&radio);
        }
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        surface_configuration: &wgpu::SurfaceConfiguration,
    ) -> wgpu::Texture {
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: surface_configuration.width,
                height: surface_configuration.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
    }

    pub fn shader(&self) -> &ShaderModule {
        &self.shader
    }

    pub fn resize(&mut self, new_size: (u32, u32)) {
        let (width, height) = new_size;
        self.surface_configuration.width = width.max(1);
        self.surface_configuration.height = height.max(1);
        self.surface
            .configure(&self.device, &self.surface_configuration);
        self.depth_texture = Self::create_depth_texture(&self.device, &self.surface_configuration);
    }

    pub fn get_surface_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            })
    }

    pub fn create_depth_view(&self) -> wgpu::TextureView {
        self.depth_texture
            .create_view(&wgpu::TextureViewDescriptor::default())
    }

    pub fn depth_stencil_state(depth_write_enabled: bool) -> DepthStencilState {
        DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }

    pub fn update_uniforms(&self, mvp: Matrix4<f32>, kill_light: [f32; 4]) {
        let mvp_ref: &[f32; 16] = mvp.as_ref();
        let mut uniforms = [0.0f32; 20];
        uniforms[..16].copy_from_slice(mvp_ref);
        uniforms[16..].copy_from_slice(&kill_light);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, cast_slice(&uniforms));
    }

    pub fn create_camera(&self) -> Camera {
        Camera::new(
            Point3::new(0.0, 2.0, 8.0),
            self.surface_configuration.width as f32,
            self.surface_configuration.height as f32,
        )
    }
}

use winit::event::WindowEvent;

use crate::camera::Camera;
use crate::choreography::{kill_light, Frame};
use crate::wgpu::cell_renderer::CellRenderer;
use crate::wgpu::particle_renderer::ParticleRenderer;
use crate::wgpu::Wgpu;

// Deep interstitial background
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.012,
    g: 0.008,
    b: 0.03,
    a: 1.0,
};

pub struct Scene {
    wgpu: Wgpu,
    camera: Camera,
    cell_renderer: CellRenderer,
    particle_renderer: ParticleRenderer,
}

impl Scene {
    pub fn new(wgpu: Wgpu) -> Self {
        let camera = wgpu.create_camera();
        let cell_renderer = CellRenderer::new(&wgpu);
        let particle_renderer = ParticleRenderer::new(&wgpu);
        Self {
            wgpu,
            camera,
            cell_renderer,
            particle_renderer,
        }
    }

    /// Route mouse input to the orbit camera.
    pub fn camera_event(&mut self, event: &WindowEvent) {
        self.camera.window_event(event);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.wgpu.resize((width, height));
        self.camera.set_size(width as f32, height as f32);
    }

    pub fn redraw(&mut self, frame: &Frame) -> Result<(), wgpu::SurfaceError> {
        let [red, green, blue, _] = kill_light::COLOR;
        self.wgpu.update_uniforms(
            self.camera.mvp_matrix(),
            [red, green, blue, frame.kill_light],
        );
        self.cell_renderer.update(&self.wgpu, frame);
        self.particle_renderer.update(&self.wgpu, frame);

        let surface_texture = self.wgpu.get_surface_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let depth_view = self.wgpu.create_depth_view();
        let mut encoder = self.wgpu.create_encoder();
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            render_pass.set_bind_group(0, &self.wgpu.uniform_bind_group, &[]);
            self.cell_renderer.render(&mut render_pass);
            self.particle_renderer.render(&mut render_pass);
        }
        self.wgpu.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }
}

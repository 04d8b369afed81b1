use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::choreography::Choreography;
use crate::keyboard::Keyboard;
use crate::scene::Scene;
use crate::wgpu::Wgpu;
use crate::{ControlState, PlaybackAction, PlaybackClock, Radio, SceneEvent};

pub struct Application {
    window_attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    scene: Option<Scene>,
    choreography: Choreography,
    clock: PlaybackClock,
    keyboard: Keyboard,
    control_state: ControlState,
    radio: Radio,
}

impl Application {
    pub fn new(
        window_attributes: WindowAttributes,
        radio: Radio,
        speed: f32,
        paused: bool,
    ) -> Self {
        let keyboard = Keyboard::new(radio.clone()).with_actions();
        Self {
            window_attributes,
            window: None,
            scene: None,
            choreography: Choreography::default(),
            clock: PlaybackClock::new(speed, paused),
            keyboard,
            control_state: if paused {
                ControlState::Paused
            } else {
                ControlState::Animating
            },
            radio,
        }
    }

    fn redraw(&mut self) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        let frame = self.choreography.frame(self.clock.elapsed());
        match scene.redraw(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    scene.resize(size.width, size.height);
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory");
            }
            Err(error) => log::warn!("dropped frame: {error:?}"),
        }
    }

    fn playback(&mut self, action: PlaybackAction) {
        match action {
            PlaybackAction::TogglePause => {
                self.control_state = if self.clock.toggle_pause() {
                    ControlState::Paused
                } else {
                    ControlState::Animating
                };
                log::info!("{}", self.keyboard.legend(&self.control_state));
            }
            PlaybackAction::SpeedUp => {
                self.clock.scale_speed(1.25);
                log::info!("speed {:.2}x", self.clock.speed());
            }
            PlaybackAction::SlowDown => {
                self.clock.scale_speed(0.8);
                log::info!("speed {:.2}x", self.clock.speed());
            }
            PlaybackAction::Restart => self.clock.restart(),
        }
    }
}

impl ApplicationHandler<SceneEvent> for Application {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new(
            event_loop
                .create_window(self.window_attributes.clone())
                .expect("create window"),
        );
        self.window = Some(window.clone());
        Wgpu::create_and_send(window, self.radio.clone());
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: SceneEvent) {
        match event {
            SceneEvent::ContextCreated(wgpu) => {
                self.scene = Some(Scene::new(wgpu));
                log::info!("{}", self.keyboard.legend(&self.control_state));
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            SceneEvent::Playback(action) => self.playback(action),
            SceneEvent::Exit => event_loop.exit(),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(scene) = &mut self.scene {
                    scene.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                self.keyboard.handle_key_event(key_event, &self.control_state);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                // The scene animates continuously, so ask for the next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            other => {
                if let Some(scene) = &mut self.scene {
                    scene.camera_event(&other);
                }
            }
        }
    }
}

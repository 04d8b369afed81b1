use cgmath::{
    perspective, Deg, InnerSpace, Matrix4, Point3, Transform, Vector3,
};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

const FIELD_OF_VIEW: Deg<f32> = Deg(42.0);
const ROTATE_SPEED: f32 = 0.4;
const ZOOM_SPEED: f32 = 0.01;
const LINE_SCROLL_PIXELS: f32 = 24.0;
const NEAREST_APPROACH: f32 = 2.0;
const FARTHEST_RETREAT: f32 = 30.0;

pub struct Camera {
    pub position: Point3<f32>,
    pub look_at: Point3<f32>,
    pub up: Vector3<f32>,
    width: f32,
    height: f32,
    moving_mouse: PhysicalPosition<f64>,
    pressed_mouse: Option<PhysicalPosition<f64>>,
}

impl Camera {
    pub fn new(position: Point3<f32>, width: f32, height: f32) -> Self {
        Self {
            position,
            look_at: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
            width,
            height,
            moving_mouse: PhysicalPosition::new(0.0, 0.0),
            pressed_mouse: None,
        }
    }

    pub fn window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, .. } => match state {
                ElementState::Pressed => self.pressed_mouse = Some(self.moving_mouse),
                ElementState::Released => self.pressed_mouse = None,
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.moving_mouse = *position;
                if let Some(rotation) = self.rotation() {
                    self.position =
                        self.look_at - rotation.transform_vector(self.look_at - self.position);
                    self.pressed_mouse = Some(self.moving_mouse);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::PixelDelta(offset) => offset.y as f32 * ZOOM_SPEED,
                    MouseScrollDelta::LineDelta(_, lines) => {
                        lines * LINE_SCROLL_PIXELS * ZOOM_SPEED
                    }
                };
                let gaze = self.look_at - self.position;
                let distance = gaze.magnitude() - scroll;
                if distance > NEAREST_APPROACH && distance < FARTHEST_RETREAT {
                    self.position += gaze.normalize() * scroll;
                }
            }
            _ => {}
        }
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn mvp_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.look_at, self.up)
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        let aspect = self.width / self.height;
        OPENGL_TO_WGPU_MATRIX * perspective(FIELD_OF_VIEW, aspect, 0.1, 100.0)
    }

    fn rotation(&self) -> Option<Matrix4<f32>> {
        let (yaw, pitch) = self.angles()?;
        let rotate_yaw = Matrix4::from_axis_angle(self.up, yaw);
        let horizontal = Vector3::unit_y().cross((self.look_at - self.position).normalize());
        let rotate_pitch = Matrix4::from_axis_angle(horizontal, pitch);
        Some(rotate_yaw * rotate_pitch)
    }

    fn angles(&self) -> Option<(Deg<f32>, Deg<f32>)> {
        let pressed = self.pressed_mouse?;
        let PhysicalPosition { x, y } = self.moving_mouse;
        let yaw = (pressed.x - x) as f32;
        let pitch = (y - pressed.y) as f32;
        Some((Deg(yaw * ROTATE_SPEED), Deg(pitch * ROTATE_SPEED)))
    }
}

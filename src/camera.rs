use crate::input::{InputState, Key};
use crate::matrix::Matrix4;
use crate::vector::Vector3;

const MOVE_SPEED: f32 = 5.0;
const ROTATION_SPEED: f32 = 0.2;

/// Position/orientation and field of view of the viewpoint primary rays are
/// generated from. `right`/`up` are derived state, recomputed by
/// [`Camera::calculate_camera_to_world`] from `world_up` and `forward` —
/// mutating `forward` directly (e.g. via `update`) without recalculating the
/// basis leaves them stale.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vector3,
    pub forward: Vector3,
    pub up: Vector3,
    pub right: Vector3,
    pub world_up: Vector3,
    pub total_pitch: f32,
    pub total_yaw: f32,
    pub fov_degrees: f32,
}

impl Camera {
    pub fn new(origin: Vector3, fov_degrees: f32) -> Camera {
        let mut camera = Camera {
            origin,
            forward: Vector3::UNIT_Z,
            up: Vector3::UNIT_Y,
            right: Vector3::UNIT_X,
            world_up: Vector3::UNIT_Y,
            total_pitch: 0.0,
            total_yaw: 0.0,
            fov_degrees,
        };
        camera.calculate_camera_to_world();
        camera
    }

    /// `tan(fovDegrees/2)`, the NDC scale factor used by primary ray generation.
    pub fn fov_value(&self) -> f32 {
        (self.fov_degrees * 0.5).to_radians().tan()
    }

    pub fn update(&mut self, dt: f32, input: &dyn InputState) {
        if input.is_key_down(Key::W) {
            self.origin += self.forward * MOVE_SPEED * dt;
        }
        if input.is_key_down(Key::S) {
            self.origin -= self.forward * MOVE_SPEED * dt;
        }
        if input.is_key_down(Key::A) {
            self.origin -= self.right * MOVE_SPEED * dt;
        }
        if input.is_key_down(Key::D) {
            self.origin += self.right * MOVE_SPEED * dt;
        }

        let (mouse_dx, mouse_dy) = input.mouse_delta();
        let buttons = input.mouse_buttons();
        if buttons.left && buttons.right {
            self.origin -= self.world_up * (-mouse_dy) * MOVE_SPEED * dt;
        } else if buttons.left {
            self.origin += self.forward * (-mouse_dy) * MOVE_SPEED * dt;
            self.total_yaw += mouse_dx * ROTATION_SPEED * dt;
        } else if buttons.right {
            self.total_pitch += -mouse_dy * ROTATION_SPEED * dt;
            self.total_yaw += mouse_dx * ROTATION_SPEED * dt;
        }

        let rotation = Matrix4::rotation_x(self.total_pitch) * Matrix4::rotation_y(self.total_yaw);
        self.forward = rotation.transform_direction(Vector3::UNIT_Z).normalized();
    }

    /// Rebuilds `right`/`up` from the current `forward` and returns the
    /// camera-to-world basis as a matrix whose rows are `(right, up, forward,
    /// origin)`.
    pub fn calculate_camera_to_world(&mut self) -> Matrix4 {
        self.right = self.world_up.cross(self.forward).normalized();
        self.up = self.forward.cross(self.right).normalized();
        Matrix4::from_basis(self.right, self.up, self.forward, self.origin)
    }
}

use glam::{Mat4, Vec3};

use crate::camera::{Camera, CameraMovement, PRESET_ELEVATED, PRESET_FRONT};
use crate::core::clock::Clock;
use crate::core::controller::{Button, Controller};

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Matrices handed to the renderer once per frame
#[derive(Debug, Clone, Copy)]
pub struct FrameMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    /// Camera world position, used as the eye position by the lighting model
    pub eye: Vec3,
}

/// Per-frame driver: converts raw input into camera mutations and derives
/// the frame's matrices.
///
/// Owns the camera and the frame clock. Cursor samples arrive as absolute
/// positions; the driver keeps the last sample as a baseline and forwards
/// deltas, swallowing the very first sample so it never produces a
/// spurious jump.
pub struct FrameDriver {
    camera: Camera,
    clock: Clock,
    last_cursor: Option<(f32, f32)>,
}

impl FrameDriver {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            clock: Clock::new(),
            last_cursor: None,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Handle an absolute cursor sample.
    ///
    /// The first sample after construction only establishes the baseline.
    /// Later samples forward `(x - last_x, last_y - y)` to the camera; the
    /// y delta is inverted because screen y grows downward.
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let Some((last_x, last_y)) = self.last_cursor else {
            self.last_cursor = Some((x, y));
            return;
        };

        let x_offset = x - last_x;
        let y_offset = last_y - y;
        self.last_cursor = Some((x, y));

        self.camera.process_mouse_movement(x_offset, y_offset);
    }

    pub fn on_scroll(&mut self, y_offset: f32) {
        self.camera.process_mouse_scroll(y_offset);
    }

    /// Advance the clock, apply held keys to the camera and return the
    /// frame's matrices. All input received since the previous tick has
    /// been applied by the time the matrices are read.
    pub fn tick(&mut self, controller: &impl Controller, aspect_ratio: f32) -> FrameMatrices {
        let delta_time = self.clock.tick();
        self.apply_input(controller, delta_time);
        self.matrices(aspect_ratio)
    }

    /// Apply one frame's worth of held-key input with an explicit delta.
    ///
    /// Each held movement key applies independently and additively, so
    /// diagonal movement is faster than axis movement. Not normalized on
    /// purpose; this matches simple free-cams.
    fn apply_input(&mut self, controller: &impl Controller, delta_time: f32) {
        const MOVEMENT_BINDINGS: [(Button, CameraMovement); 6] = [
            (Button::KeyW, CameraMovement::Forward),
            (Button::KeyS, CameraMovement::Backward),
            (Button::KeyA, CameraMovement::Left),
            (Button::KeyD, CameraMovement::Right),
            (Button::KeyE, CameraMovement::Up),
            (Button::KeyQ, CameraMovement::Down),
        ];

        for (button, direction) in MOVEMENT_BINDINGS {
            if controller.is_down(button) {
                self.camera.process_keyboard(direction, delta_time);
            }
        }

        if controller.is_down(Button::KeyO) {
            self.camera.apply_preset(&PRESET_FRONT);
        }
        if controller.is_down(Button::KeyP) {
            self.camera.apply_preset(&PRESET_ELEVATED);
        }
    }

    fn matrices(&self, aspect_ratio: f32) -> FrameMatrices {
        FrameMatrices {
            view: self.camera.view_matrix(),
            projection: self
                .camera
                .projection_matrix(aspect_ratio, NEAR_PLANE, FAR_PLANE),
            eye: self.camera.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::MOUSE_SENSITIVITY;

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }
    }

    fn driver() -> FrameDriver {
        FrameDriver::new(Camera::new(Vec3::new(0.0, 5.0, 15.0)))
    }

    #[test]
    fn first_cursor_sample_produces_no_rotation() {
        let mut driver = driver();
        let yaw = driver.camera().yaw;
        let pitch = driver.camera().pitch;

        driver.on_cursor_moved(500.0, 300.0);

        assert_eq!(driver.camera().yaw, yaw);
        assert_eq!(driver.camera().pitch, pitch);
    }

    #[test]
    fn second_cursor_sample_yields_proportional_yaw() {
        let mut driver = driver();
        let yaw = driver.camera().yaw;

        driver.on_cursor_moved(500.0, 300.0);
        driver.on_cursor_moved(510.0, 300.0);

        let expected = yaw + 10.0 * MOUSE_SENSITIVITY;
        assert!((driver.camera().yaw - expected).abs() < 1e-5);
        assert_eq!(driver.camera().pitch, 0.0);
    }

    #[test]
    fn cursor_y_is_inverted_to_camera_space() {
        let mut driver = driver();
        driver.on_cursor_moved(500.0, 300.0);
        // Mouse moved up the screen: y decreases, pitch must increase
        driver.on_cursor_moved(500.0, 280.0);

        assert!(driver.camera().pitch > 0.0);
    }

    #[test]
    fn held_keys_apply_additively() {
        let mut driver = driver();
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::KeyD],
        };

        driver.apply_input(&controller, 1.0);

        // Forward along (0,0,-1) and right along (1,0,0), not normalized
        let expected = Vec3::new(2.5, 5.0, 12.5);
        assert!((driver.camera().position - expected).length() < 1e-5);
    }

    #[test]
    fn no_keys_means_no_movement() {
        let mut driver = driver();
        let controller = MockController { pressed: vec![] };
        let before = driver.camera().position;

        driver.apply_input(&controller, 1.0);

        assert_eq!(driver.camera().position, before);
    }

    #[test]
    fn preset_key_forces_pose() {
        let mut driver = driver();
        let controller = MockController {
            pressed: vec![Button::KeyO],
        };

        driver.apply_input(&controller, 0.016);

        assert_eq!(driver.camera().position, PRESET_FRONT.position);
        assert_eq!(driver.camera().front, PRESET_FRONT.front);
    }

    #[test]
    fn scroll_forwards_to_zoom() {
        let mut driver = driver();
        driver.on_scroll(10.0);
        assert_eq!(driver.camera().zoom, 35.0);
    }

    #[test]
    fn matrices_reflect_current_pose() {
        let driver = driver();
        let frame = driver.matrices(800.0 / 600.0);

        assert_eq!(frame.eye, Vec3::new(0.0, 5.0, 15.0));
        assert_eq!(
            frame.view.to_cols_array(),
            driver.camera().view_matrix().to_cols_array()
        );
    }
}

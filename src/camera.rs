use glam::{Mat4, Vec3};

pub const MOVEMENT_SPEED: f32 = 2.5;
pub const MOUSE_SENSITIVITY: f32 = 0.1;

const DEFAULT_YAW: f32 = -90.0;
const DEFAULT_PITCH: f32 = 0.0;
const DEFAULT_ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const MIN_ZOOM: f32 = 1.0;
const MAX_ZOOM: f32 = 45.0;

/// Movement direction tags for keyboard-driven translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// A fixed camera pose applied by the view-preset hotkeys.
///
/// Applying a preset writes `position`/`front`/`up` directly and leaves
/// `yaw`/`pitch` stale until the next mouse movement recomputes the basis.
#[derive(Debug, Clone, Copy)]
pub struct CameraPreset {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
}

/// Head-on view of the scene from the front
pub const PRESET_FRONT: CameraPreset = CameraPreset {
    position: Vec3::new(0.0, 0.0, 15.0),
    front: Vec3::new(0.0, 0.0, -1.0),
    up: Vec3::Y,
};

/// Elevated view looking down into the scene
pub const PRESET_ELEVATED: CameraPreset = CameraPreset {
    position: Vec3::new(0.0, 5.0, 15.0),
    front: Vec3::new(0.0, -0.31623, -0.94868),
    up: Vec3::Y,
};

/// Free-fly camera with yaw/pitch orientation and FOV zoom.
///
/// Angles are stored in degrees. The `front`/`right`/`up` basis is derived
/// from `yaw`/`pitch`/`world_up` and recomputed whenever either angle
/// changes; pitch is clamped strictly inside (-90, 90) so the basis never
/// degenerates at the poles.
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            zoom: DEFAULT_ZOOM,
            movement_speed: MOVEMENT_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,
        };
        camera.update_vectors();
        camera
    }

    /// Translate the camera along its basis.
    ///
    /// Forward/Backward follow `front`, Left/Right follow `right`, and
    /// Up/Down follow the fixed world up rather than the local up so
    /// vertical movement does not drift when looking up or down.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.world_up * velocity,
            CameraMovement::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Apply a mouse delta (in pixels, y already flipped to camera space)
    /// to yaw/pitch and rebuild the orientation basis.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        // Looking straight up or down would flip the view
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.update_vectors();
    }

    /// Apply a scroll delta to the field of view (positive = zoom in)
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// World-to-eye transform from the current pose
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as vertical FOV
    pub fn projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect_ratio, near, far)
    }

    /// Force the pose to a preset without going through yaw/pitch.
    ///
    /// Bypasses basis recomputation; yaw/pitch stay stale until the next
    /// `process_mouse_movement` call.
    pub fn apply_preset(&mut self, preset: &CameraPreset) {
        self.position = preset.position;
        self.front = preset.front;
        self.up = preset.up;
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

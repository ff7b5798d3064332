use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec2, Vec3};

use crate::input::queue::MouseButton;

pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 100.0, 230.0);
pub const DEFAULT_TARGET: Vec3 = Vec3::ZERO;
pub const DEFAULT_UP: Vec3 = Vec3::Y;
/// Zoom doubles as the perspective field of view, in degrees.
pub const DEFAULT_ZOOM: f32 = 15.0;
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 25.0;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;
/// Radians of rotation per pixel of pointer drag.
const ROTATE_SENSITIVITY: f32 = 0.5 * 0.01;
/// World units of pan per pixel, before the zoom correction.
const PAN_SENSITIVITY: f32 = 0.5;
const SCROLL_SENSITIVITY: f32 = 2.0;

/// Which drag gesture the pointer is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Idle,
    Rotating,
    Panning,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

/// Orbit-style camera: rotates and pans around a look-at target, with a
/// field-of-view zoom. Pointer samples arrive as absolute coordinates;
/// deltas are computed against the previous sample.
pub struct OrbitCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub zoom: f32,
    drag: DragMode,
    /// Armed at startup and on reset so the next pointer sample becomes
    /// the delta baseline instead of producing a spurious jump.
    first_sample: bool,
    last_cursor: Vec2,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            position: DEFAULT_POSITION,
            target: DEFAULT_TARGET,
            up: DEFAULT_UP,
            zoom: DEFAULT_ZOOM,
            drag: DragMode::Idle,
            first_sample: true,
            last_cursor: Vec2::ZERO,
        }
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag
    }

    /// Primary button engages rotation, secondary engages panning.
    /// Releasing the button that owns the current mode returns to idle.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match (button, pressed) {
            (MouseButton::Primary, true) => self.drag = DragMode::Rotating,
            (MouseButton::Secondary, true) => self.drag = DragMode::Panning,
            (MouseButton::Primary, false) if self.drag == DragMode::Rotating => {
                self.drag = DragMode::Idle;
            }
            (MouseButton::Secondary, false) if self.drag == DragMode::Panning => {
                self.drag = DragMode::Idle;
            }
            _ => {}
        }
    }

    /// Feed an absolute pointer sample.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let cursor = Vec2::new(x, y);
        if self.first_sample {
            self.last_cursor = cursor;
            self.first_sample = false;
            return;
        }
        let delta = cursor - self.last_cursor;
        self.last_cursor = cursor;
        match self.drag {
            DragMode::Rotating => self.rotate(delta),
            DragMode::Panning => self.pan(delta),
            DragMode::Idle => {}
        }
    }

    /// Scroll adjusts the field-of-view zoom, clamped to [1, 25].
    pub fn scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy * SCROLL_SENSITIVITY).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Restore the fixed defaults and rearm the pointer baseline.
    pub fn reset(&mut self) {
        self.position = DEFAULT_POSITION;
        self.target = DEFAULT_TARGET;
        self.up = DEFAULT_UP;
        self.zoom = DEFAULT_ZOOM;
        self.first_sample = true;
    }

    /// Camera basis: view direction, right, and the orthogonalized up.
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let direction = (self.position - self.target).normalize();
        let right = self.up.cross(direction).normalize();
        let up = direction.cross(right);
        (direction, right, up)
    }

    fn rotate(&mut self, delta: Vec2) {
        let yaw = -delta.x * ROTATE_SENSITIVITY;
        let pitch = -delta.y * ROTATE_SENSITIVITY;
        let (_, right, _) = self.basis();
        // Yaw about the fixed world-up axis, pitch about camera right,
        // applied to the target-relative offset.
        let rotation = Mat3::from_axis_angle(self.up, yaw) * Mat3::from_axis_angle(right, pitch);
        self.position = self.target + rotation * (self.position - self.target);
    }

    fn pan(&mut self, delta: Vec2) {
        let (_, right, up) = self.basis();
        let pan = (-right * delta.x + up * delta.y) * PAN_SENSITIVITY * 0.25 * self.zoom / 45.0;
        self.position += pan;
        self.target += pan;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix(aspect).to_cols_array_2d(),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(camera: &mut OrbitCamera, button: MouseButton, from: Vec2, to: Vec2) {
        camera.set_button(button, true);
        camera.pointer_moved(from.x, from.y);
        camera.pointer_moved(to.x, to.y);
        camera.set_button(button, false);
    }

    #[test]
    fn zoom_clamps_low_and_high() {
        let mut camera = OrbitCamera::new();
        for _ in 0..100 {
            camera.scroll(1.0);
        }
        assert!((camera.zoom - ZOOM_MIN).abs() < 1e-6);
        for _ in 0..100 {
            camera.scroll(-1.0);
        }
        assert!((camera.zoom - ZOOM_MAX).abs() < 1e-6);
    }

    #[test]
    fn rotation_preserves_distance_to_target() {
        let mut camera = OrbitCamera::new();
        let before = (camera.position - camera.target).length();
        drag(&mut camera, MouseButton::Primary, Vec2::new(100.0, 100.0), Vec2::new(180.0, 60.0));
        let after = (camera.position - camera.target).length();
        assert!((before - after).abs() < 1e-3, "distance drifted: {before} -> {after}");
        assert!(camera.position.distance(DEFAULT_POSITION) > 1e-3, "camera did not move");
    }

    #[test]
    fn pan_moves_position_and_target_together() {
        let mut camera = OrbitCamera::new();
        let offset_before = camera.position - camera.target;
        drag(&mut camera, MouseButton::Secondary, Vec2::new(0.0, 0.0), Vec2::new(40.0, 25.0));
        let offset_after = camera.position - camera.target;
        assert!((offset_before - offset_after).length() < 1e-4);
        assert!(camera.target.distance(DEFAULT_TARGET) > 1e-4);
    }

    #[test]
    fn idle_pointer_motion_does_nothing() {
        let mut camera = OrbitCamera::new();
        camera.pointer_moved(10.0, 10.0);
        camera.pointer_moved(500.0, 400.0);
        assert_eq!(camera.position, DEFAULT_POSITION);
        assert_eq!(camera.target, DEFAULT_TARGET);
    }

    #[test]
    fn release_of_owning_button_returns_to_idle() {
        let mut camera = OrbitCamera::new();
        camera.set_button(MouseButton::Primary, true);
        assert_eq!(camera.drag_mode(), DragMode::Rotating);
        // Releasing the other button must not cancel the gesture.
        camera.set_button(MouseButton::Secondary, false);
        assert_eq!(camera.drag_mode(), DragMode::Rotating);
        camera.set_button(MouseButton::Primary, false);
        assert_eq!(camera.drag_mode(), DragMode::Idle);
    }

    #[test]
    fn reset_restores_defaults_and_rearms_baseline() {
        let mut camera = OrbitCamera::new();
        drag(&mut camera, MouseButton::Primary, Vec2::new(0.0, 0.0), Vec2::new(300.0, 120.0));
        camera.scroll(3.0);
        camera.reset();
        assert_eq!(camera.position, DEFAULT_POSITION);
        assert_eq!(camera.zoom, DEFAULT_ZOOM);

        // The first pointer sample after reset only seeds the baseline,
        // so even a far-away cursor causes no jump.
        camera.set_button(MouseButton::Primary, true);
        camera.pointer_moved(900.0, 700.0);
        assert_eq!(camera.position, DEFAULT_POSITION);
        // The second sample rotates as usual.
        camera.pointer_moved(910.0, 700.0);
        assert!(camera.position.distance(DEFAULT_POSITION) > 1e-4);
    }

    #[test]
    fn uniform_round_trips_matrices() {
        let camera = OrbitCamera::new();
        let uniform = camera.uniform(16.0 / 9.0);
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(
            uniform.projection,
            camera.projection_matrix(16.0 / 9.0).to_cols_array_2d()
        );
    }
}

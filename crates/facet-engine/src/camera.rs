//! Orbit camera.
//!
//! Right-handed, +Y up, looking down -Z in view space. Projections map depth to
//! `[0, 1]`, which is what the depth term of the `model` shading expects.

use glam::{Mat4, Vec3};

const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;
const MIN_DISTANCE: f32 = 1e-3;
const MIN_ASPECT: f32 = 1e-3;

/// Radians per logical pixel of pointer drag.
const ROTATE_SPEED: f32 = 0.01;

/// Distance scale per wheel line.
const ZOOM_SPEED: f32 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Distance from `target` to the eye.
    pub distance: f32,
    /// Rotation around +Y, radians.
    pub yaw: f32,
    /// Elevation above the XZ plane, radians. Clamped to ±89°.
    pub pitch: f32,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 5.0,
            yaw: 0.6,
            pitch: 0.45,
            fov_y: 45f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Eye position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let dir = Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw);
        self.target + dir * self.distance
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(MIN_ASPECT), self.near, self.far)
    }

    /// Orbits by a pointer drag of `(dx, dy)` logical pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ROTATE_SPEED;
        self.pitch = (self.pitch + dy * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Moves towards (`delta > 0`) or away from the target.
    pub fn zoom(&mut self, delta: f32) {
        let scale = (-delta * ZOOM_SPEED).exp();
        self.distance = (self.distance * scale).min(self.far * 0.5).max(MIN_DISTANCE);
    }

    /// Centers on an axis-aligned box and fits near/far around it.
    ///
    /// Tight near/far planes spread the box over the whole depth range, so the
    /// depth term of the shading actually varies across the model.
    pub fn frame_bounds(&mut self, min: Vec3, max: Vec3) {
        let radius = ((max - min).length() * 0.5).max(MIN_DISTANCE);

        self.target = (min + max) * 0.5;
        self.distance = radius / (self.fov_y * 0.5).sin();
        self.near = (self.distance - radius).max(MIN_DISTANCE) * 0.5;
        self.far = (self.distance + radius) * 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_sits_at_distance_from_target() {
        let cam = Camera { target: Vec3::new(1.0, 2.0, 3.0), ..Camera::default() };
        assert!(((cam.eye() - cam.target).length() - cam.distance).abs() < 1e-4);
    }

    #[test]
    fn target_projects_to_view_center() {
        let cam = Camera::default();
        let clip = cam.projection(1.5) * cam.view() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = Camera::default();
        cam.rotate(0.0, 1.0e6);
        assert!((cam.pitch - MAX_PITCH).abs() < 1e-6);
        cam.rotate(0.0, -1.0e6);
        assert!((cam.pitch + MAX_PITCH).abs() < 1e-6);
    }

    #[test]
    fn zoom_in_reduces_distance_and_stays_positive() {
        let mut cam = Camera::default();
        cam.zoom(1.0);
        assert!(cam.distance < 5.0);
        cam.zoom(1.0e6);
        assert!(cam.distance >= MIN_DISTANCE);
    }

    #[test]
    fn framed_box_fits_inside_depth_range() {
        let mut cam = Camera::default();
        let (min, max) = (Vec3::new(-1.0, -2.0, -0.5), Vec3::new(3.0, 1.0, 0.5));
        cam.frame_bounds(min, max);

        assert_eq!(cam.target, Vec3::new(1.0, -0.5, 0.0));

        let view_proj = cam.projection(1.0) * cam.view();
        for corner in [min, max, Vec3::new(min.x, max.y, min.z), Vec3::new(max.x, min.y, max.z)] {
            let clip = view_proj * corner.extend(1.0);
            let z = clip.z / clip.w;
            assert!((0.0..=1.0).contains(&z), "corner {corner:?} depth {z}");
        }
    }
}

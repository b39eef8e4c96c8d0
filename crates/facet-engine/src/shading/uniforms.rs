use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::camera::Camera;

/// Per-draw uniform block (group 0, binding 0).
///
/// `transform_normals` must be the inverse-transpose of whatever part of
/// `transform` orients the surface (model or model-view). The shader trusts
/// it; nothing here checks it. Use [`Uniforms::from_model_view`] or
/// [`Uniforms::from_camera`] to get it right.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub transform: [[f32; 4]; 4],
    pub transform_normals: [[f32; 4]; 4],
}

/// Size of [`Uniforms`] as a wgpu minimum binding size.
pub(crate) const UNIFORMS_SIZE: NonZeroU64 =
    match NonZeroU64::new(std::mem::size_of::<Uniforms>() as u64) {
        Some(size) => size,
        None => panic!("Uniforms must not be zero-sized"),
    };

impl Default for Uniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

impl Uniforms {
    #[inline]
    pub fn new(transform: Mat4, transform_normals: Mat4) -> Self {
        Self {
            transform: transform.to_cols_array_2d(),
            transform_normals: transform_normals.to_cols_array_2d(),
        }
    }

    /// Builds the block from a model-view matrix and a projection.
    ///
    /// Normals end up in view space, which is where the camera-aligned light lives.
    pub fn from_model_view(model_view: Mat4, projection: Mat4) -> Self {
        Self::new(projection * model_view, model_view.inverse().transpose())
    }

    /// Builds the block for `model` seen through `camera` at the given aspect ratio.
    pub fn from_camera(camera: &Camera, aspect: f32, model: Mat4) -> Self {
        Self::from_model_view(camera.view() * model, camera.projection(aspect))
    }

    #[inline]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.transform)
    }

    #[inline]
    pub fn transform_normals(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.transform_normals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn default_is_identity() {
        let u = Uniforms::default();
        assert_eq!(u.transform(), Mat4::IDENTITY);
        assert_eq!(u.transform_normals(), Mat4::IDENTITY);
    }

    #[test]
    fn matrices_are_column_major() {
        let t = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let u = Uniforms::new(t, Mat4::IDENTITY);
        assert_eq!(u.transform[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular_under_non_uniform_scale() {
        let model_view = Mat4::from_scale(Vec3::new(4.0, 1.0, 1.0));
        let u = Uniforms::from_model_view(model_view, Mat4::IDENTITY);

        // Surface of the plane x + y = 0: tangent (1, -1, 0), normal (1, 1, 0).
        let tangent = model_view.transform_vector3(Vec3::new(1.0, -1.0, 0.0));
        let normal = (u.transform_normals() * Vec4::new(1.0, 1.0, 0.0, 0.0)).truncate();

        assert!(tangent.dot(normal).abs() < 1e-5);
    }

    #[test]
    fn camera_uniforms_map_normals_to_view_space() {
        let camera = Camera::default();
        let u = Uniforms::from_camera(&camera, 1.0, Mat4::IDENTITY);

        // The direction towards the eye becomes +Z in view space.
        let towards_eye = (camera.eye() - camera.target).normalize();
        let n = (u.transform_normals() * towards_eye.extend(0.0)).truncate();
        assert!(approx(n.normalize(), Vec3::Z));
    }
}

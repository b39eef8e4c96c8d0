//! CPU mirror of `shader.wgsl`.
//!
//! Every function here performs the same arithmetic as its WGSL counterpart so
//! shading behavior can be checked without a GPU. The `render::mesh` tests draw
//! each variant on whatever adapter is present and compare against these.

use std::f32::consts::PI;

use glam::{Vec3, Vec4, Vec4Swizzles};

use super::{FragmentVariant, ShadingParams, Uniforms, Vertex};

/// Angle between the light and the surface at which the normal term reaches zero.
pub const FALLOFF_ANGLE: f32 = PI * 0.75;

/// Fraction of brightness lost at the far plane (`z = 1`).
pub const DEPTH_DARKENING: f32 = 0.5;

/// Output of the vertex stage, before interpolation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexOutput {
    pub clip_position: Vec4,
    pub normal: Vec3,
    /// Premultiplied alpha.
    pub color: Vec4,
}

impl VertexOutput {
    /// NDC depth after the perspective divide, as the rasterizer hands it to
    /// fragment stages.
    #[inline]
    pub fn ndc_depth(&self) -> f32 {
        self.clip_position.z / self.clip_position.w
    }
}

/// Converts straight alpha to premultiplied alpha.
#[inline]
pub fn premultiply(color: Vec4) -> Vec4 {
    (color.xyz() * color.w).extend(color.w)
}

/// Photometric negative of the RGB channels, alpha untouched.
#[inline]
pub fn invert_rgb(color: Vec4) -> Vec4 {
    (Vec3::ONE - color.xyz()).extend(color.w)
}

pub fn vertex(uniforms: &Uniforms, input: &Vertex) -> VertexOutput {
    let normal = (uniforms.transform_normals() * Vec3::from(input.normal).extend(0.0)).xyz();
    let clip_position = uniforms.transform() * Vec3::from(input.position).extend(1.0);
    let color = premultiply(Vec4::from(input.color));

    VertexOutput {
        clip_position,
        normal,
        color,
    }
}

#[inline]
pub fn frag_face(_input: &VertexOutput) -> Vec4 {
    Vec4::new(0.0, 0.0, 0.0, 1.0)
}

/// Angle between `light` and the direction the surface faces.
///
/// The cosine is clamped so interpolation drift cannot push `acos` out of its domain.
#[inline]
pub fn light_angle(light: Vec3, normal: Vec3) -> f32 {
    light.dot(-normal).clamp(-1.0, 1.0).acos()
}

/// Normal term: `1` when facing the light, linear falloff to `0` at [`FALLOFF_ANGLE`].
#[inline]
pub fn normal_factor(angle: f32) -> f32 {
    (1.0 - angle / FALLOFF_ANGLE).max(0.0)
}

/// Depth term: `1` at the near plane, `0.5` at the far plane.
#[inline]
pub fn depth_factor(depth: f32) -> f32 {
    1.0 - depth * DEPTH_DARKENING
}

/// Combined shading intensity applied by `frag_model`.
pub fn model_shading(params: &ShadingParams, normal: Vec3, depth: f32) -> f32 {
    let angle = light_angle(params.light_direction, normal);
    normal_factor(angle) * depth_factor(depth)
}

pub fn frag_model(params: &ShadingParams, input: &VertexOutput, depth: f32) -> Vec4 {
    let shading = model_shading(params, input.normal, depth);
    (input.color.xyz() * shading).extend(input.color.w)
}

#[inline]
pub fn frag_mesh(input: &VertexOutput) -> Vec4 {
    invert_rgb(input.color)
}

/// Runs the fragment stage `variant` would run for this input.
pub fn shade_fragment(
    variant: FragmentVariant,
    params: &ShadingParams,
    input: &VertexOutput,
    depth: f32,
) -> Vec4 {
    match variant {
        FragmentVariant::Face => frag_face(input),
        FragmentVariant::Model => frag_model(params, input, depth),
        FragmentVariant::Mesh => frag_mesh(input),
    }
}

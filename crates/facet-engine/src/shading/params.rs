use glam::Vec3;

/// Camera-aligned light: points into the screen in view space.
pub const DEFAULT_LIGHT_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Per-pipeline shading configuration.
///
/// Values are baked into the fragment pipeline as WGSL override constants, so
/// changing them requires rebuilding the `model` pipeline (not re-uploading
/// uniforms).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadingParams {
    /// Direction the light travels, in the space `transform_normals` maps into.
    ///
    /// Expected to be unit length; it is used as-is.
    pub light_direction: Vec3,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            light_direction: DEFAULT_LIGHT_DIRECTION,
        }
    }
}

impl ShadingParams {
    /// Override-constant table for `frag_model`.
    pub fn pipeline_constants(&self) -> [(&'static str, f64); 3] {
        let d = self.light_direction;
        [
            ("light_x", d.x as f64),
            ("light_y", d.y as f64),
            ("light_z", d.z as f64),
        ]
    }
}

/// Fragment entry point selected for a draw.
///
/// Chosen when the pipeline is built; the shader never branches on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FragmentVariant {
    /// Flat opaque black; silhouette / outline pass.
    Face,
    /// Normal- and depth-shaded surface.
    Model,
    /// Color-inverted overlay (wireframe).
    Mesh,
}

impl FragmentVariant {
    /// All variants in draw order.
    pub const ALL: [FragmentVariant; 3] = [Self::Face, Self::Model, Self::Mesh];

    #[inline]
    pub const fn entry_point(self) -> &'static str {
        match self {
            Self::Face => "frag_face",
            Self::Model => "frag_model",
            Self::Mesh => "frag_mesh",
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Face => 0,
            Self::Model => 1,
            Self::Mesh => 2,
        }
    }

    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Face => "facet face pipeline",
            Self::Model => "facet model pipeline",
            Self::Mesh => "facet mesh pipeline",
        }
    }
}

//! Geometry-based shading stage.
//!
//! The GPU side lives in `shader.wgsl`: one vertex entry point plus three
//! fragment entry points (`frag_face`, `frag_model`, `frag_mesh`). This module
//! owns everything the host needs to bind it:
//! - the uniform block layout (`Uniforms`)
//! - the vertex attribute layout (`Vertex`)
//! - shading parameters delivered as pipeline constants (`ShadingParams`)
//! - a CPU mirror of the WGSL arithmetic (`reference`), used by tests and tooling
//!
//! Convention:
//! - vertex colors are straight alpha; the vertex stage premultiplies them once
//! - fragment depth is NDC depth in `[0, 1]`

mod params;
pub mod reference;
mod uniforms;
mod vertex;

pub use params::{FragmentVariant, ShadingParams, DEFAULT_LIGHT_DIRECTION};
pub use uniforms::Uniforms;
pub(crate) use uniforms::UNIFORMS_SIZE;
pub use vertex::Vertex;

/// WGSL source of the shading stage.
pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");

/// Vertex entry point shared by every fragment variant.
pub const VERTEX_ENTRY_POINT: &str = "vertex";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse() -> naga::Module {
        match naga::front::wgsl::parse_str(SHADER_SOURCE) {
            Ok(module) => module,
            Err(e) => panic!("WGSL parse error: {}", e.emit_to_string(SHADER_SOURCE)),
        }
    }

    #[test]
    fn shader_validates() {
        let module = parse();
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        if let Err(e) = validator.validate(&module) {
            panic!("WGSL validation error: {e:?}");
        }
    }

    #[test]
    fn shader_exposes_one_vertex_and_three_fragment_entry_points() {
        let module = parse();

        let vertex: Vec<&str> = module
            .entry_points
            .iter()
            .filter(|ep| ep.stage == naga::ShaderStage::Vertex)
            .map(|ep| ep.name.as_str())
            .collect();
        assert_eq!(vertex, vec![VERTEX_ENTRY_POINT]);

        let mut fragment: Vec<&str> = module
            .entry_points
            .iter()
            .filter(|ep| ep.stage == naga::ShaderStage::Fragment)
            .map(|ep| ep.name.as_str())
            .collect();
        fragment.sort_unstable();

        let mut expected: Vec<&str> =
            FragmentVariant::ALL.iter().map(|v| v.entry_point()).collect();
        expected.sort_unstable();

        assert_eq!(fragment, expected);
    }

    #[test]
    fn pipeline_constants_match_shader_overrides() {
        let module = parse();
        let mut overrides: Vec<String> = module
            .overrides
            .iter()
            .filter_map(|(_, o)| o.name.clone())
            .collect();
        overrides.sort_unstable();

        let mut keys: Vec<String> = ShadingParams::default()
            .pipeline_constants()
            .iter()
            .map(|(k, _)| (*k).to_string())
            .collect();
        keys.sort_unstable();

        assert_eq!(overrides, keys);
    }

    #[test]
    fn uniform_block_is_two_tightly_packed_matrices() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 2 * 16 * 4);
    }
}

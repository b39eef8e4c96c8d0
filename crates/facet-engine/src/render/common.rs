//! Fixed-function state shared by the mesh pipelines.

use crate::device::DEPTH_FORMAT;
use crate::shading::FragmentVariant;

// ── blend ─────────────────────────────────────────────────────────────────

/// Blending for premultiplied-alpha sources: `src + dst * (1 - src.a)`.
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

// ── depth ─────────────────────────────────────────────────────────────────

/// Depth state per layer.
///
/// - `Face` is pushed back and never writes, so every model fragment replaces
///   the black, including surfaces seen through translucent ones.
/// - `Model` writes depth normally.
/// - `Mesh` is pulled forward and never writes, so it overlays without
///   occluding anything drawn after it.
pub(super) fn depth_stencil_state(variant: FragmentVariant) -> wgpu::DepthStencilState {
    let (depth_write_enabled, bias) = match variant {
        FragmentVariant::Face => (
            false,
            wgpu::DepthBiasState { constant: 2, slope_scale: 1.0, clamp: 0.0 },
        ),
        FragmentVariant::Model => (true, wgpu::DepthBiasState::default()),
        FragmentVariant::Mesh => (
            false,
            wgpu::DepthBiasState { constant: -2, slope_scale: -1.0, clamp: 0.0 },
        ),
    };

    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled,
        depth_compare: wgpu::CompareFunction::LessEqual,
        stencil: wgpu::StencilState::default(),
        bias,
    }
}

// ── primitive ─────────────────────────────────────────────────────────────

/// Rasterization for `variant`. The mesh overlay is wireframe when supported.
pub(super) fn primitive_state(variant: FragmentVariant, wireframe: bool) -> wgpu::PrimitiveState {
    let polygon_mode = match variant {
        FragmentVariant::Mesh if wireframe => wgpu::PolygonMode::Line,
        _ => wgpu::PolygonMode::Fill,
    };

    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        // Open shells and inspection cuts expose back faces; draw them.
        cull_mode: None,
        polygon_mode,
        unclipped_depth: false,
        conservative: false,
    }
}

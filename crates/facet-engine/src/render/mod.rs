//! GPU rendering subsystem.
//!
//! `MeshRenderer` binds the shading stage: one uniform block, one vertex
//! layout, and one pipeline per fragment variant. Each frame issues one draw
//! per enabled layer, in `FragmentVariant::ALL` order.
//!
//! Convention:
//! - depth is `[0, 1]`, cleared to `1.0`, compared with `LessEqual`
//! - color targets blend premultiplied alpha (`One`, `OneMinusSrcAlpha`)

mod common;
mod ctx;
mod geometry;
mod layers;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget, Viewport};
pub use geometry::Geometry;
pub use layers::LayerSet;
pub use mesh::MeshRenderer;

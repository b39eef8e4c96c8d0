//! CPU-side mesh geometry.
//!
//! `TriMesh` is the authoring form (colored triangles). `MeshData` is the
//! flattened vertex/index form uploaded to the GPU by `render::Geometry`.

mod mesh_data;
mod tri_mesh;
mod triangle;

pub use mesh_data::MeshData;
pub use tri_mesh::{MeshTriangle, TriMesh};
pub use triangle::Triangle;

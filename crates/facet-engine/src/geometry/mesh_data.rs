use anyhow::{Context, Result};

use crate::shading::Vertex;

use super::TriMesh;

/// Flattened vertex/index data, ready for upload.
///
/// Vertices are not shared between triangles: every triangle gets its own three
/// vertices carrying the triangle's face normal, so faces shade flat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Builds flat-shaded vertex data from `mesh`.
    ///
    /// Fails if the mesh needs more indices than fit into `u32`.
    pub fn from_tri_mesh(mesh: &TriMesh) -> Result<Self> {
        let vertex_count = mesh.len().checked_mul(3).context("mesh is too large")?;
        u32::try_from(vertex_count)
            .with_context(|| format!("unsupported number of indices: `{vertex_count}`"))?;

        let mut vertices = Vec::with_capacity(vertex_count);
        let mut indices = Vec::with_capacity(vertex_count);

        for t in mesh.triangles() {
            // Left unnormalized.
            let normal = t.triangle.face_normal().to_array();
            let color = t.color.to_array();

            for point in t.triangle.points {
                // Bounded by the `u32` check above.
                let index = vertices.len() as u32;
                vertices.push(Vertex {
                    position: point.to_array(),
                    normal,
                    color,
                });
                indices.push(index);
            }
        }

        Ok(Self { vertices, indices })
    }

    #[inline]
    pub fn num_indices(&self) -> u32 {
        self.indices.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use glam::Vec3;

    #[test]
    fn empty_mesh_produces_no_vertices() {
        let data = MeshData::from_tri_mesh(&TriMesh::new()).unwrap_or_default();
        assert!(data.is_empty());
        assert_eq!(data.num_indices(), 0);
    }

    #[test]
    fn each_triangle_gets_three_own_vertices() {
        let mesh = TriMesh::cube(1.0, Rgba::WHITE);
        let data = match MeshData::from_tri_mesh(&mesh) {
            Ok(d) => d,
            Err(e) => panic!("{e:#}"),
        };

        assert_eq!(data.vertices.len(), 36);
        assert_eq!(data.indices, (0..36).collect::<Vec<u32>>());
    }

    #[test]
    fn vertices_carry_face_normal_and_straight_color() {
        let mut mesh = TriMesh::new();
        let color = Rgba::new(1.0, 0.5, 0.25, 0.5);
        mesh.push_triangle(
            [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)],
            color,
        );

        let data = match MeshData::from_tri_mesh(&mesh) {
            Ok(d) => d,
            Err(e) => panic!("{e:#}"),
        };

        for v in &data.vertices {
            assert_eq!(Vec3::from(v.normal), Vec3::new(0.0, 0.0, 4.0));
            assert_eq!(v.color, [1.0, 0.5, 0.25, 0.5]);
        }
        assert_eq!(data.vertices[1].position, [2.0, 0.0, 0.0]);
    }
}

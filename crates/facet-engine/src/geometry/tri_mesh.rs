use glam::Vec3;

use crate::color::Rgba;

use super::Triangle;

/// A triangle together with the (straight-alpha) color it is drawn with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshTriangle {
    pub triangle: Triangle,
    pub color: Rgba,
}

/// Unindexed list of colored triangles.
///
/// Triangles are expected to wind counter-clockwise when seen from outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    triangles: Vec<MeshTriangle>,
}

impl TriMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_triangle(&mut self, triangle: impl Into<Triangle>, color: Rgba) {
        self.triangles.push(MeshTriangle {
            triangle: triangle.into(),
            color,
        });
    }

    /// Pushes the quad `a b c d` as triangles `a b c` and `a c d`.
    pub fn push_quad(&mut self, [a, b, c, d]: [Vec3; 4], color: Rgba) {
        self.push_triangle([a, b, c], color);
        self.push_triangle([a, c, d], color);
    }

    /// Appends all triangles of `other`.
    pub fn merge(&mut self, other: &TriMesh) {
        self.triangles.extend_from_slice(&other.triangles);
    }

    pub fn triangles(&self) -> &[MeshTriangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.triangles.iter().flat_map(|t| t.triangle.points);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// Axis-aligned box with one color per face.
    ///
    /// Face order: -X, +X, -Y, +Y, -Z, +Z.
    pub fn cuboid(min: Vec3, max: Vec3, colors: [Rgba; 6]) -> Self {
        let [x0, y0, z0] = min.to_array();
        let [x1, y1, z1] = max.to_array();
        let v = Vec3::new;

        let faces = [
            [v(x0, y0, z0), v(x0, y0, z1), v(x0, y1, z1), v(x0, y1, z0)],
            [v(x1, y0, z0), v(x1, y1, z0), v(x1, y1, z1), v(x1, y0, z1)],
            [v(x0, y0, z0), v(x1, y0, z0), v(x1, y0, z1), v(x0, y0, z1)],
            [v(x0, y1, z0), v(x0, y1, z1), v(x1, y1, z1), v(x1, y1, z0)],
            [v(x0, y0, z0), v(x0, y1, z0), v(x1, y1, z0), v(x1, y0, z0)],
            [v(x0, y0, z1), v(x1, y0, z1), v(x1, y1, z1), v(x0, y1, z1)],
        ];

        let mut mesh = Self::new();
        for (quad, color) in faces.into_iter().zip(colors) {
            mesh.push_quad(quad, color);
        }
        mesh
    }

    /// Cube of edge length `size` centered on the origin, uniformly colored.
    pub fn cube(size: f32, color: Rgba) -> Self {
        let h = Vec3::splat(size * 0.5);
        Self::cuboid(-h, h, [color; 6])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_has_no_bounds() {
        assert_eq!(TriMesh::new().bounds(), None);
        assert!(TriMesh::new().is_empty());
    }

    #[test]
    fn cube_has_twelve_triangles() {
        let cube = TriMesh::cube(2.0, Rgba::WHITE);
        assert_eq!(cube.len(), 12);
        assert_eq!(cube.bounds(), Some((Vec3::splat(-1.0), Vec3::splat(1.0))));
    }

    #[test]
    fn cuboid_faces_point_outwards() {
        let cube = TriMesh::cube(2.0, Rgba::WHITE);
        for t in cube.triangles() {
            let Some(n) = t.triangle.normal() else { panic!("degenerate cube face") };
            // Center of every face lies along its outward normal.
            assert!(n.dot(t.triangle.center()) > 0.0, "inward face: {:?}", t.triangle);
        }
    }

    #[test]
    fn cuboid_assigns_one_color_per_face() {
        let colors = [
            Rgba::new(1.0, 0.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 0.0, 1.0),
            Rgba::new(0.0, 0.0, 1.0, 1.0),
            Rgba::new(1.0, 1.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 1.0, 1.0),
            Rgba::new(1.0, 0.0, 1.0, 1.0),
        ];
        let mesh = TriMesh::cuboid(Vec3::ZERO, Vec3::ONE, colors);
        for (i, t) in mesh.triangles().iter().enumerate() {
            assert_eq!(t.color, colors[i / 2]);
        }
    }

    #[test]
    fn merge_appends() {
        let mut a = TriMesh::cube(1.0, Rgba::WHITE);
        let b = TriMesh::cube(1.0, Rgba::BLACK);
        a.merge(&b);
        assert_eq!(a.len(), 24);
        assert_eq!(a.triangles()[23].color, Rgba::BLACK);
    }
}

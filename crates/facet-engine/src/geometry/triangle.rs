use std::cmp::Ordering;

use glam::Vec3;

/// Twice the area below which a triangle counts as degenerate.
const AREA_EPSILON: f32 = f32::EPSILON;

/// A triangle in 3D space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
}

impl Triangle {
    pub fn from_points(points: [impl Into<Vec3>; 3]) -> Self {
        Self {
            points: points.map(Into::into),
        }
    }

    /// Whether the points form an actual triangle rather than a line or a point.
    pub fn is_valid(&self) -> bool {
        self.face_normal().length() > AREA_EPSILON
    }

    pub fn center(&self) -> Vec3 {
        let [a, b, c] = self.points;
        (a + b + c) / 3.0
    }

    /// Cross product of the two edges leaving the first point.
    ///
    /// Not normalized: its length is twice the triangle's area. Points towards
    /// the side from which the triangle winds counter-clockwise.
    pub fn face_normal(&self) -> Vec3 {
        let [a, b, c] = self.points;
        (b - a).cross(c - a)
    }

    /// Unit normal, or `None` for a degenerate triangle.
    pub fn normal(&self) -> Option<Vec3> {
        if !self.is_valid() {
            return None;
        }
        self.face_normal().try_normalize()
    }

    pub fn point_from_barycentric_coords(&self, [wa, wb, wc]: [f32; 3]) -> Vec3 {
        let [a, b, c] = self.points;
        a * wa + b * wb + c * wc
    }

    /// Barycentric coordinates of `point` projected onto the triangle's plane.
    ///
    /// Returns `None` for a degenerate triangle.
    pub fn point_to_barycentric_coords(&self, point: impl Into<Vec3>) -> Option<[f32; 3]> {
        // Real-Time Collision Detection (Ericson), 3.4.
        let p = point.into();
        let [a, b, c] = self.points;

        let v0 = b - a;
        let v1 = c - a;
        let v2 = p - a;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);

        let denom = d00 * d11 - d01 * d01;
        if denom.abs() <= AREA_EPSILON {
            return None;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Some([1.0 - v - w, v, w])
    }

    /// Same triangle with its points sorted, for order-independent comparison.
    ///
    /// Sorting can flip the winding, so the face normal may flip too.
    pub fn normalize(mut self) -> Self {
        self.points.sort_by(|a, b| {
            a.to_array()
                .partial_cmp(&b.to_array())
                .unwrap_or(Ordering::Equal)
        });
        self
    }
}

impl<P> From<[P; 3]> for Triangle
where
    P: Into<Vec3>,
{
    fn from(points: [P; 3]) -> Self {
        Self::from_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_triangle() {
        let t = Triangle::from([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
        assert!(t.is_valid());
    }

    #[test]
    fn collinear_triangle_is_invalid() {
        let t = Triangle::from([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        assert!(!t.is_valid());
        assert_eq!(t.normal(), None);
        assert_eq!(t.point_to_barycentric_coords([0.5, 0.0, 0.0]), None);
    }

    #[test]
    fn normal() {
        let t = Triangle::from([[0.0, 0.0, 0.0], [2.0, 1.0, 0.0], [2.0, 0.0, 0.0]]);
        assert_eq!(t.normal(), Some(Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn face_normal_length_is_twice_the_area() {
        let t = Triangle::from([[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 3.0, 0.0]]);
        assert_eq!(t.face_normal(), Vec3::new(0.0, 0.0, 6.0));
    }

    #[test]
    fn center_is_vertex_average() {
        let t = Triangle::from([[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 3.0]]);
        assert_eq!(t.center(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn barycentric_coords_recover_point() {
        let t = Triangle::from([[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0]]);
        let p = Vec3::new(1.0, 2.0, 0.0);

        let coords = t.point_to_barycentric_coords(p);
        let Some(coords) = coords else { panic!("triangle is valid") };

        assert!((t.point_from_barycentric_coords(coords) - p).length() < 1e-5);
        assert!((coords.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_sorts_points() {
        let a = Triangle::from([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let b = Triangle::from([[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(a.normalize(), b.normalize());
        assert_eq!(a.normalize().points[0], Vec3::new(0.0, 0.0, 1.0));
    }
}

//! Sample geometry shown by the viewer.

use facet_engine::color::Rgba;
use facet_engine::geometry::TriMesh;
use glam::Vec3;

/// Opacity of the bracket; low enough that the cube shows through.
const BRACKET_ALPHA: f32 = 0.45;

/// A unit cube with one color per face and a translucent L-shaped bracket
/// hugging two of its sides.
pub fn demo_mesh() -> TriMesh {
    let mut mesh = TriMesh::cuboid(
        Vec3::splat(-0.5),
        Vec3::splat(0.5),
        [
            Rgba::from_u8(0xd6, 0x4f, 0x4f, 0xff),
            Rgba::from_u8(0x4f, 0xa8, 0xd6, 0xff),
            Rgba::from_u8(0x8a, 0x8a, 0x8a, 0xff),
            Rgba::from_u8(0xe8, 0xc1, 0x4a, 0xff),
            Rgba::from_u8(0x5c, 0xc2, 0x7a, 0xff),
            Rgba::from_u8(0xb0, 0x6c, 0xd4, 0xff),
        ],
    );

    let bracket = Rgba::from_u8(0xf0, 0xf0, 0xf0, 0xff).with_alpha(BRACKET_ALPHA);

    // Floor plate under the cube, then a wall plate behind it.
    mesh.merge(&TriMesh::cuboid(
        Vec3::new(-0.8, -0.8, -0.8),
        Vec3::new(0.8, -0.65, 0.8),
        [bracket; 6],
    ));
    mesh.merge(&TriMesh::cuboid(
        Vec3::new(-0.8, -0.65, -0.8),
        Vec3::new(0.8, 0.8, -0.65),
        [bracket; 6],
    ));

    mesh
}

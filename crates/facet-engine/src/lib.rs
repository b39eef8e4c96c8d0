//! Facet engine crate.
//!
//! Geometry-shaded mesh rendering on wgpu: the WGSL shading stage with its
//! CPU reference model, the mesh renderer that binds the three fragment
//! variants, and the platform + GPU runtime pieces a viewer needs.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod camera;
pub mod color;
pub mod geometry;
pub mod render;
pub mod shading;

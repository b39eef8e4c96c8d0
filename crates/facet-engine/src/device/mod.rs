//! GPU device + surface management.
//!
//! Creates the wgpu device for a window, keeps its surface and depth buffer
//! in sync with the window size, and hands out one frame at a time.

mod context;
mod depth;
mod init;
mod surface;

pub use context::{Gpu, GpuFrame};
pub use depth::{DepthBuffer, DEPTH_FORMAT};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;

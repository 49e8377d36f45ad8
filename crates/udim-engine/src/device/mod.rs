//! GPU device + surface management.
//!
//! The canvas is rasterized on the CPU; this module only owns the wgpu
//! device and the window surface, and copies finished frames into the
//! swapchain texture.

mod error;
mod gpu;
mod init;

pub use error::SurfaceErrorAction;
pub use gpu::{Gpu, PixelFormat};
pub use init::GpuInit;

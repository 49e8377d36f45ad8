//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the stage and the
//! GPU present path.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};

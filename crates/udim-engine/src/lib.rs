//! udim engine crate.
//!
//! Retained 2D scene of anchored shapes laid out in viewport-relative units,
//! driven by a fixed-timestep loop and rasterized onto a canvas.

pub mod coords;
pub mod paint;
pub mod render;
pub mod scene;

pub mod core;
pub mod input;
pub mod time;

pub mod device;
pub mod logging;
pub mod window;

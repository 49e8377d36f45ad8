mod ellipse;
mod frame;

pub use ellipse::{Ellipse, EllipseSettings};
pub use frame::Frame;

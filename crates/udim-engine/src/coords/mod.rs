//! Coordinate and geometry types.
//!
//! Canonical space:
//! - Canvas pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! `UDim` resolves viewport-relative layout into this space.

mod rect;
mod udim;
mod vector;
mod viewport;

pub use rect::Rect;
pub use udim::UDim;
pub use vector::{Vector, VectorError};
pub use viewport::{SharedViewport, Viewport};

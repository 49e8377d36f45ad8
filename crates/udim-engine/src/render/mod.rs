//! Drawing surfaces.
//!
//! Shapes talk to a [`Canvas`], the stateful 2D context of a resizable bitmap.
//! Backends:
//! - [`PixmapCanvas`]: CPU rasterizer (`tiny-skia`), presented by the runtime
//! - [`RecordingCanvas`]: records calls without painting
//!
//! Convention: canvas pixels, top-left origin, +Y down, angles in radians.

pub mod arc;
mod canvas;
mod pixmap;
mod recording;

pub use canvas::Canvas;
pub use pixmap::{CanvasError, PixmapCanvas};
pub use recording::{CanvasOp, RecordingCanvas};

//! Retained scene of anchored, relatively positioned shapes.
//!
//! Responsibilities:
//! - shared shape state (`GuiProps`) and construction defaults (`GuiSettings`)
//! - the closed shape set (`GuiObject`) behind one `Drawable` capability
//! - deterministic paint order (z-index, then insertion order)

mod list;
mod object;
mod z_index;

pub mod shapes;

pub use list::Scene;
pub use object::{Drawable, GuiObject, GuiProps, GuiSettings};
pub use shapes::{Ellipse, EllipseSettings, Frame};
pub use z_index::ZIndex;

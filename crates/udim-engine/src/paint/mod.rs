//! Paint model.
//!
//! Colors are straight-alpha sRGB with byte channels. Their `Display` form is
//! the CSS `rgba(...)` string that canvas backends accept as a paint style.

mod color;

pub use color::Color;

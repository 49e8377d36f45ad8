//! Time subsystem.
//!
//! Two clocks: wall-clock paint timestamps from `PaintClock`, and simulation
//! time advanced in constant steps by `FixedStep`.

mod fixed_step;
mod paint_clock;

pub use fixed_step::{FixedStep, MS_PER_GAME_TICK};
pub use paint_clock::PaintClock;

//! Core engine-facing contracts.
//!
//! `Stage` is the bridge between the runtime (platform loop) and applications:
//! the runtime feeds it paint timestamps, resize signals and input events; the
//! application sees only the scene, keyboard state and fixed simulation steps.

mod app;
mod stage;

pub use app::{App, AppControl, TickCtx};
pub use stage::{FrameReport, Stage, StageConfig};

use crate::coords::{SharedViewport, Viewport};
use crate::input::InputState;
use crate::scene::Scene;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-step context passed to [`App::on_tick`].
pub struct TickCtx<'a> {
    pub scene: &'a mut Scene,
    pub input: &'a InputState,
    pub viewport: &'a SharedViewport,
    /// Step length in milliseconds.
    pub tick_ms: f64,
    /// Monotonic step counter.
    pub tick_index: u64,
}

/// Application contract driven by [`Stage`](super::Stage).
pub trait App {
    /// Called once, before the first frame, to populate the scene.
    fn on_start(&mut self, viewport: &SharedViewport, scene: &mut Scene) {
        let _ = (viewport, scene);
    }

    /// One fixed simulation step.
    fn on_tick(&mut self, ctx: &mut TickCtx<'_>) -> AppControl;

    /// Called after the scene has been updated for a new viewport.
    fn on_resize(&mut self, viewport: Viewport, scene: &mut Scene) {
        let _ = (viewport, scene);
    }
}

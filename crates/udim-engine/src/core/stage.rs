use crate::coords::{SharedViewport, Viewport};
use crate::input::{InputEvent, InputState};
use crate::render::Canvas;
use crate::scene::Scene;
use crate::time::{FixedStep, MS_PER_GAME_TICK};

use super::app::{App, AppControl, TickCtx};

#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Simulation step length in milliseconds.
    pub tick_ms: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self { tick_ms: MS_PER_GAME_TICK }
    }
}

/// Outcome of one paint callback.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    /// Wall time since the previous paint callback.
    pub elapsed_ms: f64,
    /// Simulation steps run this frame.
    pub ticks: u32,
    /// Unconsumed wall time carried into the next frame.
    pub residual_ms: f64,
    pub exit_requested: bool,
}

/// Owns the scene, the viewport it resolves against, keyboard state and the
/// fixed-step clock, and sequences them per paint callback.
///
/// Both the paint path (`frame`) and the resize path (`resize`) take
/// `&mut self`, so they can never interleave with each other. The viewport
/// handle is `Rc`-based, which keeps a `Stage` on the thread that made it.
pub struct Stage {
    viewport: SharedViewport,
    scene: Scene,
    input: InputState,
    step: FixedStep,
    tick_index: u64,
}

impl Stage {
    pub fn new(config: StageConfig, width: u32, height: u32) -> Self {
        Self {
            viewport: SharedViewport::new(width as f32, height as f32),
            scene: Scene::new(),
            input: InputState::new(),
            step: FixedStep::new(config.tick_ms),
            tick_index: 0,
        }
    }

    #[inline]
    pub fn viewport(&self) -> &SharedViewport {
        &self.viewport
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Lets `app` populate the scene and sets the clock baseline to `now`.
    pub fn start(&mut self, now: f64, app: &mut impl App) {
        app.on_start(&self.viewport, &mut self.scene);
        // Objects may have been pushed in any z order.
        self.scene.restack();
        self.step.reset(now);
        log::debug!("stage started with {} objects", self.scene.len());
    }

    /// Feeds one platform event into the keyboard state.
    pub fn handle_input(&mut self, ev: &InputEvent) {
        self.input.apply_event(ev);
    }

    /// Paint callback: accumulate wall time, publish input, run every due
    /// simulation step, then draw once.
    ///
    /// If a step asks to exit, remaining steps and the draw are skipped.
    pub fn frame(&mut self, now: f64, canvas: &mut dyn Canvas, app: &mut impl App) -> FrameReport {
        let elapsed_ms = self.step.begin_frame(now);
        self.input.on_frame_start();

        let mut ticks = 0;
        let mut exit_requested = false;
        while self.step.consume_tick() {
            let mut ctx = TickCtx {
                scene: &mut self.scene,
                input: &self.input,
                viewport: &self.viewport,
                tick_ms: self.step.tick_ms(),
                tick_index: self.tick_index,
            };
            let control = app.on_tick(&mut ctx);
            self.tick_index = self.tick_index.wrapping_add(1);
            ticks += 1;

            if control == AppControl::Exit {
                exit_requested = true;
                break;
            }
        }

        if !exit_requested {
            self.scene.draw_all(canvas);
        }

        log::trace!("frame: {elapsed_ms:.2}ms elapsed, {ticks} ticks");
        FrameReport {
            elapsed_ms,
            ticks,
            residual_ms: self.step.residual_ms(),
            exit_requested,
        }
    }

    /// Viewport-change handler: resize the canvas, re-resolve every object
    /// against the new size and restack.
    pub fn resize(&mut self, canvas: &mut dyn Canvas, width: u32, height: u32, app: &mut impl App) {
        let viewport = Viewport::new(width as f32, height as f32);
        log::debug!("resize to {width}x{height}");

        canvas.resize(width, height);
        self.viewport.set(viewport);
        self.scene.update_all();
        self.scene.restack();
        app.on_resize(viewport, &mut self.scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{UDim, Vector};
    use crate::input::{Key, KeyState};
    use crate::render::{CanvasOp, RecordingCanvas};
    use crate::scene::{Drawable, Ellipse, Frame, GuiSettings, ZIndex};

    #[derive(Default)]
    struct Recorder {
        ticks: u32,
        typed_space: u32,
        exit_after: Option<u32>,
        resized_to: Option<Viewport>,
    }

    impl App for Recorder {
        fn on_start(&mut self, viewport: &SharedViewport, scene: &mut Scene) {
            scene.push(Ellipse::new(viewport, GuiSettings::new().z_index(1)));
            scene.push(Frame::new(
                viewport,
                GuiSettings::new().size(UDim::from_scale(viewport, 0.5, 0.5)),
            ));
        }

        fn on_tick(&mut self, ctx: &mut TickCtx<'_>) -> AppControl {
            self.ticks += 1;
            if ctx.input.is_key_typed(Key::Space) {
                self.typed_space += 1;
            }
            for o in ctx.scene.iter_mut() {
                o.rotate(1.0);
            }
            match self.exit_after {
                Some(n) if self.ticks >= n => AppControl::Exit,
                _ => AppControl::Continue,
            }
        }

        fn on_resize(&mut self, viewport: Viewport, _scene: &mut Scene) {
            self.resized_to = Some(viewport);
        }
    }

    fn stage(app: &mut Recorder) -> Stage {
        let mut s = Stage::new(StageConfig::default(), 200, 100);
        s.start(0.0, app);
        s
    }

    // ── fixed step ────────────────────────────────────────────────────────

    #[test]
    fn ten_ms_gap_runs_two_ticks_and_one_draw() {
        let mut app = Recorder::default();
        let mut s = stage(&mut app);
        let mut c = RecordingCanvas::new(200, 100);

        let r = s.frame(10.0, &mut c, &mut app);
        assert_eq!(r.ticks, 2);
        assert_eq!(r.elapsed_ms, 10.0);
        assert_eq!(r.residual_ms, 2.0);
        assert!(!r.exit_requested);
        assert_eq!(c.count(|op| matches!(op, CanvasOp::ClearRect(_))), 1);
    }

    #[test]
    fn short_frame_still_draws() {
        let mut app = Recorder::default();
        let mut s = stage(&mut app);
        let mut c = RecordingCanvas::new(200, 100);

        let r = s.frame(1.0, &mut c, &mut app);
        assert_eq!(r.ticks, 0);
        assert_eq!(c.count(|op| matches!(op, CanvasOp::ClearRect(_))), 1);
    }

    #[test]
    fn exit_stops_ticking_and_skips_draw() {
        let mut app = Recorder { exit_after: Some(3), ..Recorder::default() };
        let mut s = stage(&mut app);
        let mut c = RecordingCanvas::new(200, 100);

        let r = s.frame(40.0, &mut c, &mut app);
        assert!(r.exit_requested);
        assert_eq!(r.ticks, 3);
        assert!(c.ops().is_empty());
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn typed_key_is_visible_to_every_tick_of_that_frame_only() {
        let mut app = Recorder::default();
        let mut s = stage(&mut app);
        let mut c = RecordingCanvas::new(200, 100);

        s.handle_input(&InputEvent::Key { key: Key::Space, state: KeyState::Pressed, repeat: false });
        s.frame(8.0, &mut c, &mut app);
        assert_eq!(app.typed_space, 2);

        s.frame(16.0, &mut c, &mut app);
        assert_eq!(app.typed_space, 2);
    }

    // ── scene ─────────────────────────────────────────────────────────────

    #[test]
    fn start_restacks_and_ticks_mutate_scene() {
        let mut app = Recorder::default();
        let mut s = stage(&mut app);
        let zs: Vec<_> = s.scene().iter().map(|o| o.z_index()).collect();
        assert_eq!(zs, vec![ZIndex(0), ZIndex(1)]);

        let mut c = RecordingCanvas::new(200, 100);
        s.frame(12.0, &mut c, &mut app);
        for o in s.scene().iter() {
            assert_eq!(o.props().rotation, 3.0);
        }
    }

    #[test]
    fn resize_updates_canvas_viewport_and_objects() {
        let mut app = Recorder::default();
        let mut s = stage(&mut app);
        let mut c = RecordingCanvas::new(200, 100);

        s.resize(&mut c, 400, 300, &mut app);
        assert_eq!(c.size(), (400, 300));
        assert_eq!(s.viewport().get(), Viewport::new(400.0, 300.0));
        assert_eq!(app.resized_to, Some(Viewport::new(400.0, 300.0)));

        let frame_size = s.scene().iter().find_map(|o| match o {
            crate::scene::GuiObject::Frame(f) => Some(f.props().size.absolute()),
            _ => None,
        });
        assert_eq!(frame_size, Some(Vector::new(200.0, 150.0)));
    }

    #[test]
    fn resize_restacks_after_in_place_z_change() {
        let mut app = Recorder::default();
        let mut s = stage(&mut app);

        // Frame starts at the bottom (z 0); lift it above the ellipse.
        let frame = s.scene_mut().get_mut(0).map(|o| {
            o.props_mut().z_index = ZIndex(5);
            matches!(o, crate::scene::GuiObject::Frame(_))
        });
        assert_eq!(frame, Some(true));

        let mut c = RecordingCanvas::new(200, 100);
        s.resize(&mut c, 300, 200, &mut app);

        let zs: Vec<_> = s.scene().iter().map(|o| o.z_index()).collect();
        assert_eq!(zs, vec![ZIndex(1), ZIndex(5)]);

        s.frame(1.0, &mut c, &mut app);
        let ellipse_at = c.ops().iter().position(|op| matches!(op, CanvasOp::Ellipse { .. }));
        let rect_at = c.ops().iter().position(|op| matches!(op, CanvasOp::FillRect(_)));
        assert!(ellipse_at.is_some() && rect_at.is_some());
        assert!(ellipse_at < rect_at, "frame should paint over the ellipse");
    }
}

use anyhow::Result;
use winit::dpi::LogicalSize;

use udim_engine::coords::{SharedViewport, UDim, Vector};
use udim_engine::core::{App, AppControl, StageConfig, TickCtx};
use udim_engine::device::GpuInit;
use udim_engine::input::Key;
use udim_engine::logging::{LoggingConfig, init_logging};
use udim_engine::paint::Color;
use udim_engine::scene::{Drawable, Ellipse, Frame, GuiObject, GuiSettings, Scene};
use udim_engine::window::{Runtime, RuntimeConfig};

/// Degrees turned per simulation step (60 degrees per second at 4ms steps).
const SPIN_PER_TICK: f32 = 0.24;

/// Pixels the frame moves per step while an arrow key is held.
const NUDGE_PER_TICK: f32 = 1.0;

/// Spinning frame under a spinning ellipse.
struct Showcase;

impl App for Showcase {
    fn on_start(&mut self, viewport: &SharedViewport, scene: &mut Scene) {
        let half = || UDim::new(viewport, 0.5, 0.0, 0.5, 0.0);

        scene.push(Frame::new(
            viewport,
            GuiSettings::new()
                .anchor_point(Vector::new(0.5, 0.5))
                .border_size(5.0)
                .border_color(Color::from_rgb(255.0, 0.0, 0.0))
                .position(half())
                .size(half())
                .z_index(0),
        ));
        scene.push(Ellipse::new(
            viewport,
            GuiSettings::new()
                .anchor_point(Vector::new(0.5, 0.5))
                .background(Color::from_rgb(255.0, 255.0, 0.0))
                .border_size(5.0)
                .border_color(Color::BLACK)
                .position(half())
                .size(half())
                .z_index(1),
        ));

        log::info!("showcase: {} objects, Space recolors, arrows move, Esc quits", scene.len());
    }

    fn on_tick(&mut self, ctx: &mut TickCtx<'_>) -> AppControl {
        let input = ctx.input;
        if input.is_key_typed(Key::Escape) {
            return AppControl::Exit;
        }

        let recolor = input.is_key_typed(Key::Space);
        let nudge = arrow_direction(|k| input.is_key_down(k)) * NUDGE_PER_TICK;

        for object in ctx.scene.iter_mut() {
            object.rotate(SPIN_PER_TICK);
            if recolor {
                object.props_mut().background = Color::random();
            }
            if let GuiObject::Frame(frame) = object {
                frame.props_mut().position.add_offset(nudge);
            }
        }

        AppControl::Continue
    }
}

fn arrow_direction(is_down: impl Fn(Key) -> bool) -> Vector {
    let axis = |neg: Key, pos: Key| (is_down(pos) as i8 - is_down(neg) as i8) as f32;
    Vector::new(
        axis(Key::ArrowLeft, Key::ArrowRight),
        axis(Key::ArrowUp, Key::ArrowDown),
    )
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig {
            title: "udim studio".to_string(),
            initial_size: LogicalSize::new(480.0, 720.0),
        },
        GpuInit::default(),
        StageConfig::default(),
        Showcase,
    )
}

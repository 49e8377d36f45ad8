use core::f32::consts::TAU;

use crate::coords::{SharedViewport, Vector};
use crate::render::Canvas;
use crate::scene::{Drawable, GuiProps, GuiSettings};

/// Ellipse construction settings: the common settings plus the arc span.
#[derive(Debug, Clone)]
pub struct EllipseSettings {
    pub gui: GuiSettings,
    /// Radians.
    pub start_angle: f32,
    /// Radians.
    pub end_angle: f32,
    pub anti_clockwise: bool,
}

impl Default for EllipseSettings {
    fn default() -> Self {
        Self {
            gui: GuiSettings::default(),
            start_angle: 0.0,
            end_angle: TAU,
            anti_clockwise: false,
        }
    }
}

impl EllipseSettings {
    pub fn new(gui: GuiSettings) -> Self {
        Self { gui, ..Self::default() }
    }

    pub fn arc(mut self, start: f32, end: f32) -> Self {
        self.start_angle = start;
        self.end_angle = end;
        self
    }

    pub fn anti_clockwise(mut self, anti_clockwise: bool) -> Self {
        self.anti_clockwise = anti_clockwise;
        self
    }
}

impl From<GuiSettings> for EllipseSettings {
    fn from(gui: GuiSettings) -> Self {
        Self::new(gui)
    }
}

/// Ellipse (or elliptical arc) inscribed in the anchored bounding box.
#[derive(Debug, Clone)]
pub struct Ellipse {
    props: GuiProps,
    pub start_angle: f32,
    pub end_angle: f32,
    pub anti_clockwise: bool,
}

impl Ellipse {
    pub fn new(viewport: &SharedViewport, settings: impl Into<EllipseSettings>) -> Self {
        let s = settings.into();
        Self {
            props: GuiProps::from_settings(viewport, s.gui),
            start_angle: s.start_angle,
            end_angle: s.end_angle,
            anti_clockwise: s.anti_clockwise,
        }
    }

    /// Centre of the bounding box.
    pub fn center(&self) -> Vector {
        self.props.bounds().center()
    }

    /// Semi-axes, half the resolved size.
    pub fn radii(&self) -> Vector {
        self.props.size.absolute() * 0.5
    }
}

impl Drawable for Ellipse {
    #[inline]
    fn props(&self) -> &GuiProps {
        &self.props
    }

    #[inline]
    fn props_mut(&mut self) -> &mut GuiProps {
        &mut self.props
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let p = &self.props;

        canvas.save();
        p.apply_styles(canvas);
        canvas.begin_path();
        canvas.ellipse(
            self.center(),
            self.radii(),
            p.rotation_radians(),
            self.start_angle,
            self.end_angle,
            self.anti_clockwise,
        );
        canvas.fill();
        if p.has_border() {
            canvas.stroke();
        }
        canvas.restore();
    }
}

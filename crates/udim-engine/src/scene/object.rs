use crate::coords::{Rect, SharedViewport, UDim, Vector};
use crate::paint::Color;
use crate::render::Canvas;

use super::shapes::{Ellipse, Frame};
use super::ZIndex;

/// State shared by every drawable shape.
#[derive(Debug, Clone)]
pub struct GuiProps {
    /// Pivot as a fraction of the shape's own size; (0.5, 0.5) centres the
    /// shape on `position`.
    pub anchor_point: Vector,
    pub background: Color,
    pub border_color: Color,
    /// Stroke width in pixels. Exactly 0 disables the stroke.
    pub border_size: f32,
    pub position: UDim,
    pub size: UDim,
    /// Degrees, clockwise on screen.
    pub rotation: f32,
    pub z_index: ZIndex,
}

impl GuiProps {
    /// Fills unset settings with defaults bound to `viewport`.
    pub fn from_settings(viewport: &SharedViewport, settings: GuiSettings) -> Self {
        Self {
            anchor_point: settings.anchor_point.unwrap_or_default(),
            background: settings.background.unwrap_or(Color::WHITE),
            border_color: settings.border_color.unwrap_or(Color::BLACK),
            border_size: settings.border_size.unwrap_or(0.0).max(0.0),
            position: settings
                .position
                .unwrap_or_else(|| UDim::new(viewport, 0.0, 0.0, 0.0, 0.0)),
            size: settings
                .size
                .unwrap_or_else(|| UDim::from_offset(viewport, 100.0, 100.0)),
            rotation: settings.rotation.unwrap_or(0.0),
            z_index: settings.z_index.unwrap_or_default(),
        }
    }

    /// Anchored bounding box: `origin = position - anchor * size`.
    pub fn bounds(&self) -> Rect {
        let size = self.size.absolute();
        let origin = Vector::sub(self.position.absolute(), Vector::mul(self.anchor_point, size));
        Rect::from_origin_size(origin, size)
    }

    #[inline]
    pub fn rotation_radians(&self) -> f32 {
        self.rotation.to_radians()
    }

    #[inline]
    pub fn has_border(&self) -> bool {
        self.border_size != 0.0
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
    }

    /// Re-resolves position and size against the current viewport.
    pub fn update(&mut self) {
        self.position.recompute();
        self.size.recompute();
    }

    pub(crate) fn apply_styles(&self, canvas: &mut dyn Canvas) {
        canvas.set_fill_style(&self.background);
        canvas.set_stroke_style(&self.border_color);
        canvas.set_line_width(self.border_size);
    }
}

/// Optional construction settings; anything left unset takes its default.
///
/// Defaults: anchor (0, 0), white background, black border of size 0,
/// position at the top-left corner, 100x100 pixel size, no rotation, z 0.
#[derive(Debug, Clone, Default)]
pub struct GuiSettings {
    pub anchor_point: Option<Vector>,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border_size: Option<f32>,
    pub position: Option<UDim>,
    pub size: Option<UDim>,
    pub rotation: Option<f32>,
    pub z_index: Option<ZIndex>,
}

impl GuiSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor_point(mut self, anchor: Vector) -> Self {
        self.anchor_point = Some(anchor);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_size(mut self, size: f32) -> Self {
        self.border_size = Some(size);
        self
    }

    pub fn position(mut self, position: UDim) -> Self {
        self.position = Some(position);
        self
    }

    pub fn size(mut self, size: UDim) -> Self {
        self.size = Some(size);
        self
    }

    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn z_index(mut self, z: impl Into<ZIndex>) -> Self {
        self.z_index = Some(z.into());
        self
    }
}

/// Capability shared by every shape variant.
pub trait Drawable {
    fn props(&self) -> &GuiProps;
    fn props_mut(&mut self) -> &mut GuiProps;

    /// Issues this shape's canvas calls. Called once per rendered frame.
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Viewport-change hook. The default re-resolves position and size.
    fn update(&mut self) {
        self.props_mut().update();
    }

    /// Accumulates `degrees` into the rotation.
    fn rotate(&mut self, degrees: f32) {
        self.props_mut().rotate(degrees);
    }

    fn z_index(&self) -> ZIndex {
        self.props().z_index
    }
}

/// Closed set of shapes a scene can hold.
#[derive(Debug, Clone)]
pub enum GuiObject {
    Frame(Frame),
    Ellipse(Ellipse),
}

impl GuiObject {
    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            GuiObject::Frame(f) => f,
            GuiObject::Ellipse(e) => e,
        }
    }

    fn as_drawable_mut(&mut self) -> &mut dyn Drawable {
        match self {
            GuiObject::Frame(f) => f,
            GuiObject::Ellipse(e) => e,
        }
    }
}

impl Drawable for GuiObject {
    fn props(&self) -> &GuiProps {
        self.as_drawable().props()
    }

    fn props_mut(&mut self) -> &mut GuiProps {
        self.as_drawable_mut().props_mut()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.as_drawable().draw(canvas)
    }

    fn update(&mut self) {
        self.as_drawable_mut().update()
    }

    fn rotate(&mut self, degrees: f32) {
        self.as_drawable_mut().rotate(degrees)
    }
}

impl From<Frame> for GuiObject {
    fn from(f: Frame) -> Self {
        GuiObject::Frame(f)
    }
}

impl From<Ellipse> for GuiObject {
    fn from(e: Ellipse) -> Self {
        GuiObject::Ellipse(e)
    }
}

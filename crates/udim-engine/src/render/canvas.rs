use crate::coords::{Rect, Vector};
use crate::paint::Color;

/// Stateful 2D drawing context over a resizable bitmap.
///
/// Mirrors the immediate-mode canvas model:
/// - fill/stroke styles and line width are current state, captured by `save`
///   and reinstated by `restore` along with the transform
/// - `rect` and `ellipse` append to the current path; `fill`/`stroke` paint it
/// - path geometry is mapped through the transform in effect when it is added
///
/// Angles are radians.
pub trait Canvas {
    /// Bitmap size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Resizes the bitmap. Contents and drawing state are reset.
    fn resize(&mut self, width: u32, height: u32);

    fn clear_rect(&mut self, rect: Rect);

    fn set_fill_style(&mut self, color: &Color);
    fn set_stroke_style(&mut self, color: &Color);
    fn set_line_width(&mut self, width: f32);

    fn begin_path(&mut self);
    fn rect(&mut self, rect: Rect);

    /// Appends an elliptical arc centred at `center`.
    ///
    /// `rotation` turns the ellipse's axes; `start`/`end` are measured on the
    /// unrotated ellipse and swept clockwise unless `anti_clockwise` is set.
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        center: Vector,
        radii: Vector,
        rotation: f32,
        start: f32,
        end: f32,
        anti_clockwise: bool,
    );

    /// Fills `rect` without touching the current path.
    fn fill_rect(&mut self, rect: Rect);

    fn fill(&mut self);
    fn stroke(&mut self);

    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);

    /// Clears the whole bitmap.
    fn clear(&mut self) {
        let (w, h) = self.size();
        self.clear_rect(Rect::new(0.0, 0.0, w as f32, h as f32));
    }
}

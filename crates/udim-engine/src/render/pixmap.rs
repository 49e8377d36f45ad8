use thiserror::Error;
use tiny_skia::{
    BlendMode, FillRule, Paint, Path, PathBuilder, Pixmap, Point, Stroke, Transform,
};

use crate::coords::{Rect, Vector};
use crate::paint::Color;

use super::arc::flatten_ellipse;
use super::Canvas;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum CanvasError {
    #[error("canvas size {width}x{height} has no pixels")]
    ZeroSize { width: u32, height: u32 },
}

#[derive(Debug, Copy, Clone)]
struct DrawState {
    transform: Transform,
    fill: Color,
    stroke: Color,
    line_width: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
struct SubPath {
    points: Vec<Point>,
    closed: bool,
}

/// CPU raster canvas backed by a `tiny_skia::Pixmap`.
///
/// Pixel data is premultiplied RGBA8, row-major, no padding.
///
/// A resize to a zero dimension drops the bitmap; drawing is then a no-op until
/// the next non-zero resize.
pub struct PixmapCanvas {
    pixmap: Option<Pixmap>,
    width: u32,
    height: u32,
    state: DrawState,
    saved: Vec<DrawState>,
    path: Vec<SubPath>,
}

impl PixmapCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::ZeroSize { width, height })?;
        Ok(Self {
            pixmap: Some(pixmap),
            width,
            height,
            state: DrawState::default(),
            saved: Vec::new(),
            path: Vec::new(),
        })
    }

    /// Premultiplied RGBA8 pixels; empty while the bitmap has no area.
    pub fn data(&self) -> &[u8] {
        self.pixmap.as_ref().map(|p| p.data()).unwrap_or(&[])
    }

    /// Straight-alpha RGBA of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    fn map(&self, v: Vector) -> Point {
        let mut p = [Point::from_xy(v.x, v.y)];
        self.state.transform.map_points(&mut p);
        p[0]
    }

    fn rect_subpath(&self, rect: Rect) -> SubPath {
        SubPath {
            points: rect.corners().iter().map(|&c| self.map(c)).collect(),
            closed: true,
        }
    }

    fn paint_for(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(
            color.r(),
            color.g(),
            color.b(),
            (color.a() * 255.0).round() as u8,
        );
        paint.anti_alias = true;
        paint
    }

    fn fill_subpaths(&mut self, subpaths: &[SubPath], paint: &Paint<'_>) {
        // Filling implicitly closes every subpath.
        let Some(path) = build_path(subpaths, true) else { return };
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

fn build_path(subpaths: &[SubPath], close_all: bool) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for sp in subpaths {
        let Some((first, rest)) = sp.points.split_first() else { continue };
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        if close_all || sp.closed {
            pb.close();
        }
    }
    pb.finish()
}

impl Canvas for PixmapCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixmap = Pixmap::new(width, height);
        self.state = DrawState::default();
        self.saved.clear();
        self.path.clear();
    }

    fn clear_rect(&mut self, rect: Rect) {
        let mut paint = Paint::default();
        paint.blend_mode = BlendMode::Clear;
        paint.anti_alias = false;
        let sp = [self.rect_subpath(rect)];
        self.fill_subpaths(&sp, &paint);
    }

    fn set_fill_style(&mut self, color: &Color) {
        self.state.fill = *color;
    }

    fn set_stroke_style(&mut self, color: &Color) {
        self.state.stroke = *color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Canvas ignores non-positive or non-finite widths.
        if width > 0.0 && width.is_finite() {
            self.state.line_width = width;
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn rect(&mut self, rect: Rect) {
        let sp = self.rect_subpath(rect);
        self.path.push(sp);
    }

    fn ellipse(
        &mut self,
        center: Vector,
        radii: Vector,
        rotation: f32,
        start: f32,
        end: f32,
        anti_clockwise: bool,
    ) {
        if radii.x < 0.0 || radii.y < 0.0 {
            log::warn!("ellipse with negative radii {radii} ignored");
            return;
        }
        let arc = flatten_ellipse(center, radii, rotation, start, end, anti_clockwise);
        let points = arc.points.into_iter().map(|p| self.map(p)).collect();
        self.path.push(SubPath { points, closed: arc.full_turn });
    }

    fn fill_rect(&mut self, rect: Rect) {
        let paint = Self::paint_for(self.state.fill);
        let sp = [self.rect_subpath(rect)];
        self.fill_subpaths(&sp, &paint);
    }

    fn fill(&mut self) {
        let paint = Self::paint_for(self.state.fill);
        let path = std::mem::take(&mut self.path);
        self.fill_subpaths(&path, &paint);
        self.path = path;
    }

    fn stroke(&mut self) {
        let paint = Self::paint_for(self.state.stroke);
        let stroke = Stroke { width: self.state.line_width, ..Stroke::default() };
        let Some(path) = build_path(&self.path, false) else { return };
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        // Unbalanced restore is a no-op, as on a browser canvas.
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform.pre_concat(Transform::from_translate(x, y));
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self
            .state
            .transform
            .pre_concat(Transform::from_rotate(radians.to_degrees()));
    }
}

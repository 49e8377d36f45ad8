use crate::coords::{Rect, Vector};
use crate::paint::Color;

use super::Canvas;

/// One recorded canvas call.
///
/// Styles are stored in their `rgba(...)` string form, the representation a
/// browser-style canvas consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Resize { width: u32, height: u32 },
    ClearRect(Rect),
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f32),
    BeginPath,
    Rect(Rect),
    Ellipse {
        center: Vector,
        radii: Vector,
        rotation: f32,
        start: f32,
        end: f32,
        anti_clockwise: bool,
    },
    FillRect(Rect),
    Fill,
    Stroke,
    Save,
    Restore,
    Translate(Vector),
    Rotate(f32),
}

/// Canvas that paints nothing and records every call in order.
///
/// Used for headless runs and for asserting on draw behavior.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    /// Calls in the order they were issued.
    #[inline]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Forgets recorded calls. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&CanvasOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    #[inline]
    fn record(&mut self, op: CanvasOp) {
        self.ops.push(op);
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.record(CanvasOp::Resize { width, height });
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.record(CanvasOp::ClearRect(rect));
    }

    fn set_fill_style(&mut self, color: &Color) {
        self.record(CanvasOp::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &Color) {
        self.record(CanvasOp::StrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f32) {
        self.record(CanvasOp::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.record(CanvasOp::BeginPath);
    }

    fn rect(&mut self, rect: Rect) {
        self.record(CanvasOp::Rect(rect));
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
        self.record(CanvasOp::Ellipse { center, radii, rotation, start, end, anti_clockwise });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.record(CanvasOp::FillRect(rect));
    }

    fn fill(&mut self) {
        self.record(CanvasOp::Fill);
    }

    fn stroke(&mut self) {
        self.record(CanvasOp::Stroke);
    }

    fn save(&mut self) {
        self.record(CanvasOp::Save);
    }

    fn restore(&mut self) {
        self.record(CanvasOp::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.record(CanvasOp::Translate(Vector::new(x, y)));
    }

    fn rotate(&mut self, radians: f32) {
        self.record(CanvasOp::Rotate(radians));
    }
}

use crate::coords::SharedViewport;
use crate::render::Canvas;
use crate::scene::{Drawable, GuiProps, GuiSettings};

/// Filled, optionally bordered rectangle.
#[derive(Debug, Clone)]
pub struct Frame {
    props: GuiProps,
}

impl Frame {
    #[inline]
    pub fn new(viewport: &SharedViewport, settings: GuiSettings) -> Self {
        Self { props: GuiProps::from_settings(viewport, settings) }
    }
}

impl Drawable for Frame {
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
        let bounds = p.bounds();

        canvas.save();
        p.apply_styles(canvas);

        // Turn about the rectangle's own centre.
        if p.rotation != 0.0 {
            let c = bounds.center();
            canvas.translate(c.x, c.y);
            canvas.rotate(p.rotation_radians());
            canvas.translate(-c.x, -c.y);
        }

        canvas.fill_rect(bounds);
        if p.has_border() {
            canvas.begin_path();
            canvas.rect(bounds);
            canvas.stroke();
        }
        canvas.restore();
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::coords::{Rect, UDim, Vector};
    use crate::paint::Color;
    use crate::render::{CanvasOp, RecordingCanvas};

    fn draw(frame: &Frame) -> RecordingCanvas {
        let mut c = RecordingCanvas::new(200, 100);
        frame.draw(&mut c);
        c
    }

    #[test]
    fn no_border_means_no_stroke() {
        let vp = SharedViewport::new(200.0, 100.0);
        let c = draw(&Frame::new(&vp, GuiSettings::new()));
        assert_eq!(c.count(|op| *op == CanvasOp::Stroke), 0);
        assert_eq!(c.count(|op| matches!(op, CanvasOp::FillRect(_))), 1);
    }

    #[test]
    fn border_strokes_exactly_once() {
        let vp = SharedViewport::new(200.0, 100.0);
        let c = draw(&Frame::new(&vp, GuiSettings::new().border_size(5.0)));
        assert_eq!(c.count(|op| *op == CanvasOp::Stroke), 1);
        assert_eq!(c.count(|op| *op == CanvasOp::LineWidth(5.0)), 1);
    }

    #[test]
    fn unrotated_call_sequence() {
        let vp = SharedViewport::new(200.0, 100.0);
        let frame = Frame::new(
            &vp,
            GuiSettings::new()
                .background(Color::from_rgb(255.0, 0.0, 0.0))
                .position(UDim::from_offset(&vp, 10.0, 20.0))
                .size(UDim::from_offset(&vp, 30.0, 40.0)),
        );
        let c = draw(&frame);
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(
            c.ops(),
            &[
                CanvasOp::Save,
                CanvasOp::FillStyle("rgba(255, 0, 0, 1)".to_string()),
                CanvasOp::StrokeStyle("rgba(0, 0, 0, 1)".to_string()),
                CanvasOp::LineWidth(0.0),
                CanvasOp::FillRect(r),
                CanvasOp::Restore,
            ]
        );
    }

    #[test]
    fn rotation_pivots_on_centre() {
        let vp = SharedViewport::new(200.0, 100.0);
        let frame = Frame::new(
            &vp,
            GuiSettings::new()
                .anchor_point(Vector::new(0.5, 0.5))
                .position(UDim::from_scale(&vp, 0.5, 0.5))
                .size(UDim::from_offset(&vp, 20.0, 20.0))
                .rotation(90.0),
        );
        let c = draw(&frame);
        let transforms: Vec<_> = c
            .ops()
            .iter()
            .filter(|op| matches!(op, CanvasOp::Translate(_) | CanvasOp::Rotate(_)))
            .cloned()
            .collect();
        assert_eq!(transforms.len(), 3);
        assert_eq!(transforms[0], CanvasOp::Translate(Vector::new(100.0, 50.0)));
        match transforms[1] {
            CanvasOp::Rotate(r) => assert!((r - FRAC_PI_2).abs() < 1e-6),
            ref other => panic!("expected rotate, got {other:?}"),
        }
        assert_eq!(transforms[2], CanvasOp::Translate(Vector::new(-100.0, -50.0)));
    }

    #[test]
    fn centred_anchor_places_rect_around_position() {
        let vp = SharedViewport::new(200.0, 100.0);
        let frame = Frame::new(
            &vp,
            GuiSettings::new()
                .anchor_point(Vector::new(0.5, 0.5))
                .position(UDim::new(&vp, 0.5, 0.0, 0.5, 0.0))
                .size(UDim::new(&vp, 0.5, 0.0, 0.5, 0.0)),
        );
        let c = draw(&frame);
        assert!(c.ops().contains(&CanvasOp::FillRect(Rect::new(50.0, 25.0, 100.0, 50.0))));
    }
}

//! Elliptical arc flattening shared by raster backends.

use core::f32::consts::TAU;

use crate::coords::Vector;

/// Segments used for a full turn; partial arcs get a proportional share.
const SEGMENTS_PER_TURN: f32 = 96.0;

/// Signed sweep from `start` to `end` in radians.
///
/// Follows canvas arc rules: a requested span of a full turn or more in the
/// winding direction draws the whole ellipse; anything shorter is reduced
/// modulo 2π. Clockwise sweeps are positive.
pub fn arc_sweep(start: f32, end: f32, anti_clockwise: bool) -> f32 {
    if !anti_clockwise {
        if end - start >= TAU {
            TAU
        } else {
            (end - start).rem_euclid(TAU)
        }
    } else if start - end >= TAU {
        -TAU
    } else {
        -(start - end).rem_euclid(TAU)
    }
}

/// Flattened arc.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPoints {
    pub points: Vec<Vector>,
    /// The arc covers the whole ellipse and should be closed.
    pub full_turn: bool,
}

/// Samples an elliptical arc into points along its outline.
///
/// `radii` are the semi-axes; `rotation` turns those axes about `center`.
pub fn flatten_ellipse(
    center: Vector,
    radii: Vector,
    rotation: f32,
    start: f32,
    end: f32,
    anti_clockwise: bool,
) -> ArcPoints {
    let sweep = arc_sweep(start, end, anti_clockwise);
    let segments = ((sweep.abs() / TAU) * SEGMENTS_PER_TURN).ceil().max(1.0) as usize;

    let (sin_r, cos_r) = rotation.sin_cos();
    let points = (0..=segments)
        .map(|i| {
            let t = start + sweep * (i as f32 / segments as f32);
            let local = Vector::new(radii.x * t.cos(), radii.y * t.sin());
            Vector::new(
                center.x + local.x * cos_r - local.y * sin_r,
                center.y + local.x * sin_r + local.y * cos_r,
            )
        })
        .collect();

    ArcPoints { points, full_turn: sweep.abs() >= TAU }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn sweep_full_turn_both_directions() {
        assert_eq!(arc_sweep(0.0, TAU, false), TAU);
        assert_eq!(arc_sweep(0.0, 10.0, false), TAU);
        assert_eq!(arc_sweep(TAU, 0.0, true), -TAU);
    }

    #[test]
    fn sweep_partial_wraps_into_winding_direction() {
        assert!(close(arc_sweep(0.0, FRAC_PI_2, false), FRAC_PI_2));
        // Going the "wrong" way round clockwise covers the rest of the circle.
        assert!(close(arc_sweep(FRAC_PI_2, 0.0, false), 3.0 * FRAC_PI_2));
        assert!(close(arc_sweep(0.0, FRAC_PI_2, true), -3.0 * FRAC_PI_2));
        assert_eq!(arc_sweep(1.0, 1.0, false), 0.0);
    }

    #[test]
    fn full_ellipse_starts_and_ends_on_major_axis() {
        let arc = flatten_ellipse(Vector::new(50.0, 50.0), Vector::new(20.0, 10.0), 0.0, 0.0, TAU, false);
        assert!(arc.full_turn);
        let first = arc.points[0];
        let last = *arc.points.last().unwrap();
        assert!(close(first.x, 70.0) && close(first.y, 50.0));
        assert!(close(last.x, 70.0) && close(last.y, 50.0));
    }

    #[test]
    fn rotation_turns_axes() {
        let arc = flatten_ellipse(Vector::zero(), Vector::new(20.0, 10.0), FRAC_PI_2, 0.0, PI, false);
        assert!(!arc.full_turn);
        // The major axis now points down +Y.
        assert!(close(arc.points[0].x, 0.0));
        assert!(close(arc.points[0].y, 20.0));
    }

    #[test]
    fn points_stay_on_the_outline() {
        let arc = flatten_ellipse(Vector::zero(), Vector::new(30.0, 15.0), 0.0, 0.0, TAU, false);
        for p in arc.points {
            let k = (p.x / 30.0).powi(2) + (p.y / 15.0).powi(2);
            assert!(close(k, 1.0));
        }
    }
}

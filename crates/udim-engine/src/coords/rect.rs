use super::Vector;

/// Axis-aligned rectangle in canvas pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vector,
    pub size: Vector,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vector::new(x, y),
            size: Vector::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vector, size: Vector) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vector {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vector {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vector {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// The four corners, clockwise from the origin (in +Y-down space).
    #[inline]
    pub fn corners(self) -> [Vector; 4] {
        let Vector { x, y } = self.origin;
        let Vector { x: w, y: h } = self.size;
        [
            Vector::new(x, y),
            Vector::new(x + w, y),
            Vector::new(x + w, y + h),
            Vector::new(x, y + h),
        ]
    }
}

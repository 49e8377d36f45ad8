use super::{SharedViewport, Vector};

/// Hybrid position/size unit: a fraction of the viewport plus a pixel offset.
///
/// `absolute = scale * viewport_size + offset`, resolved eagerly: every mutator
/// recomputes before returning, so `absolute()` is never stale with respect to
/// `scale` and `offset`. A viewport change is picked up by [`UDim::recompute`].
///
/// Getters return copies; the only way to change a `UDim` is through its mutators.
#[derive(Debug, Clone)]
pub struct UDim {
    viewport: SharedViewport,
    scale: Vector,
    offset: Vector,
    absolute: Vector,
}

impl UDim {
    pub fn new(
        viewport: &SharedViewport,
        scale_x: f32,
        offset_x: f32,
        scale_y: f32,
        offset_y: f32,
    ) -> Self {
        Self::from_parts(
            viewport,
            Vector::new(scale_x, scale_y),
            Vector::new(offset_x, offset_y),
        )
    }

    pub fn from_parts(viewport: &SharedViewport, scale: Vector, offset: Vector) -> Self {
        let mut u = Self {
            viewport: viewport.clone(),
            scale,
            offset,
            absolute: Vector::zero(),
        };
        u.recompute();
        u
    }

    /// Purely proportional unit.
    pub fn from_scale(viewport: &SharedViewport, x: f32, y: f32) -> Self {
        Self::new(viewport, x, 0.0, y, 0.0)
    }

    /// Purely pixel unit.
    pub fn from_offset(viewport: &SharedViewport, x: f32, y: f32) -> Self {
        Self::new(viewport, 0.0, x, 0.0, y)
    }

    #[inline]
    pub fn absolute(&self) -> Vector {
        self.absolute
    }

    #[inline]
    pub fn scale(&self) -> Vector {
        self.scale
    }

    #[inline]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[inline]
    pub fn viewport(&self) -> &SharedViewport {
        &self.viewport
    }

    /// Re-resolves `absolute` against the current viewport size.
    pub fn recompute(&mut self) {
        let size = self.viewport.get().as_vector();
        self.absolute = self.scale * size + self.offset;
    }

    pub fn add_scale(&mut self, v: Vector) {
        self.scale.add_mut(v);
        self.recompute();
    }

    pub fn sub_scale(&mut self, v: Vector) {
        self.scale.sub_mut(v);
        self.recompute();
    }

    pub fn add_offset(&mut self, v: Vector) {
        self.offset.add_mut(v);
        self.recompute();
    }

    pub fn sub_offset(&mut self, v: Vector) {
        self.offset.sub_mut(v);
        self.recompute();
    }

    /// Moves scale and offset independently towards `target`.
    pub fn lerp_mut(&mut self, target: &UDim, alpha: f32) {
        self.scale.lerp_mut(target.scale, alpha);
        self.offset.lerp_mut(target.offset, alpha);
        self.recompute();
    }

    /// Interpolated copy bound to `current`'s viewport.
    pub fn lerp(current: &UDim, target: &UDim, alpha: f32) -> UDim {
        Self::from_parts(
            &current.viewport,
            Vector::lerp(current.scale, target.scale, alpha),
            Vector::lerp(current.offset, target.offset, alpha),
        )
    }
}

impl PartialEq for UDim {
    /// Compares layout only; two units are equal when they describe the same
    /// scale and offset, regardless of which viewport they are bound to.
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale && self.offset == other.offset
    }
}

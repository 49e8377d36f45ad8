use std::cell::Cell;
use std::rc::Rc;

use super::Vector;

/// Canvas size in pixels.
///
/// Scale components of a [`UDim`](super::UDim) are fractions of this size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn as_vector(self) -> Vector {
        Vector::new(self.width, self.height)
    }
}

/// Shared handle to the current canvas size.
///
/// Every `UDim` bound to a canvas holds a clone of the same handle, so a resize
/// is visible to all of them at once. Values resolved from it are only refreshed
/// when the owner calls `recompute`.
///
/// The handle is `Rc`-based and therefore confined to a single thread.
#[derive(Debug, Clone, Default)]
pub struct SharedViewport(Rc<Cell<Viewport>>);

impl SharedViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Rc::new(Cell::new(Viewport::new(width, height))))
    }

    #[inline]
    pub fn get(&self) -> Viewport {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, viewport: Viewport) {
        self.0.set(viewport);
    }

    /// True when both handles observe the same underlying size.
    #[inline]
    pub fn same_as(&self, other: &SharedViewport) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Viewport> for SharedViewport {
    fn from(v: Viewport) -> Self {
        Self(Rc::new(Cell::new(v)))
    }
}

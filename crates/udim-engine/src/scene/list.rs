use crate::render::Canvas;

use super::{Drawable, GuiObject};

/// Ordered collection of the objects drawn each frame.
///
/// Objects are kept sorted by ascending z-index. Ties keep insertion order,
/// so among equal z the most recently added object is painted last (on top).
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<GuiObject>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `object` after every object whose z-index is `<=` its own.
    /// Returns the index it landed at.
    pub fn push(&mut self, object: impl Into<GuiObject>) -> usize {
        let object = object.into();
        let z = object.z_index();
        let at = self.objects.partition_point(|o| o.z_index() <= z);
        self.objects.insert(at, object);
        at
    }

    /// Re-sorts after z-indices were changed in place. Stable.
    pub fn restack(&mut self) {
        self.objects.sort_by_key(|o| o.z_index());
    }

    pub fn remove(&mut self, index: usize) -> Option<GuiObject> {
        (index < self.objects.len()).then(|| self.objects.remove(index))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&GuiObject> {
        self.objects.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut GuiObject> {
        self.objects.get_mut(index)
    }

    /// Objects in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &GuiObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GuiObject> {
        self.objects.iter_mut()
    }

    /// Runs every object's viewport-change hook.
    pub fn update_all(&mut self) {
        for o in &mut self.objects {
            o.update();
        }
    }

    /// Clears the canvas, then draws every object back to front.
    pub fn draw_all(&self, canvas: &mut dyn Canvas) {
        canvas.clear();
        for o in &self.objects {
            o.draw(canvas);
        }
    }
}

//! Single-column stacks.

use vellum_core::geometry::{Bounds, Point, Size};

use super::{LayoutError, ensure_pitch, ensure_positive};

/// A vertical stack of equally sized items.
///
/// Item `i` is placed at `(origin_x, origin_y + i · row_height)`. The row
/// height is the pitch between item tops, so it is usually the item height
/// plus the gap below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSpec {
    origin: Point,
    item: Size,
    row_height: f32,
}

impl StackSpec {
    /// Creates a stack spec.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGrid`] if the item size is not
    /// positive or the row height is shorter than the item height.
    pub fn new(
        origin_x: f32,
        origin_y: f32,
        item_width: f32,
        item_height: f32,
        row_height: f32,
    ) -> Result<Self, LayoutError> {
        ensure_positive("item width", item_width)?;
        ensure_positive("item height", item_height)?;
        ensure_pitch("row height", row_height, item_height)?;

        Ok(Self {
            origin: Point::new(origin_x, origin_y),
            item: Size::new(item_width, item_height),
            row_height,
        })
    }

    /// Returns the top-left corner of item `index`.
    pub fn position(&self, index: usize) -> Point {
        self.origin.with_y(self.origin.y() + index as f32 * self.row_height)
    }

    /// Returns the frame of item `index`.
    pub fn bounds(&self, index: usize) -> Bounds {
        Bounds::new_from_top_left(self.position(index), self.item)
    }

    /// Iterates over the frames of the first `count` items.
    pub fn frames(&self, count: usize) -> impl Iterator<Item = Bounds> + '_ {
        (0..count).map(|index| self.bounds(index))
    }

    pub fn item_size(&self) -> Size {
        self.item
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }
}

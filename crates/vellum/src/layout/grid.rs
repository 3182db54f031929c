//! Row/column grid placement.

use vellum_core::geometry::{Bounds, Point, Size};

use super::{LayoutError, ensure_non_negative, ensure_positive};

/// Parameters of a row-major grid of equally sized cells.
///
/// Cell `i` sits in row `⌊i / k⌋` and column `i mod k`, where `k` is
/// `columns_per_row`. Cells are separated by `column_gap` horizontally and
/// `row_gap` vertically.
///
/// # Examples
///
/// ```
/// use vellum::layout::GridSpec;
///
/// let grid = GridSpec::new(0.7, 2.55, 4.05, 1.2, 0.2, 0.2, 2).unwrap();
/// let cell = grid.position(3);
/// assert_eq!((cell.row(), cell.col()), (1, 1));
/// assert!((cell.bounds().min_x() - 4.95).abs() < 1e-5);
/// assert!((cell.bounds().min_y() - 3.95).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    origin: Point,
    cell: Size,
    column_gap: f32,
    row_gap: f32,
    columns_per_row: usize,
}

impl GridSpec {
    /// Creates a grid spec.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGrid`] if a cell dimension is not
    /// positive, a gap is negative or `columns_per_row` is zero.
    pub fn new(
        origin_x: f32,
        origin_y: f32,
        cell_width: f32,
        cell_height: f32,
        column_gap: f32,
        row_gap: f32,
        columns_per_row: usize,
    ) -> Result<Self, LayoutError> {
        ensure_positive("cell width", cell_width)?;
        ensure_positive("cell height", cell_height)?;
        ensure_non_negative("column gap", column_gap)?;
        ensure_non_negative("row gap", row_gap)?;
        if columns_per_row == 0 {
            return Err(LayoutError::InvalidGrid(
                "columns per row must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            origin: Point::new(origin_x, origin_y),
            cell: Size::new(cell_width, cell_height),
            column_gap,
            row_gap,
            columns_per_row,
        })
    }

    pub fn columns_per_row(&self) -> usize {
        self.columns_per_row
    }

    pub fn cell_size(&self) -> Size {
        self.cell
    }

    /// Returns the cell at `index`.
    pub fn position(&self, index: usize) -> GridCell {
        let row = index / self.columns_per_row;
        let col = index % self.columns_per_row;
        let x = self.origin.x() + col as f32 * (self.cell.width() + self.column_gap);
        let y = self.origin.y() + row as f32 * (self.cell.height() + self.row_gap);

        GridCell {
            row,
            col,
            bounds: Bounds::new_from_top_left(Point::new(x, y), self.cell),
        }
    }

    /// Iterates over the first `count` cells in index order.
    pub fn cells(&self, count: usize) -> impl Iterator<Item = GridCell> + '_ {
        (0..count).map(|index| self.position(index))
    }

    /// Returns the number of rows `count` cells occupy.
    pub fn row_count(&self, count: usize) -> usize {
        count.div_ceil(self.columns_per_row)
    }
}

/// One placed grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    row: usize,
    col: usize,
    bounds: Bounds,
}

impl GridCell {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn grid_strategy() -> impl Strategy<Value = GridSpec> {
        (
            -5.0f32..5.0,
            -5.0f32..5.0,
            0.1f32..5.0,
            0.1f32..5.0,
            0.01f32..1.0,
            0.01f32..1.0,
            1usize..6,
        )
            .prop_map(|(x, y, w, h, col_gap, row_gap, k)| {
                GridSpec::new(x, y, w, h, col_gap, row_gap, k).expect("strategy yields valid specs")
            })
    }

    /// Gap pairs where at least one gap is negative.
    fn negative_gaps_strategy() -> impl Strategy<Value = (f32, f32)> {
        prop_oneof![
            (-5.0f32..-0.001, -5.0f32..1.0),
            (-5.0f32..1.0, -5.0f32..-0.001),
        ]
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Row and column follow integer division and remainder.
    fn check_row_col_arithmetic(grid: GridSpec, index: usize) -> Result<(), TestCaseError> {
        let cell = grid.position(index);
        let k = grid.columns_per_row();
        prop_assert_eq!(cell.row(), index / k);
        prop_assert_eq!(cell.col(), index % k);
        Ok(())
    }

    /// Two distinct cells never overlap.
    fn check_distinct_cells_do_not_overlap(
        grid: GridSpec,
        a: usize,
        b: usize,
    ) -> Result<(), TestCaseError> {
        prop_assume!(a != b);
        let first = grid.position(a).bounds();
        let second = grid.position(b).bounds();
        prop_assert!(
            !first.overlaps(second),
            "cells {} and {} overlap: {:?} / {:?}",
            a,
            b,
            first,
            second
        );
        Ok(())
    }

    /// Specs that would let cells overlap are never constructed.
    fn check_negative_gaps_rejected(
        width: f32,
        height: f32,
        column_gap: f32,
        row_gap: f32,
        columns: usize,
    ) -> Result<(), TestCaseError> {
        let result = GridSpec::new(0.0, 0.0, width, height, column_gap, row_gap, columns);
        prop_assert!(
            matches!(result, Err(LayoutError::InvalidGrid(_))),
            "gaps ({}, {}) accepted",
            column_gap,
            row_gap
        );
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn row_col_arithmetic(grid in grid_strategy(), index in 0usize..200) {
            check_row_col_arithmetic(grid, index)?;
        }

        #[test]
        fn distinct_cells_do_not_overlap(grid in grid_strategy(), a in 0usize..40, b in 0usize..40) {
            check_distinct_cells_do_not_overlap(grid, a, b)?;
        }

        #[test]
        fn negative_gaps_rejected(
            width in 0.1f32..5.0,
            height in 0.1f32..5.0,
            (column_gap, row_gap) in negative_gaps_strategy(),
            columns in 1usize..6,
        ) {
            check_negative_gaps_rejected(width, height, column_gap, row_gap, columns)?;
        }
    }
}

//! Testing utilities for rectgrid.
//!
//! Backing storage is deliberately outside this crate's scope; the unit and
//! integration tests still need one, so this module carries [`VecGrid`], a
//! minimal dense row-major store implementing every capability trait. It
//! doubles as the reference for writing a collaborator implementation.

use crate::access::{Bounded2D, ReadRectangular, Rectangular, RefRectangular};
use crate::{Bounds2D, Index2D};

/// A dense, row-major grid backed by a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecGrid<T> {
    bounds: Bounds2D,
    cells: Vec<T>,
}

impl<T> VecGrid<T> {
    /// Create a grid of the given shape with every cell set to `fill`.
    pub fn new(bounds: Bounds2D, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            bounds,
            cells: vec![fill; bounds.area()],
        }
    }

    /// Create a grid from nested row vectors.
    ///
    /// # Panics
    /// Panics if the rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let row_count = rows.len();
        let column_count = rows.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(row_count * column_count);
        for row in rows {
            assert_eq!(row.len(), column_count, "ragged rows");
            cells.extend(row);
        }
        Self {
            bounds: Bounds2D::new(row_count, column_count),
            cells,
        }
    }

    fn offset(&self, at: Index2D) -> usize {
        assert!(
            self.bounds.is_valid_index(at),
            "index out of bounds: {at} outside {}",
            self.bounds
        );
        at.row * self.bounds.columns + at.column
    }
}

impl<T> Bounded2D for VecGrid<T> {
    fn boundaries(&self) -> Bounds2D {
        self.bounds
    }
}

impl<T: Clone> ReadRectangular<T> for VecGrid<T> {
    fn get(&self, at: Index2D) -> T {
        self.cells[self.offset(at)].clone()
    }
}

impl<T: Clone> Rectangular<T> for VecGrid<T> {
    fn set(&mut self, at: Index2D, value: T) {
        let offset = self.offset(at);
        self.cells[offset] = value;
    }
}

impl<T: Clone> RefRectangular<T> for VecGrid<T> {
    fn get_mut(&mut self, at: Index2D) -> &mut T {
        let offset = self.offset(at);
        &mut self.cells[offset]
    }
}

//! Two-dimensional coordinate and shape types.
//!
//! `Index2D` addresses a single element of a rectangular collection;
//! `Bounds2D` describes the collection's shape. Both are plain value types
//! with component-wise equality, created ad hoc per operation.

use crate::{GridError, Result};
use std::fmt;

/// A position inside a rectangular collection: row first, column second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index2D {
    /// Dimension-1 index.
    pub row: usize,
    /// Dimension-2 index.
    pub column: usize,
}

impl Index2D {
    /// Create an index at `(row, column)`.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Index2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The `(rows, columns)` shape of a rectangular collection.
///
/// Either dimension may be zero; a zero-area shape has no valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds2D {
    /// Extent along dimension 1.
    pub rows: usize,
    /// Extent along dimension 2.
    pub columns: usize,
}

impl Bounds2D {
    /// Create a shape of `rows x columns`.
    #[inline]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Create a shape from signed dimensions.
    ///
    /// This is the checked boundary for callers holding signed values;
    /// [`Bounds2D::new`] already makes negative dimensions unrepresentable.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfRange`] if either dimension is negative.
    pub fn from_signed(rows: i64, columns: i64) -> Result<Self> {
        if rows < 0 {
            return Err(GridError::OutOfRange {
                what: "rows",
                value: rows,
                limit: 0,
            });
        }
        if columns < 0 {
            return Err(GridError::OutOfRange {
                what: "columns",
                value: columns,
                limit: 0,
            });
        }
        Ok(Self::new(rows as usize, columns as usize))
    }

    /// True iff `at` addresses an element within this shape.
    #[inline]
    pub const fn is_valid_index(&self, at: Index2D) -> bool {
        at.row < self.rows && at.column < self.columns
    }

    /// Total number of elements.
    #[inline]
    pub const fn area(&self) -> usize {
        self.rows * self.columns
    }

    /// True iff the shape contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

//! Generic views and linear-scan queries over two-dimensional rectangular
//! collections.
//!
//! Any backing store that can answer "what is my shape?" and "what element
//! lives at (row, column)?" participates by implementing the capability
//! traits; views and queries are written once against those traits and work
//! for every store.
//!
//! # Core Types
//!
//! - [`Index2D`] / [`Bounds2D`]: the coordinate and shape model
//! - [`ReadRectangular`], [`Rectangular`], [`RefRectangular`]: element
//!   access capabilities a backing store implements (all sharing the
//!   [`Bounded2D`] boundary query)
//! - [`Row`] / [`Column`] / [`RowMut`] / [`ColumnMut`]: non-owning lane
//!   views exposing one row or column as a linear sequence
//! - [`ItemRequestResult`]: "item or absent" — queries never model
//!   "not found" as an error
//! - [`Predicate`] / [`DynPredicate`]: monomorphized and dynamically
//!   dispatched matching conditions behind one capability
//!
//! # Queries
//!
//! - [`find_index`] / [`find_last_index`] and the sector-scoped
//!   [`find_index_in`] / [`find_last_index_in`]
//! - [`find`] / [`find_last`] / [`find_in`] / [`find_last_in`]
//! - [`find_all`] / [`find_all_indices`] into any [`Accumulate`] output
//! - [`true_for_all`] / [`exists`]
//! - [`row`] / [`column`] / [`row_mut`] / [`column_mut`] view constructors
//!
//! Forward scans traverse in strictly ascending row-major order (column
//! fastest); backward scans are the exact mirror.
//!
//! # Example
//!
//! ```rust
//! use rectgrid::{find_index, find_all_indices, testing::VecGrid, Index2D, ItemRequestResult};
//!
//! let grid = VecGrid::from_rows(vec![
//!     vec![1, 2, 3],
//!     vec![4, 5, 6],
//!     vec![7, 8, 9],
//! ]);
//!
//! assert_eq!(
//!     find_index(&grid, &|x: &i32| *x == 5),
//!     ItemRequestResult::Success(Index2D::new(1, 1)),
//! );
//!
//! let mut hits = Vec::new();
//! find_all_indices(&grid, &|x: &i32| *x > 6, &mut hits).unwrap();
//! assert_eq!(hits, vec![Index2D::new(2, 0), Index2D::new(2, 1), Index2D::new(2, 2)]);
//! ```
//!
//! # Concurrency
//!
//! Everything here is single-threaded and synchronous. Views borrow their
//! collection and re-validate against its live boundaries on every access;
//! callers sharing a collection across threads must bring their own
//! synchronization.

mod access;
mod request;
mod search;
mod shape;
pub mod testing;
pub mod view;

// ============================================================================
// Coordinate and shape model
// ============================================================================
pub use shape::{Bounds2D, Index2D};

// ============================================================================
// Capability traits
// ============================================================================
pub use access::{Bounded2D, ReadRectangular, Rectangular, RefRectangular};

// ============================================================================
// Results and predicates
// ============================================================================
pub use request::{DynPredicate, ItemRequestResult, Predicate};

// ============================================================================
// Views
// ============================================================================
pub use view::{Axis, ByColumn, ByRow, Column, ColumnMut, Lane, LaneIter, LaneMut, Row, RowMut};

// ============================================================================
// Queries
// ============================================================================
pub use search::{
    column, column_mut, exists, find, find_all, find_all_indices, find_in, find_index,
    find_index_in, find_last, find_last_in, find_last_index, find_last_index_in, row, row_mut,
    true_for_all, Accumulate,
};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while constructing or querying rectangular views.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A constructed value violates a non-negativity or containment
    /// invariant. Detected at construction or validation time, before any
    /// scan begins.
    #[error("{what} {value} out of range (limit {limit})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        limit: i64,
    },

    /// Element access at a position outside the collection's current bounds.
    #[error("index {index} out of bounds for {bounds}")]
    IndexOutOfBounds { index: Index2D, bounds: Bounds2D },

    /// A required callback is absent.
    #[error("missing {what}")]
    InvalidArgument { what: &'static str },

    /// The caller-supplied output collection cannot accept new elements.
    #[error("{what} does not accept insertions")]
    Unsupported { what: &'static str },
}

/// Result type for rectangular view and query operations.
pub type Result<T> = std::result::Result<T, GridError>;

//! Capability traits for rectangular collections.
//!
//! A backing store participates in views and queries by implementing the
//! smallest capability it can offer:
//!
//! - [`ReadRectangular`]: read elements by value
//! - [`Rectangular`]: read and overwrite elements by value
//! - [`RefRectangular`]: hand out mutable references to elements
//!
//! All three share the boundary query through the [`Bounded2D`] supertrait.
//! Every view and query algorithm is generic over the minimal capability it
//! needs, so a read-only store can still use the whole read-only surface.

use crate::{Bounds2D, GridError, Index2D, Result};

/// A type with a two-dimensional extent.
pub trait Bounded2D {
    /// Current shape of the collection.
    fn boundaries(&self) -> Bounds2D;

    /// True iff `at` addresses an element within the current shape.
    #[inline]
    fn is_valid_index(&self, at: Index2D) -> bool {
        self.boundaries().is_valid_index(at)
    }
}

/// Read-only element access by value.
pub trait ReadRectangular<T>: Bounded2D {
    /// Read the element at `at`.
    ///
    /// # Panics
    /// Panics if `at` is outside the current boundaries.
    fn get(&self, at: Index2D) -> T;

    /// Read the element at `at`, or fail if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if `at` is outside the
    /// current boundaries.
    fn try_get(&self, at: Index2D) -> Result<T> {
        if self.is_valid_index(at) {
            Ok(self.get(at))
        } else {
            Err(GridError::IndexOutOfBounds {
                index: at,
                bounds: self.boundaries(),
            })
        }
    }
}

/// Mutable element access by value.
pub trait Rectangular<T>: ReadRectangular<T> {
    /// Overwrite the element at `at`.
    ///
    /// # Panics
    /// Panics if `at` is outside the current boundaries.
    fn set(&mut self, at: Index2D, value: T);

    /// Overwrite the element at `at`, or fail if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if `at` is outside the
    /// current boundaries.
    fn try_set(&mut self, at: Index2D, value: T) -> Result<()> {
        if self.is_valid_index(at) {
            self.set(at, value);
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds {
                index: at,
                bounds: self.boundaries(),
            })
        }
    }
}

/// Mutable element access by reference.
///
/// There is no separate setter: assignment is writing through the returned
/// reference.
pub trait RefRectangular<T>: Bounded2D {
    /// Borrow the element at `at` mutably.
    ///
    /// # Panics
    /// Panics if `at` is outside the current boundaries.
    fn get_mut(&mut self, at: Index2D) -> &mut T;

    /// Borrow the element at `at` mutably, or fail if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if `at` is outside the
    /// current boundaries.
    fn try_get_mut(&mut self, at: Index2D) -> Result<&mut T> {
        if self.is_valid_index(at) {
            Ok(self.get_mut(at))
        } else {
            Err(GridError::IndexOutOfBounds {
                index: at,
                bounds: self.boundaries(),
            })
        }
    }
}

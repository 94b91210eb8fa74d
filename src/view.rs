//! Row and column views over rectangular collections.
//!
//! A view fixes one dimension of a backing collection and exposes the other
//! as a linear sequence. It owns nothing: every access re-validates against
//! the collection's live boundaries, so a view never caches a stale shape.
//!
//! One generic implementation serves all flavors. [`Lane`] is the shared
//! (read-only) view, [`LaneMut`] the mutable one; the [`Axis`] marker picks
//! whether the fixed dimension is the row or the column. [`Row`], [`Column`],
//! [`RowMut`] and [`ColumnMut`] are the aliases callers use.
//!
//! # Example
//! ```
//! use rectgrid::{testing::VecGrid, Row};
//!
//! let grid = VecGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
//! let row = Row::new(&grid, 1).unwrap();
//! assert_eq!(row.to_vec(), vec![4, 5, 6]);
//! ```

use crate::access::{Bounded2D, ReadRectangular, Rectangular, RefRectangular};
use crate::{Bounds2D, GridError, Index2D, Result};
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ByRow {}
    impl Sealed for super::ByColumn {}
}

/// Selects which dimension a lane fixes. Implemented by [`ByRow`] and
/// [`ByColumn`] only.
pub trait Axis: sealed::Sealed {
    /// Name of the fixed dimension, for error reporting.
    const FIXED: &'static str;

    /// Bound the fixed index is validated against.
    fn fixed_bound(bounds: Bounds2D) -> usize;

    /// Extent along the varying dimension.
    fn lane_len(bounds: Bounds2D) -> usize;

    /// Map a (fixed, varying) pair to a collection index.
    fn locate(fixed: usize, i: usize) -> Index2D;
}

/// Fixes the row index; the lane varies over columns.
#[derive(Debug)]
pub enum ByRow {}

/// Fixes the column index; the lane varies over rows.
#[derive(Debug)]
pub enum ByColumn {}

impl Axis for ByRow {
    const FIXED: &'static str = "row index";

    #[inline]
    fn fixed_bound(bounds: Bounds2D) -> usize {
        bounds.rows
    }

    #[inline]
    fn lane_len(bounds: Bounds2D) -> usize {
        bounds.columns
    }

    #[inline]
    fn locate(fixed: usize, i: usize) -> Index2D {
        Index2D::new(fixed, i)
    }
}

impl Axis for ByColumn {
    const FIXED: &'static str = "column index";

    #[inline]
    fn fixed_bound(bounds: Bounds2D) -> usize {
        bounds.columns
    }

    #[inline]
    fn lane_len(bounds: Bounds2D) -> usize {
        bounds.rows
    }

    #[inline]
    fn locate(fixed: usize, i: usize) -> Index2D {
        Index2D::new(i, fixed)
    }
}

/// A shared view of one lane (row or column) of a backing collection.
#[derive(Debug)]
pub struct Lane<'a, C: ?Sized, A: Axis> {
    collection: &'a C,
    fixed: usize,
    _axis: PhantomData<A>,
}

/// A single row, varying over columns.
pub type Row<'a, C> = Lane<'a, C, ByRow>;

/// A single column, varying over rows.
pub type Column<'a, C> = Lane<'a, C, ByColumn>;

/// A mutable view of one lane of a backing collection.
#[derive(Debug)]
pub struct LaneMut<'a, C: ?Sized, A: Axis> {
    collection: &'a mut C,
    fixed: usize,
    _axis: PhantomData<A>,
}

/// A mutable row.
pub type RowMut<'a, C> = LaneMut<'a, C, ByRow>;

/// A mutable column.
pub type ColumnMut<'a, C> = LaneMut<'a, C, ByColumn>;

impl<C: ?Sized, A: Axis> Clone for Lane<'_, C, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, A: Axis> Copy for Lane<'_, C, A> {}

fn validate_fixed<C: Bounded2D + ?Sized, A: Axis>(collection: &C, fixed: usize) -> Result<()> {
    let bound = A::fixed_bound(collection.boundaries());
    if fixed < bound {
        Ok(())
    } else {
        Err(GridError::OutOfRange {
            what: A::FIXED,
            value: fixed as i64,
            limit: bound as i64,
        })
    }
}

impl<'a, C: Bounded2D + ?Sized, A: Axis> Lane<'a, C, A> {
    /// Create a view fixing `fixed` along the axis `A`.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfRange`] if `fixed` is not within the
    /// collection's bound for that dimension.
    pub fn new(collection: &'a C, fixed: usize) -> Result<Self> {
        validate_fixed::<C, A>(collection, fixed)?;
        Ok(Self {
            collection,
            fixed,
            _axis: PhantomData,
        })
    }

    /// The fixed index this lane was constructed with.
    #[inline]
    pub fn fixed_index(&self) -> usize {
        self.fixed
    }

    /// Number of elements, recomputed from the collection's live boundaries.
    #[inline]
    pub fn count(&self) -> usize {
        A::lane_len(self.collection.boundaries())
    }

    /// True iff `i` addresses an element of this lane.
    #[inline]
    pub fn is_valid_index(&self, i: usize) -> bool {
        i < self.count()
    }

    /// Read the element at `i`.
    ///
    /// # Panics
    /// Panics if `i >= count()`.
    #[inline]
    pub fn get<T>(&self, i: usize) -> T
    where
        C: ReadRectangular<T>,
    {
        let count = self.count();
        assert!(i < count, "index out of bounds: lane index {i} >= {count}");
        self.collection.get(A::locate(self.fixed, i))
    }

    /// Read the element at `i`, or fail if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if `i >= count()`.
    pub fn try_get<T>(&self, i: usize) -> Result<T>
    where
        C: ReadRectangular<T>,
    {
        if self.is_valid_index(i) {
            Ok(self.collection.get(A::locate(self.fixed, i)))
        } else {
            Err(GridError::IndexOutOfBounds {
                index: A::locate(self.fixed, i),
                bounds: self.collection.boundaries(),
            })
        }
    }

    /// Lazy iterator over elements `0..count` in ascending index order.
    ///
    /// Each step re-queries the live collection, so the iterator observes
    /// mutation through other handles rather than a snapshot. Calling
    /// `iter` again restarts from the beginning.
    pub fn iter<T>(&self) -> LaneIter<'a, C, A, T>
    where
        C: ReadRectangular<T>,
    {
        LaneIter {
            collection: self.collection,
            fixed: self.fixed,
            position: 0,
            _marker: PhantomData,
        }
    }

    /// Materialize the lane into a vector, in index order.
    pub fn to_vec<T>(&self) -> Vec<T>
    where
        C: ReadRectangular<T>,
    {
        self.iter().collect()
    }
}

impl<'a, C: Bounded2D + ?Sized, A: Axis> LaneMut<'a, C, A> {
    /// Create a mutable view fixing `fixed` along the axis `A`.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfRange`] if `fixed` is not within the
    /// collection's bound for that dimension.
    pub fn new(collection: &'a mut C, fixed: usize) -> Result<Self> {
        validate_fixed::<C, A>(collection, fixed)?;
        Ok(Self {
            collection,
            fixed,
            _axis: PhantomData,
        })
    }

    /// The fixed index this lane was constructed with.
    #[inline]
    pub fn fixed_index(&self) -> usize {
        self.fixed
    }

    /// Number of elements, recomputed from the collection's live boundaries.
    #[inline]
    pub fn count(&self) -> usize {
        A::lane_len(self.collection.boundaries())
    }

    /// True iff `i` addresses an element of this lane.
    #[inline]
    pub fn is_valid_index(&self, i: usize) -> bool {
        i < self.count()
    }

    /// Reborrow as a shared lane.
    pub fn as_lane(&self) -> Lane<'_, C, A> {
        Lane {
            collection: &*self.collection,
            fixed: self.fixed,
            _axis: PhantomData,
        }
    }

    /// Read the element at `i`.
    ///
    /// # Panics
    /// Panics if `i >= count()`.
    #[inline]
    pub fn get<T>(&self, i: usize) -> T
    where
        C: ReadRectangular<T>,
    {
        self.as_lane().get(i)
    }

    /// Read the element at `i`, or fail if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if `i >= count()`.
    pub fn try_get<T>(&self, i: usize) -> Result<T>
    where
        C: ReadRectangular<T>,
    {
        self.as_lane().try_get(i)
    }

    /// Lazy iterator over elements `0..count` in ascending index order.
    pub fn iter<T>(&self) -> LaneIter<'_, C, A, T>
    where
        C: ReadRectangular<T>,
    {
        self.as_lane().iter()
    }

    /// Materialize the lane into a vector, in index order.
    pub fn to_vec<T>(&self) -> Vec<T>
    where
        C: ReadRectangular<T>,
    {
        self.as_lane().to_vec()
    }

    /// Overwrite the element at `i`.
    ///
    /// # Panics
    /// Panics if `i >= count()`.
    #[inline]
    pub fn set<T>(&mut self, i: usize, value: T)
    where
        C: Rectangular<T>,
    {
        let count = self.count();
        assert!(i < count, "index out of bounds: lane index {i} >= {count}");
        self.collection.set(A::locate(self.fixed, i), value);
    }

    /// Overwrite the element at `i`, or fail if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if `i >= count()`.
    pub fn try_set<T>(&mut self, i: usize, value: T) -> Result<()>
    where
        C: Rectangular<T>,
    {
        if self.is_valid_index(i) {
            self.collection.set(A::locate(self.fixed, i), value);
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds {
                index: A::locate(self.fixed, i),
                bounds: self.collection.boundaries(),
            })
        }
    }

    /// Assign `value` to every position of the lane.
    pub fn fill<T>(&mut self, value: T)
    where
        C: Rectangular<T>,
        T: Clone,
    {
        for i in 0..self.count() {
            self.collection.set(A::locate(self.fixed, i), value.clone());
        }
    }

    /// Reverse the lane in place: element `i` swaps with `count - 1 - i`.
    pub fn reverse<T>(&mut self)
    where
        C: Rectangular<T>,
    {
        let count = self.count();
        for i in 0..count / 2 {
            let j = count - 1 - i;
            let a = self.collection.get(A::locate(self.fixed, i));
            let b = self.collection.get(A::locate(self.fixed, j));
            self.collection.set(A::locate(self.fixed, i), b);
            self.collection.set(A::locate(self.fixed, j), a);
        }
    }

    /// Borrow the element at `i` mutably. Assignment is writing through the
    /// returned reference; this flavor has no separate setter.
    ///
    /// # Panics
    /// Panics if `i >= count()`.
    #[inline]
    pub fn get_mut<T>(&mut self, i: usize) -> &mut T
    where
        C: RefRectangular<T>,
    {
        let count = self.count();
        assert!(i < count, "index out of bounds: lane index {i} >= {count}");
        self.collection.get_mut(A::locate(self.fixed, i))
    }

    /// Borrow the element at `i` mutably, or fail if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`GridError::IndexOutOfBounds`] if `i >= count()`.
    pub fn try_get_mut<T>(&mut self, i: usize) -> Result<&mut T>
    where
        C: RefRectangular<T>,
    {
        if self.is_valid_index(i) {
            Ok(self.collection.get_mut(A::locate(self.fixed, i)))
        } else {
            Err(GridError::IndexOutOfBounds {
                index: A::locate(self.fixed, i),
                bounds: self.collection.boundaries(),
            })
        }
    }
}

/// Iterator over one lane of a collection.
///
/// The lane length is re-read from the collection on every step.
#[derive(Debug)]
pub struct LaneIter<'a, C: ?Sized, A: Axis, T> {
    collection: &'a C,
    fixed: usize,
    position: usize,
    _marker: PhantomData<(A, T)>,
}

impl<'a, C, A, T> Iterator for LaneIter<'a, C, A, T>
where
    C: ReadRectangular<T> + ?Sized,
    A: Axis,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.position >= A::lane_len(self.collection.boundaries()) {
            return None;
        }
        let item = self.collection.get(A::locate(self.fixed, self.position));
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = A::lane_len(self.collection.boundaries()).saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

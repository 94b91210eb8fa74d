//! Linear-scan queries over rectangular collections.
//!
//! Every algorithm here is a pure scan, generic over the minimal capability
//! it needs ([`ReadRectangular`]) and over the predicate dispatch strategy
//! ([`Predicate`]). Forward scans traverse in strictly ascending row-major
//! order; backward scans are the exact mirror, checking the last row-major
//! position first. "Not found" is [`ItemRequestResult::Fail`], never an
//! error and never a sentinel index.
//!
//! Sector-scoped variants restrict the scan to a rectangular sub-region
//! described by a start index and a shape, validating the region against
//! the collection's boundaries before anything is read.
//!
//! # Example
//! ```
//! use rectgrid::{find_index, testing::VecGrid, Index2D, ItemRequestResult};
//!
//! let grid = VecGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
//! let hit = find_index(&grid, &|x: &i32| *x == 5);
//! assert_eq!(hit, ItemRequestResult::Success(Index2D::new(1, 1)));
//! ```

use crate::access::{Bounded2D, ReadRectangular};
use crate::request::{ItemRequestResult, Predicate};
use crate::view::{Column, ColumnMut, Row, RowMut};
use crate::{Bounds2D, GridError, Index2D, Result};
use std::collections::VecDeque;
use std::ops::Range;

/// An output collection that queries can append matches into.
///
/// This is the integration boundary for [`find_all`] and
/// [`find_all_indices`]: growable collections accept every item, while a
/// bounded or frozen collector may refuse with [`GridError::Unsupported`].
pub trait Accumulate<T> {
    /// Append one item.
    ///
    /// # Errors
    /// Returns [`GridError::Unsupported`] if the collection cannot accept
    /// further insertions.
    fn accept(&mut self, item: T) -> Result<()>;
}

impl<T> Accumulate<T> for Vec<T> {
    fn accept(&mut self, item: T) -> Result<()> {
        self.push(item);
        Ok(())
    }
}

impl<T> Accumulate<T> for VecDeque<T> {
    fn accept(&mut self, item: T) -> Result<()> {
        self.push_back(item);
        Ok(())
    }
}

fn scan_ascending<T, C, P>(
    collection: &C,
    rows: Range<usize>,
    columns: Range<usize>,
    predicate: &P,
) -> ItemRequestResult<Index2D>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    for row in rows {
        for column in columns.clone() {
            let at = Index2D::new(row, column);
            if predicate.test(&collection.get(at)) {
                return ItemRequestResult::Success(at);
            }
        }
    }
    ItemRequestResult::Fail
}

fn scan_descending<T, C, P>(
    collection: &C,
    rows: Range<usize>,
    columns: Range<usize>,
    predicate: &P,
) -> ItemRequestResult<Index2D>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    for row in rows.rev() {
        for column in columns.clone().rev() {
            let at = Index2D::new(row, column);
            if predicate.test(&collection.get(at)) {
                return ItemRequestResult::Success(at);
            }
        }
    }
    ItemRequestResult::Fail
}

fn validate_sector(bounds: Bounds2D, start: Index2D, sector: Bounds2D) -> Result<()> {
    if start.row >= bounds.rows {
        return Err(GridError::OutOfRange {
            what: "sector start row",
            value: start.row as i64,
            limit: bounds.rows as i64,
        });
    }
    if start.column >= bounds.columns {
        return Err(GridError::OutOfRange {
            what: "sector start column",
            value: start.column as i64,
            limit: bounds.columns as i64,
        });
    }
    let end_row = start.row.checked_add(sector.rows);
    if end_row.is_none() || end_row.unwrap() > bounds.rows {
        return Err(GridError::OutOfRange {
            what: "sector end row",
            value: end_row.map_or(i64::MAX, |r| r as i64),
            limit: bounds.rows as i64,
        });
    }
    let end_column = start.column.checked_add(sector.columns);
    if end_column.is_none() || end_column.unwrap() > bounds.columns {
        return Err(GridError::OutOfRange {
            what: "sector end column",
            value: end_column.map_or(i64::MAX, |c| c as i64),
            limit: bounds.columns as i64,
        });
    }
    Ok(())
}

fn validate_sector_rev(bounds: Bounds2D, start: Index2D, sector: Bounds2D) -> Result<()> {
    if start.row >= bounds.rows {
        return Err(GridError::OutOfRange {
            what: "sector start row",
            value: start.row as i64,
            limit: bounds.rows as i64,
        });
    }
    if start.column >= bounds.columns {
        return Err(GridError::OutOfRange {
            what: "sector start column",
            value: start.column as i64,
            limit: bounds.columns as i64,
        });
    }
    if sector.rows > start.row + 1 {
        return Err(GridError::OutOfRange {
            what: "sector row span",
            value: sector.rows as i64,
            limit: (start.row + 1) as i64,
        });
    }
    if sector.columns > start.column + 1 {
        return Err(GridError::OutOfRange {
            what: "sector column span",
            value: sector.columns as i64,
            limit: (start.column + 1) as i64,
        });
    }
    Ok(())
}

/// Index of the first element matching `predicate`, in ascending row-major
/// order. `Fail` when nothing matches (always, for a zero-area collection).
pub fn find_index<T, C, P>(collection: &C, predicate: &P) -> ItemRequestResult<Index2D>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    let bounds = collection.boundaries();
    scan_ascending(collection, 0..bounds.rows, 0..bounds.columns, predicate)
}

/// Index of the last element matching `predicate`: the descending row-major
/// mirror of [`find_index`].
pub fn find_last_index<T, C, P>(collection: &C, predicate: &P) -> ItemRequestResult<Index2D>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    let bounds = collection.boundaries();
    scan_descending(collection, 0..bounds.rows, 0..bounds.columns, predicate)
}

/// Index of the first match within the sector `[start, start + sector)`,
/// scanned in ascending row-major order.
///
/// # Errors
/// Returns [`GridError::OutOfRange`] if `start` is not a valid index of the
/// collection or the sector extends past its boundaries.
pub fn find_index_in<T, C, P>(
    collection: &C,
    start: Index2D,
    sector: Bounds2D,
    predicate: &P,
) -> Result<ItemRequestResult<Index2D>>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    validate_sector(collection.boundaries(), start, sector)?;
    Ok(scan_ascending(
        collection,
        start.row..start.row + sector.rows,
        start.column..start.column + sector.columns,
        predicate,
    ))
}

/// Index of the last match within the sector ending at `start` inclusive
/// and extending `sector` backwards, scanned in descending row-major order.
///
/// The scanned rows are `start.row + 1 - sector.rows ..= start.row`, and
/// likewise for columns; `start` itself is the first position checked.
///
/// # Errors
/// Returns [`GridError::OutOfRange`] if `start` is not a valid index of the
/// collection or the sector extends before its origin.
pub fn find_last_index_in<T, C, P>(
    collection: &C,
    start: Index2D,
    sector: Bounds2D,
    predicate: &P,
) -> Result<ItemRequestResult<Index2D>>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    validate_sector_rev(collection.boundaries(), start, sector)?;
    Ok(scan_descending(
        collection,
        start.row + 1 - sector.rows..start.row + 1,
        start.column + 1 - sector.columns..start.column + 1,
        predicate,
    ))
}

/// First element matching `predicate`, re-read at the found index.
pub fn find<T, C, P>(collection: &C, predicate: &P) -> ItemRequestResult<T>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    find_index(collection, predicate).map(|at| collection.get(at))
}

/// Last element matching `predicate`, re-read at the found index.
pub fn find_last<T, C, P>(collection: &C, predicate: &P) -> ItemRequestResult<T>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    find_last_index(collection, predicate).map(|at| collection.get(at))
}

/// Sector-scoped [`find`].
///
/// # Errors
/// Propagates the sector validation of [`find_index_in`].
pub fn find_in<T, C, P>(
    collection: &C,
    start: Index2D,
    sector: Bounds2D,
    predicate: &P,
) -> Result<ItemRequestResult<T>>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    Ok(find_index_in(collection, start, sector, predicate)?.map(|at| collection.get(at)))
}

/// Sector-scoped [`find_last`].
///
/// # Errors
/// Propagates the sector validation of [`find_last_index_in`].
pub fn find_last_in<T, C, P>(
    collection: &C,
    start: Index2D,
    sector: Bounds2D,
    predicate: &P,
) -> Result<ItemRequestResult<T>>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    Ok(find_last_index_in(collection, start, sector, predicate)?.map(|at| collection.get(at)))
}

/// Append every matching element into `out`, in ascending row-major order.
/// Returns how many elements were appended.
///
/// # Errors
/// Returns [`GridError::Unsupported`] if `out` refuses an insertion;
/// elements accepted before the refusal remain in `out`.
pub fn find_all<T, C, P, A>(collection: &C, predicate: &P, out: &mut A) -> Result<usize>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
    A: Accumulate<T> + ?Sized,
{
    let bounds = collection.boundaries();
    let mut appended = 0;
    for row in 0..bounds.rows {
        for column in 0..bounds.columns {
            let item = collection.get(Index2D::new(row, column));
            if predicate.test(&item) {
                out.accept(item)?;
                appended += 1;
            }
        }
    }
    Ok(appended)
}

/// Append the index of every matching element into `out`, in ascending
/// row-major order. Returns how many indices were appended.
///
/// # Errors
/// Returns [`GridError::Unsupported`] if `out` refuses an insertion.
pub fn find_all_indices<T, C, P, A>(collection: &C, predicate: &P, out: &mut A) -> Result<usize>
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
    A: Accumulate<Index2D> + ?Sized,
{
    let bounds = collection.boundaries();
    let mut appended = 0;
    for row in 0..bounds.rows {
        for column in 0..bounds.columns {
            let at = Index2D::new(row, column);
            if predicate.test(&collection.get(at)) {
                out.accept(at)?;
                appended += 1;
            }
        }
    }
    Ok(appended)
}

/// True iff every element matches `predicate`. Vacuously true for a
/// zero-area collection; stops at the first non-match.
pub fn true_for_all<T, C, P>(collection: &C, predicate: &P) -> bool
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    let bounds = collection.boundaries();
    for row in 0..bounds.rows {
        for column in 0..bounds.columns {
            if !predicate.test(&collection.get(Index2D::new(row, column))) {
                return false;
            }
        }
    }
    true
}

/// True iff some element matches `predicate`. Delegates to [`find_index`].
pub fn exists<T, C, P>(collection: &C, predicate: &P) -> bool
where
    C: ReadRectangular<T> + ?Sized,
    P: Predicate<T> + ?Sized,
{
    find_index(collection, predicate).is_success()
}

/// View of row `index`.
///
/// # Errors
/// Returns [`GridError::OutOfRange`] if `index` is not below the
/// collection's row count.
pub fn row<C: Bounded2D + ?Sized>(collection: &C, index: usize) -> Result<Row<'_, C>> {
    Row::new(collection, index)
}

/// View of column `index`.
///
/// # Errors
/// Returns [`GridError::OutOfRange`] if `index` is not below the
/// collection's column count.
pub fn column<C: Bounded2D + ?Sized>(collection: &C, index: usize) -> Result<Column<'_, C>> {
    Column::new(collection, index)
}

/// Mutable view of row `index`.
///
/// # Errors
/// Returns [`GridError::OutOfRange`] if `index` is not below the
/// collection's row count.
pub fn row_mut<C: Bounded2D + ?Sized>(collection: &mut C, index: usize) -> Result<RowMut<'_, C>> {
    RowMut::new(collection, index)
}

/// Mutable view of column `index`.
///
/// # Errors
/// Returns [`GridError::OutOfRange`] if `index` is not below the
/// collection's column count.
pub fn column_mut<C: Bounded2D + ?Sized>(
    collection: &mut C,
    index: usize,
) -> Result<ColumnMut<'_, C>> {
    ColumnMut::new(collection, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::DynPredicate;
    use crate::testing::VecGrid;

    fn grid_3x3() -> VecGrid<i32> {
        VecGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])
    }

    #[test]
    fn test_find_index_first_match_row_major() {
        let grid = grid_3x3();
        assert_eq!(
            find_index(&grid, &|x: &i32| *x == 5),
            ItemRequestResult::Success(Index2D::new(1, 1))
        );
        // Several matches: the ascending row-major first one wins.
        assert_eq!(
            find_index(&grid, &|x: &i32| x % 2 == 0),
            ItemRequestResult::Success(Index2D::new(0, 1))
        );
        assert_eq!(find_index(&grid, &|x: &i32| *x == 10), ItemRequestResult::Fail);
    }

    #[test]
    fn test_find_last_index_descending_row_major() {
        let grid = grid_3x3();
        assert_eq!(
            find_last_index(&grid, &|x: &i32| x % 2 == 0),
            ItemRequestResult::Success(Index2D::new(2, 1))
        );
        assert_eq!(
            find_last_index(&grid, &|x: &i32| *x == 10),
            ItemRequestResult::Fail
        );
    }

    #[test]
    fn test_find_returns_elements() {
        let grid = grid_3x3();
        assert_eq!(
            find(&grid, &|x: &i32| x % 2 == 0),
            ItemRequestResult::Success(2)
        );
        assert_eq!(
            find_last(&grid, &|x: &i32| x % 2 == 0),
            ItemRequestResult::Success(8)
        );
        assert_eq!(find(&grid, &|x: &i32| *x > 9), ItemRequestResult::Fail);
        // Default-if-absent accessor on a failed request.
        assert_eq!(find(&grid, &|x: &i32| *x > 9).item(), 0);
    }

    #[test]
    fn test_empty_collection() {
        let empty = VecGrid::<i32>::new(Bounds2D::new(0, 0), 0);
        assert_eq!(find_index(&empty, &|_: &i32| true), ItemRequestResult::Fail);
        assert_eq!(find_last_index(&empty, &|_: &i32| true), ItemRequestResult::Fail);
        assert!(true_for_all(&empty, &|_: &i32| false));
        assert!(!exists(&empty, &|_: &i32| true));

        // Zero area with a non-zero dimension behaves the same.
        let thin = VecGrid::<i32>::new(Bounds2D::new(3, 0), 0);
        assert_eq!(find_index(&thin, &|_: &i32| true), ItemRequestResult::Fail);
        assert!(true_for_all(&thin, &|_: &i32| false));
    }

    #[test]
    fn test_exists_agrees_with_find_index() {
        let grid = grid_3x3();
        for needle in 0..12 {
            let predicate = move |x: &i32| *x == needle;
            assert_eq!(
                exists(&grid, &predicate),
                find_index(&grid, &predicate).is_success()
            );
        }
    }

    #[test]
    fn test_true_for_all_short_circuits() {
        let grid = grid_3x3();
        assert!(true_for_all(&grid, &|x: &i32| *x >= 1));
        assert!(!true_for_all(&grid, &|x: &i32| *x < 9));
    }

    #[test]
    fn test_find_index_in_scans_exactly_the_sector() {
        let grid = grid_3x3();
        // Sector [(1,1), (3,3)): the 1 at (0,0) is outside and must not match.
        let hit = find_index_in(&grid, Index2D::new(1, 1), Bounds2D::new(2, 2), &|x: &i32| {
            *x == 1
        })
        .unwrap();
        assert_eq!(hit, ItemRequestResult::Fail);

        // Non-origin start: matches inside the sector are found at their
        // absolute index.
        let hit = find_index_in(&grid, Index2D::new(1, 1), Bounds2D::new(2, 2), &|x: &i32| {
            x % 3 == 0
        })
        .unwrap();
        assert_eq!(hit, ItemRequestResult::Success(Index2D::new(1, 2)));

        // Zero-area sector scans nothing.
        let hit = find_index_in(&grid, Index2D::new(1, 1), Bounds2D::new(0, 2), &|_: &i32| true)
            .unwrap();
        assert_eq!(hit, ItemRequestResult::Fail);
    }

    #[test]
    fn test_find_index_in_validates_sector() {
        let grid = grid_3x3();
        let p = |_: &i32| true;
        assert!(matches!(
            find_index_in(&grid, Index2D::new(3, 0), Bounds2D::new(1, 1), &p),
            Err(GridError::OutOfRange { what: "sector start row", .. })
        ));
        assert!(matches!(
            find_index_in(&grid, Index2D::new(0, 3), Bounds2D::new(1, 1), &p),
            Err(GridError::OutOfRange { what: "sector start column", .. })
        ));
        assert!(matches!(
            find_index_in(&grid, Index2D::new(1, 0), Bounds2D::new(3, 1), &p),
            Err(GridError::OutOfRange { what: "sector end row", .. })
        ));
        assert!(matches!(
            find_index_in(&grid, Index2D::new(0, 2), Bounds2D::new(1, 2), &p),
            Err(GridError::OutOfRange { what: "sector end column", .. })
        ));
        // Sector ends that would overflow usize are out of range, not wrapped.
        assert!(matches!(
            find_index_in(&grid, Index2D::new(1, 1), Bounds2D::new(usize::MAX, 1), &p),
            Err(GridError::OutOfRange { what: "sector end row", .. })
        ));
    }

    #[test]
    fn test_find_last_index_in_backward_sector() {
        let grid = grid_3x3();
        // Sector ending at (2,2), spanning 2x2: rows 1..=2, columns 1..=2.
        // Descending row-major: (2,2)=9, (2,1)=8 is the first even hit.
        let hit = find_last_index_in(&grid, Index2D::new(2, 2), Bounds2D::new(2, 2), &|x: &i32| {
            x % 2 == 0
        })
        .unwrap();
        assert_eq!(hit, ItemRequestResult::Success(Index2D::new(2, 1)));

        // The 4 at (1,0) lies outside the backward sector.
        let hit = find_last_index_in(&grid, Index2D::new(2, 2), Bounds2D::new(2, 2), &|x: &i32| {
            *x == 4
        })
        .unwrap();
        assert_eq!(hit, ItemRequestResult::Fail);

        assert!(matches!(
            find_last_index_in(&grid, Index2D::new(1, 1), Bounds2D::new(3, 1), &|_: &i32| true),
            Err(GridError::OutOfRange { what: "sector row span", .. })
        ));
        assert!(matches!(
            find_last_index_in(&grid, Index2D::new(1, 1), Bounds2D::new(1, 3), &|_: &i32| true),
            Err(GridError::OutOfRange { what: "sector column span", .. })
        ));
    }

    #[test]
    fn test_sector_element_variants() {
        let grid = grid_3x3();
        assert_eq!(
            find_in(&grid, Index2D::new(1, 0), Bounds2D::new(2, 3), &|x: &i32| x % 2 == 0)
                .unwrap(),
            ItemRequestResult::Success(4)
        );
        assert_eq!(
            find_last_in(&grid, Index2D::new(2, 2), Bounds2D::new(3, 3), &|x: &i32| x % 2 == 0)
                .unwrap(),
            ItemRequestResult::Success(8)
        );
    }

    #[test]
    fn test_find_all_row_major_order() {
        let grid = grid_3x3();
        let mut indices = Vec::new();
        let appended = find_all_indices(&grid, &|x: &i32| *x > 6, &mut indices).unwrap();
        assert_eq!(appended, 3);
        assert_eq!(
            indices,
            vec![Index2D::new(2, 0), Index2D::new(2, 1), Index2D::new(2, 2)]
        );

        let mut items = Vec::new();
        let appended = find_all(&grid, &|x: &i32| x % 2 == 0, &mut items).unwrap();
        assert_eq!(appended, 4);
        assert_eq!(items, vec![2, 4, 6, 8]);

        let mut none = Vec::new();
        assert_eq!(find_all(&grid, &|x: &i32| *x > 100, &mut none).unwrap(), 0);
        assert!(none.is_empty());
    }

    #[test]
    fn test_find_all_into_deque() {
        let grid = grid_3x3();
        let mut out = VecDeque::new();
        find_all(&grid, &|x: &i32| *x < 3, &mut out).unwrap();
        assert_eq!(out, VecDeque::from(vec![1, 2]));
    }

    #[test]
    fn test_find_all_unsupported_output() {
        // A collector with a hard capacity refuses further insertions.
        struct Capped {
            items: Vec<i32>,
            capacity: usize,
        }
        impl Accumulate<i32> for Capped {
            fn accept(&mut self, item: i32) -> Result<()> {
                if self.items.len() == self.capacity {
                    return Err(GridError::Unsupported {
                        what: "capped collector",
                    });
                }
                self.items.push(item);
                Ok(())
            }
        }

        let grid = grid_3x3();
        let mut out = Capped {
            items: Vec::new(),
            capacity: 2,
        };
        let err = find_all(&grid, &|x: &i32| x % 2 == 1, &mut out).unwrap_err();
        assert!(matches!(err, GridError::Unsupported { .. }));
        assert_eq!(out.items, vec![1, 3]);
    }

    #[test]
    fn test_dyn_predicate_path_matches_static_path() {
        let grid = grid_3x3();
        let boxed: Box<dyn Fn(&i32) -> bool> = Box::new(|x| *x == 5);
        let dynamic = DynPredicate::from_option(Some(boxed)).unwrap();
        assert_eq!(
            find_index(&grid, &dynamic),
            find_index(&grid, &|x: &i32| *x == 5)
        );

        // Trait-object dispatch over the same capability.
        let erased: &dyn Predicate<i32> = &|x: &i32| *x > 8;
        assert_eq!(
            find_index(&grid, erased),
            ItemRequestResult::Success(Index2D::new(2, 2))
        );
    }

    #[test]
    fn test_view_constructors() {
        let grid = grid_3x3();
        assert_eq!(row(&grid, 0).unwrap().to_vec(), vec![1, 2, 3]);
        assert_eq!(column(&grid, 1).unwrap().to_vec(), vec![2, 5, 8]);
        assert!(matches!(row(&grid, 3), Err(GridError::OutOfRange { .. })));
        assert!(matches!(column(&grid, 3), Err(GridError::OutOfRange { .. })));

        let mut grid = grid_3x3();
        row_mut(&mut grid, 0).unwrap().fill(0);
        column_mut(&mut grid, 2).unwrap().reverse::<i32>();
        assert_eq!(row(&grid, 0).unwrap().to_vec(), vec![0, 0, 9]);
    }
}

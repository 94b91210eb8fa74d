//! "Item or absent" results and predicate dispatch.
//!
//! Queries never model "not found" as an error: they return
//! [`ItemRequestResult::Fail`], a first-class expected outcome. Predicates
//! are a capability ([`Predicate`]) with a blanket impl for closures, so the
//! hot path is monomorphized; [`DynPredicate`] is the dynamically dispatched
//! fallback for callers that only have a boxed callback at runtime.

use crate::{GridError, Result};

/// The outcome of asking a collection for an item: the item, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRequestResult<T> {
    /// The request was satisfied.
    Success(T),
    /// No item satisfied the request.
    Fail,
}

impl<T> ItemRequestResult<T> {
    /// True iff the request was satisfied.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The requested item, or `T::default()` when absent.
    ///
    /// This is the default-if-absent accessor the query algorithms lean on:
    /// reading a failed result yields the type's zero value, never a panic.
    #[inline]
    pub fn item(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(item) => item,
            Self::Fail => T::default(),
        }
    }

    /// Borrowing view of the payload.
    #[inline]
    pub fn as_ref(&self) -> ItemRequestResult<&T> {
        match self {
            Self::Success(item) => ItemRequestResult::Success(item),
            Self::Fail => ItemRequestResult::Fail,
        }
    }

    /// Apply `f` to the payload, keeping `Fail` as `Fail`.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ItemRequestResult<U> {
        match self {
            Self::Success(item) => ItemRequestResult::Success(f(item)),
            Self::Fail => ItemRequestResult::Fail,
        }
    }

    /// Convert into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for ItemRequestResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(item) => Self::Success(item),
            None => Self::Fail,
        }
    }
}

impl<T> From<ItemRequestResult<T>> for Option<T> {
    fn from(value: ItemRequestResult<T>) -> Self {
        match value {
            ItemRequestResult::Success(item) => Some(item),
            ItemRequestResult::Fail => None,
        }
    }
}

/// A matching condition over elements.
///
/// Every `Fn(&T) -> bool` is a `Predicate<T>` through the blanket impl, so
/// closures monomorphize into the scan loops with no indirect calls. The
/// trait is object safe; `&dyn Predicate<T>` works wherever a concrete
/// predicate does.
pub trait Predicate<T> {
    /// True iff `item` matches.
    fn test(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// A dynamically dispatched predicate around a boxed callback.
///
/// The indirect call per element makes this slower than a plain closure;
/// it exists for call sites where the callback is only known at runtime
/// and may be absent.
pub struct DynPredicate<'a, T> {
    callback: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T> DynPredicate<'a, T> {
    /// Wrap a callback.
    pub fn new(callback: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Wrap a callback that may be absent.
    ///
    /// Checking here, before any scan can start, keeps a missing callback
    /// from surfacing halfway through a traversal.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`] if `callback` is `None`.
    pub fn from_option(callback: Option<Box<dyn Fn(&T) -> bool + 'a>>) -> Result<Self> {
        match callback {
            Some(callback) => Ok(Self { callback }),
            None => Err(GridError::InvalidArgument {
                what: "predicate callback",
            }),
        }
    }
}

impl<T> core::fmt::Debug for DynPredicate<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynPredicate").finish_non_exhaustive()
    }
}

impl<T> Predicate<T> for DynPredicate<'_, T> {
    #[inline]
    fn test(&self, item: &T) -> bool {
        (self.callback)(item)
    }
}

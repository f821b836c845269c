//! The validated sort contract shared by every algorithm.
//!
//! [`Sorter`] has a single required method, [`Sorter::core_sort`], which rearranges an
//! already-validated slice. Everything a caller touches is a provided method layered on
//! top of it:
//!
//! | shape                          | ascending                          | descending                          |
//! |--------------------------------|------------------------------------|-------------------------------------|
//! | whole slice, natural order     | [`sort_ascending`]                 | [`sort_descending`]                 |
//! | whole slice, comparison fn     | [`sort_ascending_by`]              | [`sort_descending_by`]              |
//! | whole slice, comparator        | [`sort_ascending_with`]            | [`sort_descending_with`]            |
//! | sub-range, comparator          | [`sort_ascending_range`]           | [`sort_descending_range`]           |
//!
//! All shapes funnel into [`sort_ascending_range`], which is the only place arguments
//! are checked. Descending shapes wrap the comparator in [`Reversed`] and take the
//! ascending path, so both directions share every edge case.
//!
//! [`sort_ascending`]: Sorter::sort_ascending
//! [`sort_ascending_by`]: Sorter::sort_ascending_by
//! [`sort_ascending_with`]: Sorter::sort_ascending_with
//! [`sort_ascending_range`]: Sorter::sort_ascending_range
//! [`sort_descending`]: Sorter::sort_descending
//! [`sort_descending_by`]: Sorter::sort_descending_by
//! [`sort_descending_with`]: Sorter::sort_descending_with
//! [`sort_descending_range`]: Sorter::sort_descending_range

use crate::algo::{BubbleSort, InsertionSort, QuickSort, SelectionSort};
use crate::core::{Comparator, Natural, Reversed};
use crate::error::{ParseAlgorithmError, SortError};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use tracing::{debug, trace};

/// An in-place comparison sort behind a validated contract.
///
/// # Examples
///
/// ```
/// use permsort::prelude::*;
///
/// let mut data = vec![1, 2, 3, 4, 1, 2];
/// QuickSort.sort_ascending_range(Some(&mut data[..]), 2, 4, Some(Natural))?;
/// assert_eq!(data, vec![1, 2, 1, 2, 3, 4]);
///
/// QuickSort.sort_descending(&mut data)?;
/// assert_eq!(data, vec![4, 3, 2, 2, 1, 1]);
/// # Ok::<(), permsort::SortError>(())
/// ```
pub trait Sorter {
    /// Short lowercase name of the algorithm, used in logs and [`Display`](fmt::Display).
    fn name(&self) -> &'static str;

    /// Rearranges `items` into ascending order under `comparator`.
    ///
    /// This is the algorithm-specific step. It assumes its arguments were validated
    /// and performs no checks of its own; callers should go through the provided
    /// `sort_*` methods instead.
    fn core_sort<T, C>(&self, items: &mut [T], comparator: &C)
    where
        C: Comparator<T> + ?Sized;

    /// Sorts the whole slice in ascending natural order.
    fn sort_ascending<T: Ord>(&self, list: &mut [T]) -> Result<(), SortError> {
        let count = whole_count(list.len()).map_err(|error| rejected(self.name(), error))?;
        self.sort_ascending_range(Some(list), 0, count, Some(Natural))
    }

    /// Sorts the whole slice in ascending order according to a comparison function.
    fn sort_ascending_by<T, F>(&self, list: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let count = whole_count(list.len()).map_err(|error| rejected(self.name(), error))?;
        self.sort_ascending_range(Some(list), 0, count, Some(compare))
    }

    /// Sorts the whole slice in ascending order according to `comparator`.
    fn sort_ascending_with<T, C>(&self, list: &mut [T], comparator: C) -> Result<(), SortError>
    where
        C: Comparator<T>,
    {
        let count = whole_count(list.len()).map_err(|error| rejected(self.name(), error))?;
        self.sort_ascending_range(Some(list), 0, count, Some(comparator))
    }

    /// Sorts `count` elements starting at `index` in ascending order.
    ///
    /// Arguments are checked in this order, and the first failure is returned
    /// before any element moves:
    ///
    /// 1. `list` is `None` → [`SortError::InvalidArgument`] (`"list"`)
    /// 2. `comparator` is `None` → [`SortError::InvalidArgument`] (`"comparer"`)
    /// 3. `index < 0` → [`SortError::OutOfRange`] (`"index"`)
    /// 4. `count < 0` → [`SortError::OutOfRange`] (`"count"`)
    /// 5. `index + count > list.len()` → [`SortError::OutOfRange`] (`"count"`)
    ///
    /// Elements outside `[index, index + count)` are never touched.
    fn sort_ascending_range<T, C>(
        &self,
        list: Option<&mut [T]>,
        index: isize,
        count: isize,
        comparator: Option<C>,
    ) -> Result<(), SortError>
    where
        C: Comparator<T>,
    {
        let Some(list) = list else {
            return Err(rejected(self.name(), SortError::invalid_argument("list")));
        };
        let Some(comparator) = comparator else {
            return Err(rejected(self.name(), SortError::invalid_argument("comparer")));
        };
        let range = check_range(list.len(), index, count)
            .map_err(|error| rejected(self.name(), error))?;

        trace!(
            algorithm = self.name(),
            index = range.start,
            count = range.len(),
            "sorting range"
        );
        self.core_sort(&mut list[range], &comparator);
        Ok(())
    }

    /// Sorts the whole slice in descending natural order.
    fn sort_descending<T: Ord>(&self, list: &mut [T]) -> Result<(), SortError> {
        let count = whole_count(list.len()).map_err(|error| rejected(self.name(), error))?;
        self.sort_descending_range(Some(list), 0, count, Some(Natural))
    }

    /// Sorts the whole slice in descending order according to a comparison function.
    fn sort_descending_by<T, F>(&self, list: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let count = whole_count(list.len()).map_err(|error| rejected(self.name(), error))?;
        self.sort_descending_range(Some(list), 0, count, Some(compare))
    }

    /// Sorts the whole slice in descending order according to `comparator`.
    fn sort_descending_with<T, C>(&self, list: &mut [T], comparator: C) -> Result<(), SortError>
    where
        C: Comparator<T>,
    {
        let count = whole_count(list.len()).map_err(|error| rejected(self.name(), error))?;
        self.sort_descending_range(Some(list), 0, count, Some(comparator))
    }

    /// Sorts `count` elements starting at `index` in descending order.
    ///
    /// Identical to [`sort_ascending_range`](Sorter::sort_ascending_range) with the
    /// comparator wrapped in [`Reversed`], including which error is reported.
    fn sort_descending_range<T, C>(
        &self,
        list: Option<&mut [T]>,
        index: isize,
        count: isize,
        comparator: Option<C>,
    ) -> Result<(), SortError>
    where
        C: Comparator<T>,
    {
        self.sort_ascending_range(list, index, count, comparator.map(Reversed))
    }
}

/// Converts a slice length into a signed count.
///
/// Only slices of zero-sized types can exceed `isize::MAX`. Such a slice cannot be
/// described by a signed count, so the request is rejected instead of sorting a prefix.
#[inline]
fn whole_count(len: usize) -> Result<isize, SortError> {
    isize::try_from(len)
        .map_err(|_| SortError::out_of_range("count", "slice length exceeds isize::MAX"))
}

/// Checks `index` and `count` against a slice of length `len`.
fn check_range(len: usize, index: isize, count: isize) -> Result<Range<usize>, SortError> {
    let start = usize::try_from(index)
        .map_err(|_| SortError::out_of_range("index", "index must be non-negative"))?;
    let count = usize::try_from(count)
        .map_err(|_| SortError::out_of_range("count", "count must be non-negative"))?;

    match start.checked_add(count) {
        Some(end) if end <= len => Ok(start..end),
        _ => Err(SortError::out_of_range("count", "selection is out of range")),
    }
}

fn rejected(algorithm: &'static str, error: SortError) -> SortError {
    debug!(algorithm, %error, "rejected sort request");
    error
}

/// Runtime selection of one of the four algorithms.
///
/// Parses from the lowercase algorithm name, which makes it convenient to pick an
/// algorithm from configuration or command-line text.
///
/// ```
/// use permsort::prelude::*;
///
/// let algorithm: Algorithm = "selection".parse()?;
/// let mut data = vec![4, 2, 3, 1];
/// algorithm.sort_ascending(&mut data)?;
/// assert_eq!(data, vec![1, 2, 3, 4]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Quick,
    Selection,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Selection,
    ];
}

impl Sorter for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => BubbleSort.name(),
            Algorithm::Insertion => InsertionSort.name(),
            Algorithm::Quick => QuickSort.name(),
            Algorithm::Selection => SelectionSort.name(),
        }
    }

    fn core_sort<T, C>(&self, items: &mut [T], comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        match self {
            Algorithm::Bubble => BubbleSort.core_sort(items, comparator),
            Algorithm::Insertion => InsertionSort.core_sort(items, comparator),
            Algorithm::Quick => QuickSort.core_sort(items, comparator),
            Algorithm::Selection => SelectionSort.core_sort(items, comparator),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

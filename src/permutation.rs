//! Distinct permutations of a multiset in lexicographic order.
//!
//! [`PermutationEnumerator`] is a cursor over the permutations of a fixed multiset. It
//! sorts its input once into the smallest arrangement (the *snapshot*) and then rewrites
//! its current permutation in place on every [`advance`](PermutationEnumerator::advance),
//! using the classic next-permutation step:
//!
//! 1. Find the rightmost ascent `items[marker - 1] < items[marker]`.
//! 2. Swap `items[marker - 1]` with the rightmost element greater than it.
//! 3. Reverse `items[marker..]`.
//!
//! Because the ascent test is strict, runs of equal elements never produce an ascent of
//! their own, so repeated elements are skipped structurally rather than filtered: the
//! multiset `aaaa` has exactly one permutation, and `aabb` has six, not twenty-four.
//!
//! [`Permutations`] wraps an input and a comparator and hands out a fresh enumerator for
//! every iteration, so it can be iterated any number of times.

use crate::core::{Comparator, Natural};
use std::cmp::Ordering;
use std::mem;
use tracing::trace;

/// Rearranges `items` into the next greater permutation under `comparator`.
///
/// Returns `false` and leaves `items` untouched when it already holds the greatest
/// permutation (the elements are in descending order) or has fewer than two elements.
///
/// ```
/// use permsort::next_permutation;
/// use permsort::core::Natural;
///
/// let mut items = [1, 2, 2];
/// assert!(next_permutation(&mut items, &Natural));
/// assert_eq!(items, [2, 1, 2]);
/// assert!(next_permutation(&mut items, &Natural));
/// assert_eq!(items, [2, 2, 1]);
/// assert!(!next_permutation(&mut items, &Natural));
/// assert_eq!(items, [2, 2, 1]);
/// ```
pub fn next_permutation<T, C>(items: &mut [T], comparator: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    let len = items.len();
    if len < 2 {
        return false;
    }

    let Some(marker) = (1..len)
        .rev()
        .find(|&i| comparator.compare(&items[i - 1], &items[i]) == Ordering::Less)
    else {
        return false;
    };
    let pivot = marker - 1;

    // items[marker] is greater than the pivot, so the search always succeeds.
    let successor = (marker..len)
        .rev()
        .find(|&k| comparator.compare(&items[k], &items[pivot]) == Ordering::Greater)
        .unwrap_or(marker);

    items.swap(pivot, successor);
    items[marker..].reverse();
    true
}

#[derive(Clone, Debug)]
enum State<T> {
    NotStarted,
    Positioned(Vec<T>),
    Exhausted(Vec<T>),
}

/// A resettable cursor over the distinct permutations of a multiset.
///
/// The cursor starts before the first permutation: [`current`](Self::current) is `None`
/// until the first [`advance`](Self::advance). Each successful advance moves to the next
/// permutation in strictly increasing lexicographic order; once the greatest permutation
/// has been reached, `advance` returns `false` and the current permutation stays put.
///
/// The enumerator is also an [`Iterator`] yielding an owned copy of each permutation.
///
/// # Examples
///
/// ```
/// use permsort::PermutationEnumerator;
///
/// let mut enumerator = PermutationEnumerator::new("bas".chars());
/// assert_eq!(enumerator.current(), None);
///
/// assert!(enumerator.advance());
/// assert_eq!(enumerator.current(), Some(&['a', 'b', 's'][..]));
///
/// assert!(enumerator.advance());
/// assert_eq!(enumerator.current(), Some(&['a', 's', 'b'][..]));
///
/// enumerator.reset();
/// assert_eq!(enumerator.current(), Some(&['a', 'b', 's'][..]));
/// ```
#[derive(Clone, Debug)]
pub struct PermutationEnumerator<T, C = Natural> {
    snapshot: Vec<T>,
    state: State<T>,
    comparator: C,
}

impl<T: Ord> PermutationEnumerator<T, Natural> {
    /// Creates an enumerator over `items` in natural order.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_comparator(items, Natural)
    }
}

impl<T, C: Comparator<T>> PermutationEnumerator<T, C> {
    /// Creates an enumerator over `items` ordered by `comparator`.
    ///
    /// The input is collected and stable-sorted once; later changes to the source
    /// collection are not observed.
    pub fn with_comparator<I>(items: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut snapshot: Vec<T> = items.into_iter().collect();
        snapshot.sort_by(|a, b| comparator.compare(a, b));

        Self {
            snapshot,
            state: State::NotStarted,
            comparator,
        }
    }

    /// Returns the permutation the cursor is positioned on, or `None` before the first
    /// [`advance`](Self::advance).
    pub fn current(&self) -> Option<&[T]> {
        match &self.state {
            State::NotStarted => None,
            State::Positioned(current) | State::Exhausted(current) => Some(current),
        }
    }

    /// The smallest arrangement of the multiset; the first permutation emitted.
    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    /// Returns `true` once `advance` has reported that no further permutation exists.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted(_))
    }

    /// The comparator defining the permutation order.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Consumes the enumerator and releases its buffers.
    pub fn dispose(self) {
        trace!(len = self.snapshot.len(), "disposing permutation enumerator");
    }
}

impl<T: Clone, C: Comparator<T>> PermutationEnumerator<T, C> {
    /// Moves to the next permutation.
    ///
    /// The first call always succeeds, even for an empty or single-element multiset,
    /// and positions the cursor on the snapshot. Later calls return `false` once the
    /// greatest permutation has been reached, leaving [`current`](Self::current)
    /// unchanged.
    pub fn advance(&mut self) -> bool {
        let advanced = match &mut self.state {
            State::NotStarted => None,
            State::Positioned(current) => Some(next_permutation(current, &self.comparator)),
            State::Exhausted(_) => return false,
        };

        match advanced {
            None => {
                self.state = State::Positioned(self.snapshot.clone());
                true
            }
            Some(true) => true,
            Some(false) => {
                if let State::Positioned(current) =
                    mem::replace(&mut self.state, State::NotStarted)
                {
                    trace!(len = current.len(), "permutations exhausted");
                    self.state = State::Exhausted(current);
                }
                false
            }
        }
    }

    /// Positions the cursor back on the first permutation.
    ///
    /// Unlike a freshly created enumerator, [`current`](Self::current) immediately
    /// returns the snapshot; the next `advance` moves to the second permutation.
    pub fn reset(&mut self) {
        trace!(len = self.snapshot.len(), "resetting permutation enumerator");
        self.state = State::Positioned(self.snapshot.clone());
    }
}

impl<T: Clone, C: Comparator<T>> Iterator for PermutationEnumerator<T, C> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current().map(<[T]>::to_vec)
        } else {
            None
        }
    }
}

/// A restartable sequence of the distinct permutations of a multiset.
///
/// Every call to [`iter`](Self::iter) (or every `for` loop over `&Permutations`) starts
/// an independent enumerator at the first permutation.
///
/// # Examples
///
/// ```
/// use permsort::Permutations;
///
/// let permutations = Permutations::new("cab".chars());
/// let words: Vec<String> = permutations
///     .iter()
///     .map(|p| p.into_iter().collect())
///     .collect();
///
/// assert_eq!(words, ["abc", "acb", "bac", "bca", "cab", "cba"]);
/// assert_eq!(permutations.distinct_count(), Some(6));
/// ```
#[derive(Clone, Debug)]
pub struct Permutations<T, C = Natural> {
    items: Vec<T>,
    comparator: C,
}

impl<T: Ord> Permutations<T, Natural> {
    /// Creates a sequence over `items` in natural order.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_comparator(items, Natural)
    }
}

impl<T, C> Permutations<T, C> {
    /// Creates a sequence over `items` ordered by `comparator`.
    pub fn with_comparator<I>(items: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
            comparator,
        }
    }

    /// Number of elements in the multiset.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the multiset is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T, C: Comparator<T>> Permutations<T, C> {
    /// Number of distinct permutations, `n! / (m₁! · m₂! · …)` where the `mᵢ` are the
    /// multiplicities of elements comparing equal.
    ///
    /// Returns `None` if the count does not fit in a `u128`.
    pub fn distinct_count(&self) -> Option<u128> {
        let mut sorted: Vec<&T> = self.items.iter().collect();
        sorted.sort_by(|a, b| self.comparator.compare(a, b));

        let mut total: u128 = 1;
        let mut placed: u128 = 0;
        let mut start = 0;
        while start < sorted.len() {
            let run = sorted[start..]
                .iter()
                .take_while(|item| self.comparator.compare(item, sorted[start]) == Ordering::Equal)
                .count();

            // C(placed + run, run), built one factor at a time so every step is exact.
            let mut binomial: u128 = 1;
            for j in 1..=run as u128 {
                binomial = binomial.checked_mul(placed + j)? / j;
            }
            total = total.checked_mul(binomial)?;
            placed += run as u128;
            start += run;
        }
        Some(total)
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Permutations<T, C> {
    /// Starts a new enumerator positioned before the first permutation.
    pub fn enumerator(&self) -> PermutationEnumerator<T, C> {
        PermutationEnumerator::with_comparator(self.items.iter().cloned(), self.comparator.clone())
    }

    /// Iterates over every distinct permutation in lexicographic order.
    pub fn iter(&self) -> PermutationEnumerator<T, C> {
        self.enumerator()
    }
}

impl<T: Clone, C: Comparator<T> + Clone> IntoIterator for &Permutations<T, C> {
    type Item = Vec<T>;
    type IntoIter = PermutationEnumerator<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.enumerator()
    }
}

impl<T: Clone, C: Comparator<T>> IntoIterator for Permutations<T, C> {
    type Item = Vec<T>;
    type IntoIter = PermutationEnumerator<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        PermutationEnumerator::with_comparator(self.items, self.comparator)
    }
}

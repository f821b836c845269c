//! Core comparison traits and adapters.
//!
//! This module defines:
//! - [`Comparator`]: The total-order abstraction shared by sorting and permutations.
//! - [`Natural`]: The default comparator, backed by [`Ord`].
//! - [`Reversed`]: A sign-inverting adapter used to derive descending order.

use std::cmp::Ordering;

/// A comparison function over elements of type `T`.
///
/// Any closure or function of shape `Fn(&T, &T) -> Ordering` is a comparator
/// through the blanket implementation, so callers rarely implement this trait
/// by hand. Implement it directly when the comparator carries configuration
/// (a collation table, a key projection, ...).
///
/// Sorting accepts any comparator as-is. Permutation enumeration is only
/// well-defined when the comparator is a total order.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use std::cmp::Ordering;
/// use permsort::core::Comparator;
///
/// struct ByLength;
///
/// impl Comparator<str> for ByLength {
///     fn compare(&self, a: &str, b: &str) -> Ordering {
///         a.len().cmp(&b.len())
///     }
/// }
///
/// assert_eq!(ByLength.compare("ab", "abc"), Ordering::Less);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Natural ordering as defined by [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the ordering produced by the wrapped comparator.
///
/// Wrapping twice restores the original ordering.
///
/// ```
/// use std::cmp::Ordering;
/// use permsort::core::{Comparator, Natural, Reversed};
///
/// let descending = Reversed(Natural);
/// assert_eq!(descending.compare(&5, &1), Ordering::Less);
/// assert_eq!(descending.compare(&2, &2), Ordering::Equal);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Unwraps the inner comparator.
    ///
    /// ```
    /// use permsort::core::{Natural, Reversed};
    ///
    /// assert_eq!(Reversed(Natural).into_inner(), Natural);
    /// ```
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}


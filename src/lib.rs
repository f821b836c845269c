//! # Permsort
//!
//! `permsort` provides two small, independent algorithmic utilities over arbitrary
//! ordered element sequences:
//!
//! - **Distinct permutations**: [`PermutationEnumerator`] and [`Permutations`] walk every
//!   *distinct* arrangement of a multiset in lexicographic order. Repeated elements are
//!   skipped structurally, so `"aabb"` yields six permutations rather than twenty-four.
//! - **Classic comparison sorts**: [`BubbleSort`], [`InsertionSort`], [`QuickSort`] and
//!   [`SelectionSort`] share one validated [`Sorter`] contract supporting ascending and
//!   descending order, custom comparators and sub-range sorting.
//!
//! Both halves are generic over the element type and take their ordering from a
//! [`Comparator`](core::Comparator): any `Fn(&T, &T) -> Ordering` closure, the
//! [`Natural`](core::Natural) order of an [`Ord`] type, or a hand-written comparator.
//!
//! ## Usage
//!
//! ### Permutations
//!
//! ```rust
//! use permsort::Permutations;
//!
//! let permutations = Permutations::new([1, 2, 2]);
//! let all: Vec<Vec<i32>> = permutations.iter().collect();
//!
//! assert_eq!(all, vec![vec![1, 2, 2], vec![2, 1, 2], vec![2, 2, 1]]);
//! ```
//!
//! ### Sorting
//!
//! ```rust
//! use permsort::prelude::*;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! InsertionSort.sort_ascending(&mut data)?;
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//!
//! // Longest first.
//! SelectionSort.sort_descending_by(&mut data, |a, b| a.len().cmp(&b.len()))?;
//! assert_eq!(data[0], "banana");
//! # Ok::<(), permsort::SortError>(())
//! ```
//!
//! ### Sub-ranges and validation
//!
//! Range requests are checked before anything moves, so a rejected call leaves the
//! input untouched.
//!
//! ```rust
//! use permsort::prelude::*;
//!
//! let mut data = vec![4, 3, 2, 1];
//! let error = QuickSort
//!     .sort_ascending_range(Some(&mut data[..]), 2, 4, Some(Natural))
//!     .unwrap_err();
//!
//! assert_eq!(error.name(), "count");
//! assert_eq!(data, vec![4, 3, 2, 1]);
//! ```
//!
//! ## Logging
//!
//! Rejected sort requests are reported through [`tracing`] at `debug` level; dispatch and
//! enumerator state changes are reported at `trace` level. The crate never installs a
//! subscriber.

pub mod algo;
pub mod core;
pub mod error;
pub mod permutation;
pub mod sorter;

pub use algo::{BubbleSort, InsertionSort, QuickSort, SelectionSort};
pub use error::{ParseAlgorithmError, SortError};
pub use permutation::{PermutationEnumerator, Permutations, next_permutation};
pub use sorter::{Algorithm, Sorter};

pub mod prelude {
    pub use crate::algo::{BubbleSort, InsertionSort, QuickSort, SelectionSort};
    pub use crate::core::{Comparator, Natural, Reversed};
    pub use crate::error::SortError;
    pub use crate::permutation::{PermutationEnumerator, Permutations};
    pub use crate::sorter::{Algorithm, Sorter};
}

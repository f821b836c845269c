//! Core rearrangement steps for the four classic comparison sorts.
//!
//! Each algorithm is a unit type implementing [`Sorter`]. The trait supplies argument
//! validation and the ascending/descending overloads; the types here only provide
//! [`Sorter::core_sort`], which works on the already-validated sub-slice.
//!
//! | algorithm         | best       | average    | worst      |
//! |-------------------|------------|------------|------------|
//! | [`BubbleSort`]    | O(n)       | O(n²)      | O(n²)      |
//! | [`InsertionSort`] | O(n)       | O(n²)      | O(n²)      |
//! | [`QuickSort`]     | O(n log n) | O(n log n) | O(n²)      |
//! | [`SelectionSort`] | O(n²)      | O(n²)      | O(n²)      |
//!
//! None of them is stable.

use crate::core::Comparator;
use crate::sorter::Sorter;
use std::cmp::Ordering;
use std::mem;

/// Repeated passes swapping adjacent out-of-order pairs until a pass makes no swap.
///
/// ```
/// use permsort::prelude::*;
///
/// let mut data = vec![4, 2, 3, 1];
/// BubbleSort.sort_ascending(&mut data)?;
/// assert_eq!(data, vec![1, 2, 3, 4]);
/// # Ok::<(), permsort::SortError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn core_sort<T, C>(&self, items: &mut [T], comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        let mut sorted = false;
        while !sorted {
            sorted = true;
            for i in 1..items.len() {
                if comparator.compare(&items[i - 1], &items[i]) == Ordering::Greater {
                    items.swap(i - 1, i);
                    sorted = false;
                }
            }
        }
    }
}

/// Grows a sorted prefix by sinking each next element past every greater one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn core_sort<T, C>(&self, items: &mut [T], comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        for i in 1..items.len() {
            let mut j = i;
            while j > 0 && comparator.compare(&items[j - 1], &items[j]) == Ordering::Greater {
                items.swap(j - 1, j);
                j -= 1;
            }
        }
    }
}

/// Recursive partition around the middle element of each subrange.
///
/// Already-sorted input splits evenly; adversarial input can still degrade to O(n²)
/// comparisons. Recursion always descends into the smaller side, so stack depth stays
/// logarithmic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuickSort;

impl Sorter for QuickSort {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn core_sort<T, C>(&self, items: &mut [T], comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        quicksort(items, comparator);
    }
}

fn quicksort<T, C>(mut items: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    while items.len() > 1 {
        let pivot = partition(items, comparator);
        let (left, right) = mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, comparator);
            items = right;
        } else {
            quicksort(right, comparator);
            items = left;
        }
    }
}

/// Partitions `items` around its middle element and returns the pivot's final index.
///
/// Afterwards everything left of the pivot compares `<=` to it and everything right
/// of it compares `>=`. Elements equal to the pivot may land on either side, and the
/// swap step moves them even when they already sat on a valid side, so ties do not
/// keep their relative order.
fn partition<T, C>(items: &mut [T], comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let middle = (items.len() - 1) / 2;
    items.swap(0, middle);

    let mut left = 0;
    {
        let Some((pivot, rest)) = items.split_first_mut() else {
            return 0;
        };
        let pivot = &*pivot;
        let mut right = rest.len();

        // rest[..left] <= pivot and rest[right..] >= pivot.
        loop {
            while left < right && comparator.compare(&rest[left], pivot) == Ordering::Less {
                left += 1;
            }
            while left < right && comparator.compare(&rest[right - 1], pivot) == Ordering::Greater
            {
                right -= 1;
            }
            if left >= right {
                break;
            }
            right -= 1;
            rest.swap(left, right);
            left += 1;
        }
    }

    items.swap(0, left);
    left
}

/// Double-ended selection: each pass places both the minimum and the maximum of the
/// unsorted window, shrinking it from both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn core_sort<T, C>(&self, items: &mut [T], comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        let mut left = 0;
        let mut right = items.len();

        while left + 1 < right {
            let last = right - 1;
            let mut min = left;
            let mut max = left;
            for i in left + 1..right {
                if comparator.compare(&items[i], &items[min]) == Ordering::Less {
                    min = i;
                }
                if comparator.compare(&items[i], &items[max]) == Ordering::Greater {
                    max = i;
                }
            }

            items.swap(left, min);
            // The maximum sat at the left boundary and was just moved to `min`.
            if max == left {
                max = min;
            }
            if max != left {
                items.swap(last, max);
            }

            left += 1;
            right = last;
        }
    }
}

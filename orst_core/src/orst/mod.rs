//! Classic in-memory sorting algorithms, each behind a small configuration struct.
//!
//! Comparison sorts implement [`Sorter`] and sort any `T: Ord` in place. Distribution sorts
//! (counting, radix, bucket) exploit the structure of their keys, can reject their input, and
//! therefore expose a fallible `try_sort` instead.
//!
//! # Example
//!
//! ```
//! use orst_core::orst::{BubbleSorter, CountingSorter, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//!
//! let mut slice = vec![-5, -10, 0, -3, 8, 5, -1, 10];
//! CountingSorter { stable: true }.try_sort(&mut slice).unwrap();
//! assert_eq!(slice, [-10, -5, -3, -1, 0, 5, 8, 10]);
//! ```

pub mod benchmark;
mod error;
mod key;
mod sorters;

pub use error::{Error, Result};
pub use key::Integer;
pub use sorters::bubble_sorter::{BubbleSorter, BubbleStats};
pub use sorters::bucket_sorter::{RangedBucketSorter, UniformBucketSorter};
pub use sorters::counting_sorter::CountingSorter;
pub use sorters::heap_sorter::{heapify, HeapSorter};
pub use sorters::insertion_sorter::{insertion_sort_by, InsertionSorter};
pub use sorters::merge_sorter::{merge, MergeSorter, MergeStrategy};
pub use sorters::quick_sorter::{Partition, QuickSorter};
pub use sorters::radix_sorter::{counting_sort_by_digit, RadixSorter};
pub use sorters::selection_sorter::{Selection, SelectionSorter};
pub use sorters::shell_sorter::{GapSequence, ShellSorter};

/// The sorting algorithm must implement the trait `Sorter`.
///
/// After `sort` returns, `slice` holds the same elements in non-decreasing order.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// Sort a collection in place with a chosen [`Sorter`].
///
/// ```
/// use orst_core::orst::{HeapSorter, Sort};
///
/// let mut things = vec![4, 2, 3, 5, 1];
/// things.orst(&HeapSorter);
/// assert_eq!(things, [1, 2, 3, 4, 5]);
/// ```
pub trait Sort<T, S>
where
    S: Sorter<T>,
    T: Ord,
{
    fn orst(&mut self, sorter: &S);
}

impl<T, S> Sort<T, S> for [T]
where
    S: Sorter<T>,
    T: Ord,
{
    fn orst(&mut self, sorter: &S) {
        sorter.sort(self)
    }
}

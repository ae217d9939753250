use crate::orst::Sorter;

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orst_core::orst::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// After pass `i` the `i` largest elements sit at the tail in their final place, so every pass
/// scans one element less than the previous one. A pass that swaps nothing proves the slice is
/// sorted and ends the sort, which makes an already sorted input cost a single pass.
///
/// Elements are only swapped when strictly out of order, so the sort is stable.
///
/// # Algorithm
///
/// ```
/// let mut slice = vec![1, 3, 2, 5, 4];
/// let mut unsorted = slice.len();
///
/// loop {
///     let mut swapped = false;
///     for i in 1..unsorted {
///         // swap the elements at index if the previous element is
///         // bigger that the current element.
///         if slice[i - 1] > slice[i] {
///             slice.swap(i - 1, i);
///             swapped = true;
///         }
///     }
///     if !swapped {
///         break;
///     }
///     unsorted -= 1;
/// }
/// # assert_eq!(slice, [1, 2, 3, 4, 5]);
/// ```
#[derive(Default, Debug, Clone, Copy)]
pub struct BubbleSorter;

/// What a single bubble sort run did.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleStats {
    pub passes: usize,
    pub swaps: usize,
    pub comparisons: usize,
}

impl BubbleSorter {
    /// Sorts `slice` and reports the number of passes, swaps and comparisons made.
    ///
    /// ```
    /// use orst_core::orst::BubbleSorter;
    ///
    /// let mut slice = [1, 2, 3, 4, 5, 6, 7];
    /// let stats = BubbleSorter.sort_with_stats(&mut slice);
    /// assert_eq!((stats.passes, stats.swaps, stats.comparisons), (1, 0, 6));
    /// ```
    pub fn sort_with_stats<T: Ord>(&self, slice: &mut [T]) -> BubbleStats {
        log::debug!("bubble sort over {} elements", slice.len());

        let mut stats = BubbleStats::default();
        if slice.len() <= 1 {
            return stats;
        }

        let mut unsorted = slice.len();
        while unsorted > 1 {
            let mut swapped = false;
            for i in 1..unsorted {
                stats.comparisons += 1;
                if slice[i - 1] > slice[i] {
                    slice.swap(i - 1, i);
                    stats.swaps += 1;
                    swapped = true;
                }
            }
            stats.passes += 1;
            log::trace!(
                "bubble pass {} done, {} swaps so far",
                stats.passes,
                stats.swaps
            );

            if !swapped {
                break;
            }
            unsorted -= 1;
        }

        stats
    }
}

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        self.sort_with_stats(slice);
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [64, 34, 25, 12, 22, 11, 90];
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn early_exit_on_sorted() {
        let mut slice = [1, 2, 3, 4, 5, 6, 7];
        let stats = BubbleSorter.sort_with_stats(&mut slice);
        assert_eq!(
            stats,
            BubbleStats {
                passes: 1,
                swaps: 0,
                comparisons: 6
            }
        );
    }

    #[test]
    fn reversed_is_worst_case() {
        let mut slice = [7, 6, 5, 4, 3, 2, 1];
        let stats = BubbleSorter.sort_with_stats(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5, 6, 7]);
        // n(n-1)/2 of everything
        assert_eq!(stats.swaps, 21);
        assert_eq!(stats.comparisons, 21);
        assert_eq!(stats.passes, 6);
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        BubbleSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        BubbleSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        BubbleSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}

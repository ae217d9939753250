use crate::orst::Sorter;

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use orst_core::orst::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter::default().sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large  lists, and generally
/// performs worse than the similar insertion sort. Selection sort is noted for its
/// simplicity and has performance advantages over more complicated algorithms
/// in certain situations, particularly where auxiliary memory is
/// limited.
///
/// The long-distance swap can carry an element past others equal to it, so the sort is not
/// stable, and there is no shortcut for sorted input.
///
/// # Algorithm
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front (
/// left) of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. Initially, the sorted sublist is
/// empty and the unsorted sublist is the entire input
/// list. The algorithm proceeds by finding the smallest
/// (or largest, depending on sorting order)
/// element in the unsorted sublist, exchanging (swapping
/// ) it with the leftmost unsorted element (putting
/// it in sorted order), and moving the sublist
/// boundaries one element to the right.
///
/// [`Selection::Bidirectional`] selects the smallest and the largest element of the unsorted
/// window in the same scan and closes the window from both ends.
#[derive(Default, Debug, Clone, Copy)]
pub struct SelectionSorter {
    pub selection: Selection,
}

/// Which end of the unsorted window each pass fills.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Select the minimum and grow the sorted prefix.
    #[default]
    Minimum,

    /// Select the minimum and the maximum in one scan, filling both ends.
    Bidirectional,
}

impl SelectionSorter {
    /// Sorts `slice` into non-increasing order by selecting the maximum of the unsorted suffix.
    ///
    /// ```
    /// use orst_core::orst::SelectionSorter;
    ///
    /// let mut slice = [64, 34, 25, 12, 22, 11, 90];
    /// SelectionSorter::sort_descending(&mut slice);
    /// assert_eq!(slice, [90, 64, 34, 25, 22, 12, 11]);
    /// ```
    pub fn sort_descending<T: Ord>(slice: &mut [T]) {
        select_into_place(slice, |candidate, best| candidate > best);
    }
}

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        log::debug!(
            "selection sort ({:?}) over {} elements",
            self.selection,
            slice.len()
        );

        match self.selection {
            Selection::Minimum => select_into_place(slice, |candidate, best| candidate < best),
            Selection::Bidirectional => bidirectional(slice),
        }
    }
}

/// Moves the element preferred by `better` into every position from the left, in turn.
fn select_into_place<T, F>(slice: &mut [T], better: F)
where
    F: Fn(&T, &T) -> bool,
{
    for unsorted in 0..slice.len().saturating_sub(1) {
        let mut best_in_rest = unsorted;
        for i in (unsorted + 1)..slice.len() {
            if better(&slice[i], &slice[best_in_rest]) {
                best_in_rest = i;
            }
        }
        if unsorted != best_in_rest {
            slice.swap(unsorted, best_in_rest);
        }
    }
}

fn bidirectional<T: Ord>(slice: &mut [T]) {
    if slice.len() <= 1 {
        return;
    }

    let mut left = 0;
    let mut right = slice.len() - 1;

    while left < right {
        let mut min = left;
        let mut max = left;
        for i in left..=right {
            if slice[i] < slice[min] {
                min = i;
            }
            if slice[i] > slice[max] {
                max = i;
            }
        }

        slice.swap(left, min);
        // the maximum was just moved out of `left`
        if max == left {
            max = min;
        }
        slice.swap(right, max);

        left += 1;
        right -= 1;
    }
}

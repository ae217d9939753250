use crate::orst::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// Sorting is typically done in-place, by iterating up the array, growing the sorted list behind
/// it. At each array-position, it checks the value there against the largest value in the sorted
/// list (which happens to be next to it, in the previous array- position checked). If larger, it
/// leaves the element in place and moves to the next. If smaller, it finds the correct position
/// within the sorted list, shifts all the larger values up to make a space, and inserts into that
/// correct position.
///
/// With `smart: false` the position is found by walking the sorted prefix backwards, which is
/// stable and costs a single comparison per element on sorted input. With `smart: true` the
/// position is the leftmost slot holding a value `>=` the new element, found by binary search.
/// This cuts comparisons to `O(log n)` per element while shifting stays linear. Because equal
/// elements are jumped over, the smart variant is not stable.
///
/// # Usage
///```
/// use orst_core::orst::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter{ smart: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Default, Debug, Clone, Copy)]
pub struct InsertionSorter {
    pub smart: bool,
}

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        log::debug!(
            "insertion sort (smart: {}) over {} elements",
            self.smart,
            slice.len()
        );

        if !self.smart {
            insertion_sort_by(slice, |a, b| a < b);
            return;
        }

        for unsorted in 1..slice.len() {
            let i = slice[..unsorted].partition_point(|x| x < &slice[unsorted]);
            slice[i..=unsorted].rotate_right(1);
        }
    }
}

/// Stable linear insertion sort over a strict "less than" predicate.
///
/// Every element of the sorted prefix for which `is_less(key, elem)` holds is shifted one slot to
/// the right and the key drops into the gap.
///
/// ```
/// use orst_core::orst::insertion_sort_by;
///
/// let mut slice = [0.5, -1.0, 0.25];
/// insertion_sort_by(&mut slice, |a, b| a < b);
/// assert_eq!(slice, [-1.0, 0.25, 0.5]);
/// ```
pub fn insertion_sort_by<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for unsorted in 1..slice.len() {
        let mut i = unsorted;
        while i > 0 && is_less(&slice[i], &slice[i - 1]) {
            slice.swap(i - 1, i);
            i -= 1;
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array_smart() {
        let mut slice = [64, 34, 25, 12, 22, 11, 90];
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn arbitrary_array_lame() {
        let mut slice = [64, 34, 25, 12, 22, 11, 90];
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn sorted_array_smart() {
        let mut slice = (1..10).collect::<Vec<_>>();
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn sorted_array_lame() {
        let mut slice = (1..10).collect::<Vec<_>>();
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_smart() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_lame() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates() {
        let mut slice = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]);

        let mut slice = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]);
    }

    #[test]
    fn by_predicate_is_stable() {
        let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort_by(&mut pairs, |a, b| a.0 < b.0);
        assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn simple_edge_cases_smart() {
        let mut one = vec![1];
        InsertionSorter { smart: true }.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        InsertionSorter { smart: true }.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        InsertionSorter { smart: true }.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter { smart: true }.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn simple_edge_cases_lame() {
        let mut one = vec![1];
        InsertionSorter { smart: false }.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        InsertionSorter { smart: false }.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        InsertionSorter { smart: false }.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter { smart: false }.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}

use crate::orst::Sorter;

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use orst_core::orst::{MergeSorter, MergeStrategy, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter { strategy: MergeStrategy::BottomUp }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// let sorted = MergeSorter::sorted(&[1, 5, 4, 2, 3]);
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Merge sort is a divide-and-conquer algorithm invented by John von Neumann in 1945. The slice
/// is divided at its midpoint until every piece holds at most one element, and the pieces are
/// then merged back together pairwise, each merge producing a sorted run from two sorted runs.
///
/// On ties the merge always takes from the left run, so equal elements keep their input order
/// and every [`MergeStrategy`] produces the exact same output. Time is `O(n log n)` for every
/// input, at the price of `O(n)` additional space.
#[derive(Default, Debug, Clone, Copy)]
pub struct MergeSorter {
    pub strategy: MergeStrategy,
}

/// How the sub-problems of a [`MergeSorter`] are laid out in memory.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Recursive, every half is copied into a new `Vec`.
    TopDownCopy,

    /// Recursive over sub-slices of the caller's storage; every merge copies its span into a
    /// scratch buffer first.
    #[default]
    TopDownBuffered,

    /// Iterative, merging runs of width 1, 2, 4, ... until one run covers the slice.
    BottomUp,
}

impl MergeSorter {
    /// Returns a sorted copy of `slice`, leaving `slice` untouched.
    pub fn sorted<T: Ord + Clone>(slice: &[T]) -> Vec<T> {
        if slice.len() <= 1 {
            return slice.to_vec();
        }

        let (left, right) = slice.split_at(slice.len() / 2);
        merge(&Self::sorted(left), &Self::sorted(right))
    }
}

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    fn sort(&self, slice: &mut [T]) {
        log::debug!(
            "merge sort ({:?}) over {} elements",
            self.strategy,
            slice.len()
        );

        match self.strategy {
            MergeStrategy::TopDownCopy => {
                let sorted = MergeSorter::sorted(slice);
                slice.clone_from_slice(&sorted);
            }
            MergeStrategy::TopDownBuffered => top_down(slice),
            MergeStrategy::BottomUp => bottom_up(slice),
        }
    }
}

/// Merges two sorted runs into a new sorted `Vec`, preferring `left` on ties.
///
/// ```
/// use orst_core::orst::merge;
///
/// assert_eq!(merge(&[1, 4, 9], &[2, 3, 10]), [1, 2, 3, 4, 9, 10]);
/// ```
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}

/// Merges the sorted runs `slice[..mid]` and `slice[mid..]` in place.
fn merge_in_place<T: Ord + Clone>(slice: &mut [T], mid: usize) {
    let scratch = slice.to_vec();
    let (left, right) = scratch.split_at(mid);
    let (mut i, mut j) = (0, 0);

    for slot in slice.iter_mut() {
        let take_left = j == right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
        }
    }
}

fn top_down<T: Ord + Clone>(slice: &mut [T]) {
    if slice.len() <= 1 {
        return;
    }

    let mid = slice.len() / 2;
    let (left, right) = slice.split_at_mut(mid);
    top_down(left);
    top_down(right);
    merge_in_place(slice, mid);
}

fn bottom_up<T: Ord + Clone>(slice: &mut [T]) {
    let len = slice.len();
    let mut width = 1;

    while width < len {
        log::trace!("bottom-up merge of runs of width {width}");

        let mut start = 0;
        while start + width < len {
            let end = (start + 2 * width).min(len);
            merge_in_place(&mut slice[start..end], width);
            start += 2 * width;
        }
        width *= 2;
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const ALL: [MergeStrategy; 3] = [
        MergeStrategy::TopDownCopy,
        MergeStrategy::TopDownBuffered,
        MergeStrategy::BottomUp,
    ];

    #[test]
    fn arbitrary_array() {
        for strategy in ALL {
            let mut slice = [64, 34, 25, 12, 22, 11, 90];
            MergeSorter { strategy }.sort(&mut slice);
            assert_eq!(slice, [11, 12, 22, 25, 34, 64, 90], "{strategy:?}");
        }
    }

    #[test]
    fn sorted_array() {
        for strategy in ALL {
            let mut slice = (1..10).collect::<Vec<_>>();
            MergeSorter { strategy }.sort(&mut slice);
            assert_eq!(slice, (1..10).collect::<Vec<_>>(), "{strategy:?}");
        }
    }

    #[test]
    fn very_unsorted() {
        for strategy in ALL {
            let mut slice = (1..1000).rev().collect::<Vec<_>>();
            MergeSorter { strategy }.sort(&mut slice);
            assert_eq!(slice, (1..1000).collect::<Vec<_>>(), "{strategy:?}");
        }
    }

    #[test]
    fn odd_lengths_bottom_up() {
        for len in 0..40 {
            let mut slice = (0..len).rev().collect::<Vec<_>>();
            bottom_up(&mut slice);
            assert_eq!(slice, (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn merge_keeps_left_on_ties() {
        let left = [(1, 'l'), (2, 'l')];
        let right = [(1, 'r'), (2, 'r')];
        // compare only on the key
        let merged = merge(
            &left.map(|(k, t)| Keyed(k, t)),
            &right.map(|(k, t)| Keyed(k, t)),
        );
        let tags: String = merged.iter().map(|k| k.1).collect();
        assert_eq!(tags, "lrlr");
    }

    #[test]
    fn sorted_leaves_input() {
        let input = vec![3, 1, 2];
        assert_eq!(MergeSorter::sorted(&input), [1, 2, 3]);
        assert_eq!(input, [3, 1, 2]);
    }

    #[test]
    fn simple_edge_cases() {
        for strategy in ALL {
            let sorter = MergeSorter { strategy };

            let mut empty: Vec<i32> = vec![];
            sorter.sort(&mut empty);
            assert!(empty.is_empty());

            let mut one = vec![1];
            sorter.sort(&mut one);
            assert_eq!(one, vec![1]);

            let mut two = vec![2, 1];
            sorter.sort(&mut two);
            assert_eq!(two, vec![1, 2]);

            let mut three = vec![3, 1, 2];
            sorter.sort(&mut three);
            assert_eq!(three, vec![1, 2, 3]);
        }
    }

    #[derive(Clone, Debug)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }
}

use rand::Rng;

use crate::orst::Sorter;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orst_core::orst::{Partition, QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter::default().sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// let mut slice = [5, 1, 5, 5, 2, 5];
/// QuickSorter { partition: Partition::DutchFlag }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 5, 5, 5, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting. When implemented well, it can be somewhat
/// faster than merge sort and about two or three times
/// faster than heapsort.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot. For this reason,
/// it is sometimes called partition-exchange sort.
/// The sub-arrays are then sorted recursively.
/// This can be done in-place, requiring small
/// additional amounts of memory to perform the sorting.
///
/// How the pivot is chosen and the elements are moved is decided by the [`Partition`]. No policy
/// is stable. Only the smaller side of a partition is sorted recursively, the larger one is
/// handled by the next turn of a loop, which keeps the stack depth logarithmic even when a
/// fixed pivot degrades the running time to `O(n^2)`.
#[derive(Default, Debug, Clone, Copy)]
pub struct QuickSorter {
    pub partition: Partition,
}

/// Pivot choice and partition scheme of a [`QuickSorter`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// The middle element is the pivot; elements are copied out into less, equal and greater
    /// groups and written back in that order.
    Grouping,

    /// Lomuto's scheme: the last element is the pivot, smaller elements are swapped leftwards.
    Lomuto,

    /// A uniformly random element is swapped into the last slot before a Lomuto partition.
    #[default]
    RandomLomuto,

    /// Dijkstra's Dutch national flag scheme: the first element is the pivot and every element
    /// equal to it is gathered in the middle, so runs of duplicates are finished in one pass.
    DutchFlag,

    /// The middle element is swapped to the front and two cursors close in from both ends.
    Hoare,
}

impl QuickSorter {
    /// Returns a sorted copy of `slice` built with [`Partition::Grouping`].
    pub fn sorted<T: Ord + Clone>(slice: &[T]) -> Vec<T> {
        if slice.len() <= 1 {
            return slice.to_vec();
        }

        let pivot = &slice[slice.len() / 2];
        let less = slice.iter().filter(|x| *x < pivot).cloned().collect::<Vec<_>>();
        let equal = slice.iter().filter(|x| *x == pivot);
        let greater = slice.iter().filter(|x| *x > pivot).cloned().collect::<Vec<_>>();

        let mut sorted = Self::sorted(&less);
        sorted.extend(equal.cloned());
        sorted.extend(Self::sorted(&greater));
        sorted
    }
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        log::debug!(
            "quick sort ({:?}) over {} elements",
            self.partition,
            slice.len()
        );
        quicksort(slice, self.partition)
    }
}

fn quicksort<T: Ord + Clone>(mut slice: &mut [T], partition: Partition) {
    while slice.len() > 1 {
        // `slice[lt..gt]` holds elements already in their final place.
        let (lt, gt) = match partition {
            Partition::Grouping => grouping(slice),
            Partition::Lomuto => {
                let p = lomuto(slice);
                (p, p + 1)
            }
            Partition::RandomLomuto => {
                let pivot_index = rand::thread_rng().gen_range(0..slice.len());
                let last = slice.len() - 1;
                slice.swap(pivot_index, last);
                let p = lomuto(slice);
                (p, p + 1)
            }
            Partition::DutchFlag => dutch_flag(slice),
            Partition::Hoare => {
                let p = hoare(slice);
                (p, p + 1)
            }
        };

        let (left, rest) = std::mem::take(&mut slice).split_at_mut(lt);
        let right = &mut rest[gt - lt..];

        if left.len() < right.len() {
            quicksort(left, partition);
            slice = right;
        } else {
            quicksort(right, partition);
            slice = left;
        }
    }
}

fn grouping<T: Ord + Clone>(slice: &mut [T]) -> (usize, usize) {
    let pivot = slice[slice.len() / 2].clone();

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for elem in slice.iter() {
        match elem.cmp(&pivot) {
            std::cmp::Ordering::Less => less.push(elem.clone()),
            std::cmp::Ordering::Equal => equal.push(elem.clone()),
            std::cmp::Ordering::Greater => greater.push(elem.clone()),
        }
    }

    let (lt, gt) = (less.len(), less.len() + equal.len());
    for (slot, elem) in slice.iter_mut().zip(less.into_iter().chain(equal).chain(greater)) {
        *slot = elem;
    }
    (lt, gt)
}

/// Partitions around the last element and returns the pivot's final index.
fn lomuto<T: Ord>(slice: &mut [T]) -> usize {
    let high = slice.len() - 1;
    let mut store = 0;

    for i in 0..high {
        if slice[i] < slice[high] {
            slice.swap(store, i);
            store += 1;
        }
    }
    slice.swap(store, high);

    store
}

/// Three-way partition around the first element. Returns `(lt, gt)` such that
/// `slice[..lt] < pivot`, `slice[lt..gt] == pivot` and `slice[gt..] > pivot`.
fn dutch_flag<T: Ord>(slice: &mut [T]) -> (usize, usize) {
    // invariant: [..lt] < pivot == [lt..i], [gt..] > pivot, and the pivot sits at lt
    let mut lt = 0;
    let mut i = 1;
    let mut gt = slice.len();

    while i < gt {
        match slice[i].cmp(&slice[lt]) {
            std::cmp::Ordering::Less => {
                slice.swap(lt, i);
                lt += 1;
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                gt -= 1;
                slice.swap(i, gt);
            }
            std::cmp::Ordering::Equal => i += 1,
        }
    }

    (lt, gt)
}

/// Partitions around the middle element and returns the pivot's final index.
fn hoare<T: Ord>(slice: &mut [T]) -> usize {
    let mid = slice.len() / 2;
    slice.swap(0, mid);

    let (pivot, rest) = match slice.split_first_mut() {
        Some(split) => split,
        None => return 0,
    };
    if rest.is_empty() {
        return 0;
    }

    let mut left = 0;
    let mut right = rest.len() - 1;

    while left <= right {
        if &rest[left] <= pivot {
            left += 1;
        } else if &rest[right] > pivot {
            if right == 0 {
                break;
            }
            right -= 1;
        } else {
            rest.swap(left, right);
            left += 1;
            if right == 0 {
                break;
            }
            right -= 1;
        }
    }

    // `rest[..left]` is the part <= pivot, so the pivot belongs right after it.
    slice.swap(0, left);
    debug_assert!(slice[..left].iter().all(|x| x <= &slice[left]));

    left
}

#[cfg(test)]
mod tests {

    use super::*;

    const ALL: [Partition; 5] = [
        Partition::Grouping,
        Partition::Lomuto,
        Partition::RandomLomuto,
        Partition::DutchFlag,
        Partition::Hoare,
    ];

    #[test]
    fn arbitrary_array() {
        for partition in ALL {
            let mut slice = [64, 34, 25, 12, 22, 11, 90];
            QuickSorter { partition }.sort(&mut slice);
            assert_eq!(slice, [11, 12, 22, 25, 34, 64, 90], "{partition:?}");
        }
    }

    #[test]
    fn sorted_array() {
        for partition in ALL {
            let mut slice = (1..10).collect::<Vec<_>>();
            QuickSorter { partition }.sort(&mut slice);
            assert_eq!(slice, (1..10).collect::<Vec<_>>(), "{partition:?}");
        }
    }

    #[test]
    fn very_unsorted() {
        for partition in ALL {
            let mut slice = (1..1000).rev().collect::<Vec<_>>();
            QuickSorter { partition }.sort(&mut slice);
            assert_eq!(slice, (1..1000).collect::<Vec<_>>(), "{partition:?}");
        }
    }

    #[test]
    fn all_equal() {
        for partition in ALL {
            let mut slice = [5, 5, 5, 5, 5];
            QuickSorter { partition }.sort(&mut slice);
            assert_eq!(slice, [5, 5, 5, 5, 5], "{partition:?}");
        }
    }

    #[test]
    fn lomuto_returns_pivot_index() {
        let mut slice = [3, 8, 1, 9, 5];
        let p = lomuto(&mut slice);
        assert_eq!(p, 2);
        assert_eq!(slice[p], 5);
        assert!(slice[..p].iter().all(|&x| x < 5));
        assert!(slice[p + 1..].iter().all(|&x| x >= 5));
    }

    #[test]
    fn dutch_flag_bounds() {
        let mut slice = [4, 9, 4, 1, 4, 7, 0, 4];
        let (lt, gt) = dutch_flag(&mut slice);
        assert_eq!((lt, gt), (2, 6));
        assert!(slice[..lt].iter().all(|&x| x < 4));
        assert!(slice[lt..gt].iter().all(|&x| x == 4));
        assert!(slice[gt..].iter().all(|&x| x > 4));
    }

    #[test]
    fn hoare_places_pivot() {
        let mut slice = [9, 2, 7, 5, 1, 8, 3];
        let p = hoare(&mut slice);
        assert_eq!(slice[p], 5);
        assert!(slice[..p].iter().all(|&x| x <= 5));
        assert!(slice[p + 1..].iter().all(|&x| x > 5));
    }

    #[test]
    fn sorted_leaves_input() {
        let input = vec![3, 3, 1, 2];
        assert_eq!(QuickSorter::sorted(&input), [1, 2, 3, 3]);
        assert_eq!(input, [3, 3, 1, 2]);
    }

    #[test]
    fn simple_edge_cases() {
        for partition in ALL {
            let sorter = QuickSorter { partition };

            let mut empty: Vec<i32> = vec![];
            sorter.sort(&mut empty);
            assert!(empty.is_empty());

            let mut one = vec![1];
            sorter.sort(&mut one);
            assert_eq!(one, vec![1]);

            let mut two = vec![1, 2];
            sorter.sort(&mut two);
            assert_eq!(two, vec![1, 2]);

            let mut two = vec![2, 1];
            sorter.sort(&mut two);
            assert_eq!(two, vec![1, 2]);

            let mut three = vec![3, 1, 2];
            sorter.sort(&mut three);
            assert_eq!(three, vec![1, 2, 3]);
        }
    }
}

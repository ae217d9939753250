use crate::orst::Sorter;

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use orst_core::orst::{HeapSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Heapsort can be thought of as an improved selection sort: it divides its input into a sorted
/// and an unsorted region, and iteratively shrinks the unsorted region by extracting the largest
/// element from it and inserting it into the sorted region. Unlike selection sort, heapsort does
/// not waste time with a linear-time scan of the unsorted region; rather, heap sort maintains the
/// unsorted region in a binary max-heap to find the largest element in each step in
/// logarithmic time.
///
/// Time is `O(n log n)` for every input with `O(1)` extra space. The sort is not stable.
#[derive(Default, Debug, Clone, Copy)]
pub struct HeapSorter;

impl<T> Sorter<T> for HeapSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        log::debug!("heap sort over {} elements", slice.len());

        let len = slice.len();
        for root in (0..len / 2).rev() {
            heapify(slice, len, root);
        }

        for end in (1..len).rev() {
            slice.swap(0, end);
            heapify(slice, end, 0);
        }
        log::trace!("heap sort extracted {} maxima", len.saturating_sub(1));
    }
}

/// Sifts `slice[root]` down until the subtree rooted at `root` is a max-heap.
///
/// Only the first `heap_size` elements are considered part of the heap. Both subtrees of `root`
/// must already be max-heaps.
///
/// ```
/// use orst_core::orst::heapify;
///
/// let mut heap = [1, 9, 8, 4, 5];
/// heapify(&mut heap, 5, 0);
/// assert_eq!(heap, [9, 5, 8, 4, 1]);
/// ```
pub fn heapify<T: Ord>(slice: &mut [T], heap_size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < heap_size && slice[left] > slice[largest] {
            largest = left;
        }
        if right < heap_size && slice[right] > slice[largest] {
            largest = right;
        }

        if largest == root {
            return;
        }
        slice.swap(root, largest);
        root = largest;
    }
}

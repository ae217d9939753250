use crate::orst::Sorter;

/// An implementation of [Shell Sort](https://en.wikipedia.org/wiki/Shellsort)
///
/// # Usage
///```
/// use orst_core::orst::{GapSequence, ShellSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ShellSorter { gaps: GapSequence::Hibbard }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Shell sort generalises insertion sort by first sorting elements far apart from each other and
/// then progressively shrinking the distance. For a gap `g` the slice is viewed as `g` interleaved
/// subsequences (`0, g, 2g, ...`, `1, 1 + g, ...`), each of which is insertion sorted. The last gap
/// is always `1`, a plain insertion sort over input that is by then nearly sorted.
///
/// The gaps used are decided by the [`GapSequence`]. Long-distance moves reorder equal elements,
/// so the sort is not stable.
#[derive(Default, Debug, Clone, Copy)]
pub struct ShellSorter {
    pub gaps: GapSequence,
}

/// Strides used by [`ShellSorter`], from the first applied to the last.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapSequence {
    /// `n/2, n/4, ..., 1` (Shell's original sequence).
    #[default]
    Halving,

    /// `2^k - 1`, starting from the largest such value below `n/3` and shrinking by
    /// `gap = (gap - 1) / 2`.
    ///
    /// The first gap is strictly below `n/3`, one term lower than the common
    /// `while gap < n / 3 { gap = 2 * gap + 1 }` loop would start.
    Hibbard,

    /// `(3^k - 1) / 2` (`1, 4, 13, 40, 121, ...`), starting from the largest such value below
    /// `n/3` and shrinking by `gap = gap / 3`.
    Knuth,

    /// `1, 5, 19, 41, 109, ...`, every term below `n`, largest first.
    Sedgewick,
}

impl GapSequence {
    /// The gaps applied to a slice of length `len`, in application order.
    ///
    /// ```
    /// use orst_core::orst::GapSequence;
    ///
    /// assert_eq!(GapSequence::Halving.gaps(20), [10, 5, 2, 1]);
    /// assert_eq!(GapSequence::Hibbard.gaps(30), [7, 3, 1]);
    /// assert_eq!(GapSequence::Knuth.gaps(100), [13, 4, 1]);
    /// assert_eq!(GapSequence::Sedgewick.gaps(50), [41, 19, 5, 1]);
    /// ```
    pub fn gaps(&self, len: usize) -> Vec<usize> {
        if len <= 1 {
            return Vec::new();
        }

        match self {
            GapSequence::Halving => {
                let mut gaps = Vec::new();
                let mut gap = len / 2;
                while gap > 0 {
                    gaps.push(gap);
                    gap /= 2;
                }
                gaps
            }
            GapSequence::Hibbard => {
                let mut gap = 1;
                while 2 * gap + 1 < len / 3 {
                    gap = 2 * gap + 1;
                }

                let mut gaps = Vec::new();
                while gap >= 1 {
                    gaps.push(gap);
                    gap = (gap - 1) / 2;
                }
                gaps
            }
            GapSequence::Knuth => {
                let mut gap = 1;
                while 3 * gap + 1 < len / 3 {
                    gap = 3 * gap + 1;
                }

                let mut gaps = Vec::new();
                while gap >= 1 {
                    gaps.push(gap);
                    gap /= 3;
                }
                gaps
            }
            GapSequence::Sedgewick => {
                let mut gaps = vec![1];
                for k in 1u32.. {
                    let gap = if k % 2 == 0 {
                        9 * (1usize << k) - 9 * (1usize << (k / 2)) + 1
                    } else {
                        8 * (1usize << k) - 6 * (1usize << ((k + 1) / 2)) + 1
                    };
                    if gap >= len {
                        break;
                    }
                    gaps.push(gap);
                }
                gaps.reverse();
                gaps
            }
        }
    }
}

impl<T> Sorter<T> for ShellSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        log::debug!(
            "shell sort ({:?} gaps) over {} elements",
            self.gaps,
            slice.len()
        );

        for gap in self.gaps.gaps(slice.len()) {
            log::trace!("shell sort pass with gap {gap}");
            gapped_insertion(slice, gap);
        }
    }
}

/// Insertion sort over each of the `gap` interleaved subsequences of `slice`.
fn gapped_insertion<T: Ord>(slice: &mut [T], gap: usize) {
    for unsorted in gap..slice.len() {
        let mut i = unsorted;
        while i >= gap && slice[i - gap] > slice[i] {
            slice.swap(i - gap, i);
            i -= gap;
        }
    }
}

use crate::orst::key::{self, Integer};
use crate::orst::Result;

/// An implementation of [Counting Sort](https://en.wikipedia.org/wiki/Counting_sort)
///
/// # Usage
///```
/// use orst_core::orst::CountingSorter;
///
/// let mut slice = [4, 2, 2, 8, 3, 3, 1];
/// CountingSorter::default().try_sort(&mut slice)?;
/// assert_eq!(slice, [1, 2, 2, 3, 3, 4, 8]);
/// # Ok::<(), orst_core::orst::Error>(())
///```
///
/// # Explanation
///
/// Counting sort does not compare elements at all. It finds the smallest and largest value,
/// allocates one counter per value in between, tallies how often each value occurs and then
/// rebuilds the slice from the tallies. This takes `O(n + k)` time and `O(k)` space for a value
/// range of size `k`, which is excellent when `k` is small compared to `n` and wasteful
/// otherwise.
///
/// With `stable: false` the values are simply re-emitted from the table. With `stable: true`
/// the table is turned into running totals, so that entry `v` holds the number of elements with a
/// value `<= v`, and the input is walked from back to front, dropping each element into the last
/// free slot for its value. Equal elements therefore keep their order, which is what allows
/// [`try_sort_by_key`](CountingSorter::try_sort_by_key) to sort arbitrary records.
///
/// # Errors
///
/// [`Error::RangeOverflow`](crate::orst::Error::RangeOverflow) when the value range does not fit
/// a table. The slice is not modified in that case.
#[derive(Default, Debug, Clone, Copy)]
pub struct CountingSorter {
    pub stable: bool,
}

impl CountingSorter {
    pub fn try_sort<T: Integer>(&self, slice: &mut [T]) -> Result<()> {
        log::debug!(
            "counting sort (stable: {}) over {} elements",
            self.stable,
            slice.len()
        );

        if self.stable {
            return stable_by_key(slice, |&x| x);
        }

        let Some((min, max)) = key::bounds(slice, |&x| x) else {
            return Ok(());
        };
        let mut counts = key::table(key::slots(min, max, 1)?, 0usize)?;

        for &x in slice.iter() {
            counts[(x.widen() - min) as usize] += 1;
        }

        let mut index = 0;
        for (offset, &count) in counts.iter().enumerate() {
            for slot in &mut slice[index..index + count] {
                *slot = T::narrow(min + offset as i128);
            }
            index += count;
        }

        Ok(())
    }

    /// Stable counting sort of arbitrary elements by an integer key.
    ///
    /// ```
    /// use orst_core::orst::CountingSorter;
    ///
    /// let mut people = [("ada", 36), ("bob", 25), ("cy", 36), ("dee", 25)];
    /// CountingSorter::try_sort_by_key(&mut people, |p| p.1)?;
    /// assert_eq!(people, [("bob", 25), ("dee", 25), ("ada", 36), ("cy", 36)]);
    /// # Ok::<(), orst_core::orst::Error>(())
    /// ```
    pub fn try_sort_by_key<T, K, F>(slice: &mut [T], key: F) -> Result<()>
    where
        T: Clone,
        K: Integer,
        F: Fn(&T) -> K,
    {
        stable_by_key(slice, key)
    }
}

fn stable_by_key<T, K, F>(slice: &mut [T], key: F) -> Result<()>
where
    T: Clone,
    K: Integer,
    F: Fn(&T) -> K,
{
    let Some((min, max)) = key::bounds(slice, &key) else {
        return Ok(());
    };
    let mut counts = key::table(key::slots(min, max, 1)?, 0usize)?;
    let slot_of = |elem: &T| (key(elem).widen() - min) as usize;

    for elem in slice.iter() {
        counts[slot_of(elem)] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut output: Vec<Option<T>> = vec![None; slice.len()];
    for elem in slice.iter().rev() {
        let slot = slot_of(elem);
        counts[slot] -= 1;
        output[counts[slot]] = Some(elem.clone());
    }

    for (slot, elem) in slice.iter_mut().zip(output) {
        if let Some(elem) = elem {
            *slot = elem;
        }
    }

    Ok(())
}

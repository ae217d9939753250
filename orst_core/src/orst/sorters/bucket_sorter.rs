use crate::orst::insertion_sort_by;
use crate::orst::key::{self, Integer};
use crate::orst::{Error, Result};

/// An implementation of [Bucket Sort](https://en.wikipedia.org/wiki/Bucket_sort) for values
/// spread evenly over `[0, 1)`.
///
/// # Usage
///```
/// use orst_core::orst::UniformBucketSorter;
///
/// let mut slice = [0.42, 0.32, 0.23, 0.52, 0.25, 0.47, 0.51];
/// UniformBucketSorter.try_sort(&mut slice)?;
/// assert_eq!(slice, [0.23, 0.25, 0.32, 0.42, 0.47, 0.51, 0.52]);
/// # Ok::<(), orst_core::orst::Error>(())
///```
///
/// # Explanation
///
/// A slice of `n` values gets `n` buckets; value `v` goes into bucket `floor(v * n)`. When the
/// values are uniformly distributed each bucket receives about one element, every bucket is then
/// sorted on its own with insertion sort and the buckets are concatenated in order, for an
/// average of `O(n)` work. If everything lands in the same bucket this degrades to the `O(n^2)`
/// of insertion sort.
///
/// Values outside `[0, 1)` are clamped into the first or the last bucket, which keeps the result
/// sorted but defeats the distribution. Insertion sort is stable, and so is this sort.
///
/// # Errors
///
/// [`Error::TypeMismatch`] if the slice holds a NaN, which has no place in the order. The slice
/// is not modified in that case.
#[derive(Default, Debug, Clone, Copy)]
pub struct UniformBucketSorter;

impl UniformBucketSorter {
    pub fn try_sort<T>(&self, slice: &mut [T]) -> Result<()>
    where
        T: Copy + PartialOrd + Into<f64>,
    {
        log::debug!("uniform bucket sort over {} elements", slice.len());

        if let Some(index) = slice.iter().position(|&x| Into::<f64>::into(x).is_nan()) {
            return Err(Error::unordered(index));
        }
        if slice.len() <= 1 {
            return Ok(());
        }

        let n = slice.len();
        let mut buckets = vec![Vec::new(); n];
        for &x in slice.iter() {
            // `as` saturates: negative values land in bucket 0, huge ones are clamped below.
            let index = ((Into::<f64>::into(x) * n as f64) as usize).min(n - 1);
            buckets[index].push(x);
        }

        concat(slice, buckets, |a: &T, b: &T| a < b);
        Ok(())
    }
}

/// An implementation of [Bucket Sort](https://en.wikipedia.org/wiki/Bucket_sort) for integers,
/// with buckets covering `width` consecutive values each.
///
/// # Usage
///```
/// use orst_core::orst::RangedBucketSorter;
///
/// let mut slice = [29, 25, 3, 49, 9, 37, 21, 43];
/// RangedBucketSorter { width: 10 }.try_sort(&mut slice)?;
/// assert_eq!(slice, [3, 9, 21, 25, 29, 37, 43, 49]);
/// # Ok::<(), orst_core::orst::Error>(())
///```
///
/// # Explanation
///
/// The range `min..=max` of the slice is cut into `(max - min) / width + 1` buckets and value `v`
/// goes into bucket `(v - min) / width`. Each bucket is insertion sorted and the buckets are
/// concatenated. The sort is stable.
///
/// # Errors
///
/// - [`Error::InvalidRange`] when `width` is not positive.
/// - [`Error::RangeOverflow`] when the number of buckets does not fit in memory.
///
/// The slice is not modified when an error is returned.
#[derive(Debug, Clone, Copy)]
pub struct RangedBucketSorter {
    pub width: i64,
}

impl Default for RangedBucketSorter {
    fn default() -> Self {
        Self { width: 10 }
    }
}

impl RangedBucketSorter {
    pub fn try_sort<T: Integer>(&self, slice: &mut [T]) -> Result<()> {
        log::debug!(
            "ranged bucket sort (width: {}) over {} elements",
            self.width,
            slice.len()
        );

        if self.width <= 0 {
            return Err(Error::invalid_width(self.width));
        }
        let Some((min, max)) = key::bounds(slice, |&x| x) else {
            return Ok(());
        };

        let width = self.width as i128;
        let mut buckets = key::table(key::slots(min, max, width)?, Vec::new())?;
        for &x in slice.iter() {
            buckets[((x.widen() - min) / width) as usize].push(x);
        }

        concat(slice, buckets, |a: &T, b: &T| a < b);
        Ok(())
    }
}

/// Sorts every bucket and writes the buckets back into `slice` one after another.
fn concat<T, F>(slice: &mut [T], buckets: Vec<Vec<T>>, is_less: F)
where
    F: Fn(&T, &T) -> bool,
{
    let sorted = buckets.into_iter().flat_map(|mut bucket| {
        insertion_sort_by(&mut bucket, &is_less);
        bucket
    });

    for (slot, x) in slice.iter_mut().zip(sorted) {
        *slot = x;
    }
}

use crate::orst::key::{self, Integer};
use crate::orst::{Error, Result};

const RADIX: i128 = 10;

/// An implementation of least significant digit [Radix Sort](https://en.wikipedia.org/wiki/Radix_sort)
///
/// # Usage
///```
/// use orst_core::orst::RadixSorter;
///
/// let mut slice = [170, 45, 75, 90, 802, 24, 2, 66];
/// RadixSorter::default().try_sort(&mut slice)?;
/// assert_eq!(slice, [2, 24, 45, 66, 75, 90, 170, 802]);
///
/// let mut slice = [-5, -10, 0, -3, 8, 5, -1, 10];
/// RadixSorter { signed: true }.try_sort(&mut slice)?;
/// assert_eq!(slice, [-10, -5, -3, -1, 0, 5, 8, 10]);
/// # Ok::<(), orst_core::orst::Error>(())
///```
///
/// # Explanation
///
/// The slice is sorted one decimal digit at a time, from the ones upwards, with a stable
/// counting sort keyed on that digit (see [`counting_sort_by_digit`]). Because each pass is
/// stable, elements that agree on the current digit stay ordered by the digits already
/// processed. The number of passes is the digit count of the largest value, giving
/// `O(d * (n + 10))` time.
///
/// Digits are only defined for non-negative values. With `signed: true` the negative values are
/// split off, their magnitudes sorted separately, and the result reversed and placed in front of
/// the non-negative values.
///
/// # Errors
///
/// - [`Error::InvalidRange`] when `signed` is `false` and the slice holds a negative value.
/// - [`Error::RangeOverflow`] when a negative value has no positive counterpart in `i128`.
///
/// The slice is not modified when an error is returned.
#[derive(Default, Debug, Clone, Copy)]
pub struct RadixSorter {
    pub signed: bool,
}

impl RadixSorter {
    pub fn try_sort<T: Integer>(&self, slice: &mut [T]) -> Result<()> {
        log::debug!(
            "radix sort (signed: {}) over {} elements",
            self.signed,
            slice.len()
        );

        if slice.len() <= 1 {
            return Ok(());
        }

        if !self.signed {
            return Self::try_sort_by_key(slice, |&x| x);
        }

        let mut magnitudes = slice
            .iter()
            .filter(|x| x.widen() < 0)
            .map(|x| x.widen().checked_neg())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::overflow("negated value does not fit in i128"))?;
        let mut non_negative = slice
            .iter()
            .copied()
            .filter(|x| x.widen() >= 0)
            .collect::<Vec<_>>();

        lsd(&mut magnitudes, |&x| x);
        lsd(&mut non_negative, |&x| x);

        let negative = magnitudes.into_iter().rev().map(|m| T::narrow(-m));
        for (slot, x) in slice.iter_mut().zip(negative.chain(non_negative)) {
            *slot = x;
        }

        Ok(())
    }

    /// Stable LSD radix sort of arbitrary elements by a non-negative integer key.
    ///
    /// ```
    /// use orst_core::orst::RadixSorter;
    ///
    /// let mut words = ["pear", "fig", "kiwi", "plum", "yam"];
    /// RadixSorter::try_sort_by_key(&mut words, |w| w.len())?;
    /// assert_eq!(words, ["fig", "yam", "pear", "kiwi", "plum"]);
    /// # Ok::<(), orst_core::orst::Error>(())
    /// ```
    pub fn try_sort_by_key<T, K, F>(slice: &mut [T], key: F) -> Result<()>
    where
        T: Clone,
        K: Integer,
        F: Fn(&T) -> K,
    {
        if let Some((min, _)) = key::bounds(slice, &key) {
            if min < 0 {
                return Err(Error::negative_value(min));
            }
        }

        lsd(slice, key);
        Ok(())
    }
}

/// Runs one digit pass per decimal digit of the largest key. Keys must be non-negative.
fn lsd<T, K, F>(slice: &mut [T], key: F)
where
    T: Clone,
    K: Integer,
    F: Fn(&T) -> K,
{
    let Some((_, max)) = key::bounds(slice, &key) else {
        return;
    };

    let mut exp = 1;
    while max / exp > 0 {
        log::trace!("radix pass on digit exponent {exp}");
        digit_pass(slice, &key, exp);
        match exp.checked_mul(RADIX) {
            Some(next) => exp = next,
            None => break,
        }
    }
}

/// Stable counting sort of non-negative integers keyed on the decimal digit `(value / exp) % 10`.
///
/// ```
/// use orst_core::orst::counting_sort_by_digit;
///
/// let mut slice = [170, 45, 75, 90, 802, 24, 2, 66];
/// counting_sort_by_digit(&mut slice, 1)?;
/// assert_eq!(slice, [170, 90, 802, 2, 24, 45, 75, 66]);
/// # Ok::<(), orst_core::orst::Error>(())
/// ```
///
/// # Errors
///
/// [`Error::InvalidRange`] when `exp` is not positive or the slice holds a negative value. The
/// slice is not modified in that case.
pub fn counting_sort_by_digit<T: Integer>(slice: &mut [T], exp: i128) -> Result<()> {
    if exp <= 0 {
        return Err(Error::invalid_exponent(exp));
    }
    if let Some((min, _)) = key::bounds(slice, |&x| x) {
        if min < 0 {
            return Err(Error::negative_value(min));
        }
    }

    digit_pass(slice, |&x| x, exp);
    Ok(())
}

fn digit_pass<T, K, F>(slice: &mut [T], key: F, exp: i128)
where
    T: Clone,
    K: Integer,
    F: Fn(&T) -> K,
{
    let digit = |elem: &T| ((key(elem).widen() / exp) % RADIX) as usize;

    let mut counts = [0usize; RADIX as usize];
    for elem in slice.iter() {
        counts[digit(elem)] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut output: Vec<Option<T>> = vec![None; slice.len()];
    for elem in slice.iter().rev() {
        let d = digit(elem);
        counts[d] -= 1;
        output[counts[d]] = Some(elem.clone());
    }

    for (slot, elem) in slice.iter_mut().zip(output) {
        if let Some(elem) = elem {
            *slot = elem;
        }
    }
}

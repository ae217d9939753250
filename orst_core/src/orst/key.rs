use super::error::{Error, Result};

/// Integer types the distribution sorters (counting, radix and ranged bucket sort) accept.
///
/// All range arithmetic is carried out on the `i128` image of a value so that `max - min`, digit
/// extraction and negation can be checked instead of wrapping. `u128` is left out because it
/// does not widen losslessly.
pub trait Integer: Copy + Ord {
    /// Lossless conversion into `i128`.
    fn widen(self) -> i128;

    /// Inverse of [`widen`](Integer::widen). Only ever called with values that came out of
    /// `widen` for the same type.
    fn narrow(value: i128) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Integer for $t {
                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn narrow(value: i128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

/// Smallest and largest widened key of a non-empty slice.
pub(crate) fn bounds<T, K, F>(slice: &[T], key: F) -> Option<(i128, i128)>
where
    K: Integer,
    F: Fn(&T) -> K,
{
    let mut iter = slice.iter().map(|elem| key(elem).widen());
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), k| (min.min(k), max.max(k))))
}

/// Number of slots needed to cover `min..=max` in steps of `width`.
pub(crate) fn slots(min: i128, max: i128, width: i128) -> Result<usize> {
    let span = max
        .checked_sub(min)
        .ok_or_else(|| Error::overflow(&format!("span {min}..={max} does not fit in i128")))?;
    let count = (span / width)
        .checked_add(1)
        .ok_or_else(|| Error::overflow(&format!("span {min}..={max} does not fit in i128")))?;
    usize::try_from(count)
        .map_err(|_| Error::overflow(&format!("{count} slots do not fit in usize")))
}

/// Allocates a table of `len` copies of `fill`, reporting allocation failure instead of aborting.
pub(crate) fn table<V: Clone>(len: usize, fill: V) -> Result<Vec<V>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| Error::overflow(&format!("unable to allocate a table of {len} slots")))?;
    table.resize(len, fill);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_narrow() {
        assert_eq!(i8::MIN.widen(), -128);
        assert_eq!(u64::MAX.widen(), u64::MAX as i128);
        assert_eq!(<i16 as Integer>::narrow(-300), -300i16);
        assert_eq!(<usize as Integer>::narrow(42), 42usize);
    }

    #[test]
    fn bounds_of_slice() {
        assert_eq!(bounds(&[3, -7, 12, 0], |&x: &i32| x), Some((-7, 12)));
        assert_eq!(bounds(&[] as &[u8], |&x: &u8| x), None);
    }

    #[test]
    fn slot_count() {
        assert_eq!(slots(-10, 10, 1).unwrap(), 21);
        assert_eq!(slots(3, 49, 10).unwrap(), 5);
        assert_eq!(slots(5, 5, 1).unwrap(), 1);
    }

    #[test]
    fn slot_count_overflows() {
        assert!(matches!(
            slots(i128::MIN, i128::MAX, 1),
            Err(Error::RangeOverflow(_))
        ));
        assert!(matches!(
            slots(0, i128::MAX, 1),
            Err(Error::RangeOverflow(_))
        ));
    }
}

use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, orst_core::orst::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Represents all possible errors which can occur while validating the input of a sorter.
///
/// Every sorter that can fail checks its configuration and its input before it writes to the
/// slice, so an `Err` always leaves the caller's data untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised when a configured range is unusable, e.g. a bucket width that is not positive, or
    /// when a value falls outside the domain a sorter accepts (a negative value given to the
    /// unsigned radix sort or a digit pass, a digit exponent that is not positive).
    InvalidRange(String),

    /// Raised when a value has no place in a total order, such as a floating point NaN.
    TypeMismatch(String),

    /// Raised when the span of the input (`max - min`), a derived table size, or a negation does
    /// not fit the index type, or the table could not be allocated.
    RangeOverflow(String),
}

impl Error {
    pub(crate) fn invalid_width(width: i64) -> Self {
        Error::InvalidRange(format!(
            "Invalid Range: bucket width must be positive (found: {width})"
        ))
    }

    pub(crate) fn negative_value(value: i128) -> Self {
        Error::InvalidRange(format!(
            "Invalid Range: radix digits need non-negative values (found: {value})"
        ))
    }

    pub(crate) fn invalid_exponent(exp: i128) -> Self {
        Error::InvalidRange(format!(
            "Invalid Range: digit exponent must be positive (found: {exp})"
        ))
    }

    pub(crate) fn unordered(index: usize) -> Self {
        Error::TypeMismatch(format!(
            "Type Mismatch: value at index {index} is not totally ordered (NaN)"
        ))
    }

    pub(crate) fn overflow(what: &str) -> Self {
        Error::RangeOverflow(format!("Range Overflow: {what}"))
    }
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match *self {
            Error::InvalidRange(ref s) | Error::TypeMismatch(ref s) | Error::RangeOverflow(ref s) => {
                s
            }
        };
        f.write_str(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_message() {
        assert_eq!(
            Error::invalid_width(0).to_string(),
            "Invalid Range: bucket width must be positive (found: 0)"
        );
        assert_eq!(
            Error::overflow("frequency table of 2^70 slots").to_string(),
            "Range Overflow: frequency table of 2^70 slots"
        );
    }

    #[test]
    fn variants() {
        assert!(matches!(Error::negative_value(-3), Error::InvalidRange(_)));
        assert!(matches!(Error::invalid_exponent(0), Error::InvalidRange(_)));
        assert!(matches!(Error::unordered(2), Error::TypeMismatch(_)));
    }
}

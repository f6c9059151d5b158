//! # Error reporting for the creation of rational numbers
//!
//! Arithmetic on existing values doesn't report errors: operators panic on overflow like the
//! primitive integers do. Only creating a value, from integers or from a float, can fail.
use std::error::Error;
use std::fmt;

/// A `RationalError` is created when a value can't be represented as a rational number.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RationalError {
    /// A denominator of zero was provided, or the reciprocal of zero was requested.
    DivisionByZero,
    /// The float to convert was NaN or infinite.
    NonFinite,
    /// The decimal digits of a float don't fit in the magnitude type.
    ///
    /// # Note
    ///
    /// This is about the number of digits, not only the size of the value: `1e-12` doesn't fit in
    /// 32 bits because its denominator is `10^12`.
    OutOfRange,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            RationalError::DivisionByZero => "denominator can't be zero",
            RationalError::NonFinite => "only finite floats can be converted into a rational",
            RationalError::OutOfRange => "value has more digits than the magnitude type can hold",
        })
    }
}

impl Error for RationalError {}

//! # Sign of a rational number
use std::ops::{Mul, Neg};

use num_traits::Signed;

/// The sign of a rational number, kept apart from its magnitudes.
///
/// Zero is positive.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug)]
#[allow(missing_docs)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Sign of a signed integer.
    pub fn of<S: Signed>(value: S) -> Self {
        if value.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Sign of the product of two signed integers, without computing that product.
    ///
    /// # Arguments
    ///
    /// * `left`: Any value.
    /// * `right`: Any value.
    ///
    /// # Return value
    ///
    /// `Negative` if exactly one of the values is negative and neither is zero.
    pub fn of_product<S: Signed>(left: S, right: S) -> Self {
        if left.is_zero() || right.is_zero() {
            Sign::Positive
        } else {
            Sign::of(left) * Sign::of(right)
        }
    }

    /// `1` for positive, `-1` for negative.
    pub fn factor(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

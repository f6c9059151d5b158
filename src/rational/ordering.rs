//! # Equality, ordering and hashing
//!
//! All three work on the reduced value, so `1/2`, `2/4` and `3/6` are indistinguishable to them.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::rational::Rational;
use crate::rational::sign::Sign;
use crate::traits::Magnitude;

impl<M: Magnitude> PartialEq for Rational<M> {
    fn eq(&self, other: &Self) -> bool {
        let (left, right) = (self.reduce(), other.reduce());

        left.sign == right.sign
            && left.numerator == right.numerator
            && left.denominator == right.denominator
    }
}

impl<M: Magnitude> Eq for Rational<M> {}

impl<M: Magnitude> Hash for Rational<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduce();

        reduced.sign.hash(state);
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}

impl<M: Magnitude> Ord for Rational<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        let (left, right) = (self.reduce(), other.reduce());
        match (left.sign, right.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => compare_magnitudes(
                (left.numerator, left.denominator),
                (right.numerator, right.denominator),
            ),
            (Sign::Negative, Sign::Negative) => compare_magnitudes(
                (right.numerator, right.denominator),
                (left.numerator, left.denominator),
            ),
        }
    }
}

impl<M: Magnitude> PartialOrd for Rational<M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two non-negative fractions without multiplying.
///
/// Cross multiplication doesn't fit in the magnitude type in general. Instead, the integer parts
/// are compared, and when those are equal, the reciprocals of the remainders in reversed order.
/// This is the continued fraction expansion of both values, and it terminates like the Euclidean
/// algorithm does.
///
/// # Arguments
///
/// * `left`: Numerator and nonzero denominator.
/// * `right`: Numerator and nonzero denominator.
fn compare_magnitudes<M: Magnitude>(left: (M, M), right: (M, M)) -> Ordering {
    let ((mut left_numerator, mut left_denominator), (mut right_numerator, mut right_denominator)) = (left, right);

    loop {
        let left_whole = left_numerator / left_denominator;
        let right_whole = right_numerator / right_denominator;
        match left_whole.cmp(&right_whole) {
            Ordering::Equal => {},
            unequal => return unequal,
        }

        let left_remainder = left_numerator % left_denominator;
        let right_remainder = right_numerator % right_denominator;
        match (left_remainder.is_zero(), right_remainder.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {
                // a / b < c / d if and only if d / c < b / a
                (left_numerator, left_denominator, right_numerator, right_denominator) =
                    (right_denominator, right_remainder, left_denominator, left_remainder);
            },
        }
    }
}

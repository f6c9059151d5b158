//! # Traits
//!
//! The integer types that can store the magnitudes of a rational number, and the number theory on
//! them that normalization needs.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{FromPrimitive, PrimInt, Signed, Unsigned};

/// An unsigned integer holding the numerator or denominator of a rational number.
///
/// Each magnitude type is paired with the signed integer type of the same width. Values of that
/// type can be mixed with rationals in arithmetic and comparisons.
pub trait Magnitude: PrimInt + Unsigned + FromPrimitive + Hash + Debug + Display {
    /// Signed integer of the same width, used to create values and in mixed arithmetic.
    type Signed: PrimInt + Signed + Debug;

    /// The magnitude of a signed value.
    ///
    /// Never overflows, also not for the minimum value of the signed type.
    fn unsigned_abs(value: Self::Signed) -> Self;

    /// Convert to a float, rounding to the nearest representable value.
    fn as_f64(self) -> f64;
}

macro_rules! impl_magnitude {
    ($unsigned:ident, $signed:ident) => {
        impl Magnitude for $unsigned {
            type Signed = $signed;

            fn unsigned_abs(value: Self::Signed) -> Self {
                value.unsigned_abs()
            }

            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    }
}
impl_magnitude!(u32, i32);
impl_magnitude!(u64, i64);
impl_magnitude!(u128, i128);

/// Greatest common divisor, using the Euclidean algorithm.
///
/// `gcd(a, 0)` is `a`, so in particular `gcd(0, d)` is `d`.
pub fn gcd<M: Magnitude>(mut a: M, mut b: M) -> M {
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }

    a
}

/// Least common multiple.
///
/// # Return value
///
/// `None` if the multiple doesn't fit in the magnitude type. The multiple of anything with zero is
/// zero.
pub fn lcm<M: Magnitude>(a: M, b: M) -> Option<M> {
    if a.is_zero() || b.is_zero() {
        return Some(M::zero());
    }

    // Dividing first keeps the intermediate value as small as the result
    (a / gcd(a, b)).checked_mul(&b)
}

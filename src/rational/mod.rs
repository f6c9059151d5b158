//! # Rational numbers
//!
//! A sign with two unsigned magnitudes. The magnitudes are not kept in lowest terms, see
//! `Rational::reduce`.
use num_traits::Zero;

use crate::error::RationalError;
use crate::rational::sign::Sign;
use crate::traits::{gcd, Magnitude};

pub mod sign;
mod ops;
mod primitive;
mod ordering;
mod conversion;
mod fmt;
mod macros;

/// Rational number with 32 bit magnitudes, mixes with `i32`.
pub type Rational32 = Rational<u32>;
/// Rational number with 64 bit magnitudes, mixes with `i64`.
pub type Rational64 = Rational<u64>;
/// Rational number with 128 bit magnitudes, mixes with `i128`.
pub type Rational128 = Rational<u128>;

/// An exact rational number.
///
/// The denominator is never zero. A zero value is always positive.
///
/// `Debug` shows the stored fields, `Display` shows the value in lowest terms (use `{:#}` to show
/// the stored fields).
#[derive(Copy, Clone, Debug)]
pub struct Rational<M> {
    sign: Sign,
    numerator: M,
    denominator: M,
}

impl<M: Magnitude> Rational<M> {
    /// Create a new value from a signed numerator and denominator.
    ///
    /// The value is not reduced: `Rational32::new(6, 4)` stores `6` and `4`.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Any nonzero value.
    ///
    /// # Return value
    ///
    /// `RationalError::DivisionByZero` if the denominator is zero.
    pub fn new(numerator: M::Signed, denominator: M::Signed) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Ok(Self::assemble(
            Sign::of_product(numerator, denominator),
            M::unsigned_abs(numerator),
            M::unsigned_abs(denominator),
        ))
    }

    /// Create a new value with denominator one.
    pub fn from_integer(value: M::Signed) -> Self {
        Self::assemble(Sign::of(value), M::unsigned_abs(value), M::one())
    }

    /// Create a new value from a sign and magnitudes.
    ///
    /// A zero numerator results in a positive value regardless of the sign provided.
    pub fn from_parts(sign: Sign, numerator: M, denominator: M) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            Err(RationalError::DivisionByZero)
        } else {
            Ok(Self::assemble(sign, numerator, denominator))
        }
    }

    /// Create a value from parts known to be valid, normalizing the sign of zero.
    pub(crate) fn assemble(sign: Sign, numerator: M, denominator: M) -> Self {
        debug_assert!(!denominator.is_zero());

        let sign = if numerator.is_zero() { Sign::Positive } else { sign };
        Self { sign, numerator, denominator, }
    }

    /// The stored numerator, not necessarily in lowest terms.
    pub fn numerator(&self) -> M {
        self.numerator
    }

    /// The stored denominator, not necessarily in lowest terms. Never zero.
    pub fn denominator(&self) -> M {
        self.denominator
    }

    /// The sign of the value, zero is positive.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether this value equals zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Whether this value is strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Whether this value is strictly larger than zero.
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    /// Whether the denominator divides the numerator.
    pub fn is_integer(&self) -> bool {
        (self.numerator % self.denominator).is_zero()
    }

    /// Bring the value in lowest terms.
    ///
    /// Divides both magnitudes by their greatest common divisor. A zero value becomes `0/1`.
    pub fn reduce(&self) -> Self {
        let divisor = gcd(self.numerator, self.denominator);

        Self {
            sign: self.sign,
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }

    /// Multiplicative inverse, keeping the sign.
    ///
    /// # Return value
    ///
    /// `RationalError::DivisionByZero` if this value is zero.
    pub fn reciprocal(&self) -> Result<Self, RationalError> {
        Self::from_parts(self.sign, self.denominator, self.numerator)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self { sign: Sign::Positive, ..*self }
    }
}

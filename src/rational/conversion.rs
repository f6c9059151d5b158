//! # Conversion from and to floats
//!
//! A float is converted through its shortest decimal representation, the one that `Display`
//! writes and that parses back to the same float. So `0.1` becomes `1/10` rather than the exact
//! binary value `3602879701896397/36028797018963968`. The representation doesn't depend on a
//! locale and never uses exponent notation, but it may have more digits than the magnitude type
//! can hold, in which case the conversion fails.
use log::{debug, trace};
use num_traits::{checked_pow, FromPrimitive, NumCast, ToPrimitive};

use crate::error::RationalError;
use crate::rational::Rational;
use crate::rational::sign::Sign;
use crate::traits::{gcd, Magnitude};

impl<M: Magnitude> Rational<M> {
    /// Convert a float through its decimal representation.
    ///
    /// The result is in lowest terms: `11.154` becomes `5577/500`.
    ///
    /// # Return value
    ///
    /// `RationalError::NonFinite` for NaN and infinities, `RationalError::OutOfRange` if the decimal
    /// digits don't fit in the magnitude type.
    pub fn from_f64(value: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            debug!("refusing to convert non-finite float {value} into a rational");
            return Err(RationalError::NonFinite);
        }

        Self::from_decimal(&value.to_string())
    }

    /// Convert a float through its decimal representation.
    ///
    /// Uses the shortest representation of the `f32`, so `0.1f32` becomes `1/10`.
    pub fn from_f32(value: f32) -> Result<Self, RationalError> {
        if !value.is_finite() {
            debug!("refusing to convert non-finite float {value} into a rational");
            return Err(RationalError::NonFinite);
        }

        Self::from_decimal(&value.to_string())
    }

    /// The value as a float, dividing the numerator by the denominator.
    pub fn to_f64(&self) -> f64 {
        let sign = <f64 as From<i8>>::from(self.sign.factor());
        sign * self.numerator.as_f64() / self.denominator.as_f64()
    }

    /// The value as a float, see `to_f64`.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Split a plain decimal number like `-12.0625` into whole and fractional digits.
    ///
    /// With `p` fractional digits, the numerator is `whole * 10^p + fraction` and the denominator
    /// `10^p`. Both are divided by their greatest common divisor.
    fn from_decimal(text: &str) -> Result<Self, RationalError> {
        let (sign, digits) = match text.strip_prefix('-') {
            Some(digits) => (Sign::Negative, digits),
            None => (Sign::Positive, text),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        let parse = |digits: &str| {
            if digits.is_empty() {
                Ok(M::zero())
            } else {
                M::from_str_radix(digits, 10).map_err(|_| RationalError::OutOfRange)
            }
        };
        let ten = M::from_u8(10).ok_or(RationalError::OutOfRange)?;
        let scale = checked_pow(ten, fraction.len()).ok_or(RationalError::OutOfRange)?;
        let numerator = parse(whole)?
            .checked_mul(&scale)
            .and_then(|scaled| scaled.checked_add(&parse(fraction).ok()?))
            .ok_or(RationalError::OutOfRange)?;

        let divisor = gcd(numerator, scale);
        let (numerator, denominator) = (numerator / divisor, scale / divisor);
        trace!("decimal {text} converted into {numerator}/{denominator} with sign {sign:?}");

        Ok(Self::assemble(sign, numerator, denominator))
    }
}

impl<M: Magnitude> FromPrimitive for Rational<M> {
    fn from_i64(n: i64) -> Option<Self> {
        <M::Signed as NumCast>::from(n).map(Self::from_integer)
    }

    fn from_u64(n: u64) -> Option<Self> {
        <M::Signed as NumCast>::from(n).map(Self::from_integer)
    }

    fn from_i128(n: i128) -> Option<Self> {
        <M::Signed as NumCast>::from(n).map(Self::from_integer)
    }

    fn from_f32(n: f32) -> Option<Self> {
        Self::from_f32(n).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_f64(n).ok()
    }
}

/// Integer conversions truncate toward zero.
impl<M: Magnitude> ToPrimitive for Rational<M> {
    fn to_i64(&self) -> Option<i64> {
        let whole = (self.numerator / self.denominator).to_i128()?;
        let signed = match self.sign {
            Sign::Positive => whole,
            Sign::Negative => -whole,
        };

        signed.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        let whole = self.numerator / self.denominator;
        if self.is_negative() && !whole.is_zero() {
            return None;
        }

        whole.to_u64()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Rational::to_f32(self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}

//! # Text rendering
//!
//! `{}` writes the value in lowest terms, `{:#}` writes the stored fields as they are.
use std::fmt;

use crate::rational::Rational;
use crate::rational::sign::Sign;
use crate::traits::Magnitude;

impl<M: Magnitude> fmt::Display for Rational<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if f.alternate() { render(self) } else { render(&self.reduce()) };
        f.pad(&text)
    }
}

/// Zero is `0`, equal magnitudes are `1` and a unit denominator is left out, otherwise
/// `numerator/denominator`. Negative values are prefixed with a minus.
fn render<M: Magnitude>(value: &Rational<M>) -> String {
    if value.numerator.is_zero() {
        return "0".to_string();
    }

    let minus = if value.sign == Sign::Negative { "-" } else { "" };
    if value.numerator == value.denominator {
        format!("{minus}1")
    } else if value.denominator.is_one() {
        format!("{minus}{}", value.numerator)
    } else {
        format!("{minus}{}/{}", value.numerator, value.denominator)
    }
}

//! # The demonstrated behavior
//!
//! The same steps the `demonstration` example prints.
use approx::assert_relative_eq;

use rationals::{R32, Rational32};

#[test]
fn comparison() {
    let fraction = R32!(4, 8);
    let fraction1 = R32!(4, 2);

    assert!(!(fraction >= fraction1));
}

#[test]
fn rendering() {
    assert_eq!(R32!(4, 2).to_string(), "2");
}

#[test]
fn from_float() {
    let converted = Rational32::from_f64(11.154).unwrap();

    assert_eq!(converted.to_string(), "5577/500");
    assert_relative_eq!(converted.to_f64(), 11.154);
}

#[test]
fn to_float() {
    assert_eq!(R32!(4, 8).to_f64(), 0.5);
}

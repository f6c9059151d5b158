//! # Algebraic properties
//!
//! Inputs are 16 bit so that the intermediate results of two operations on `Rational64` values
//! can't overflow.
use quickcheck::{quickcheck, TestResult};

use rationals::{gcd, Rational64};

fn rational(numerator: i16, denominator: i16) -> Option<Rational64> {
    Rational64::new(numerator.into(), denominator.into()).ok()
}

quickcheck! {
    fn reduce_is_lowest_terms(numerator: i16, denominator: i16) -> TestResult {
        let Some(x) = rational(numerator, denominator) else { return TestResult::discard() };

        let reduced = x.reduce();
        if numerator == 0 {
            TestResult::from_bool(reduced.numerator() == 0 && reduced.denominator() == 1)
        } else {
            TestResult::from_bool(gcd(reduced.numerator(), reduced.denominator()) == 1)
        }
    }

    fn equal_under_scaling(numerator: i16, denominator: i16, factor: i16) -> TestResult {
        if factor == 0 {
            return TestResult::discard();
        }
        let Some(x) = rational(numerator, denominator) else { return TestResult::discard() };

        let factor = i64::from(factor);
        let scaled = Rational64::new(i64::from(numerator) * factor, i64::from(denominator) * factor)
            .unwrap();
        TestResult::from_bool(x == scaled)
    }

    fn zero_denominator_fails(numerator: i64) -> bool {
        Rational64::new(numerator, 0).is_err()
    }

    fn add_sub_round_trip(a: (i16, i16), b: (i16, i16)) -> TestResult {
        let (Some(x), Some(y)) = (rational(a.0, a.1), rational(b.0, b.1)) else {
            return TestResult::discard()
        };

        TestResult::from_bool(x + y - y == x)
    }

    fn mul_div_round_trip(a: (i16, i16), b: (i16, i16)) -> TestResult {
        let (Some(x), Some(y)) = (rational(a.0, a.1), rational(b.0, b.1)) else {
            return TestResult::discard()
        };
        if y.is_zero() {
            return TestResult::discard();
        }

        TestResult::from_bool(x * y / y == x)
    }

    fn trichotomy(a: (i16, i16), b: (i16, i16)) -> TestResult {
        let (Some(x), Some(y)) = (rational(a.0, a.1), rational(b.0, b.1)) else {
            return TestResult::discard()
        };

        let holding = [x < y, x == y, x > y].into_iter().filter(|&holds| holds).count();
        TestResult::from_bool(holding == 1)
    }

    fn display_is_reduced(numerator: i16, denominator: i16, factor: i16) -> TestResult {
        if factor == 0 {
            return TestResult::discard();
        }
        let Some(x) = rational(numerator, denominator) else { return TestResult::discard() };

        let factor = i64::from(factor);
        let scaled = Rational64::new(i64::from(numerator) * factor, i64::from(denominator) * factor)
            .unwrap();
        TestResult::from_bool(x.to_string() == scaled.to_string())
    }
}

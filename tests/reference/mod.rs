//! # Agreement with `num-rational`
//!
//! `num_rational::Ratio` keeps its values in lowest terms with a signed numerator. After reducing,
//! results should describe the same number.
use std::cmp::Ordering;

use num_rational::Ratio;
use quickcheck::{quickcheck, TestResult};

use rationals::{Rational64, Sign};

fn both(numerator: i16, denominator: i16) -> Option<(Rational64, Ratio<i64>)> {
    if denominator == 0 {
        return None;
    }

    let (numerator, denominator) = (i64::from(numerator), i64::from(denominator));
    Some((Rational64::new(numerator, denominator).unwrap(), Ratio::new(numerator, denominator)))
}

fn same(value: Rational64, expected: Ratio<i64>) -> bool {
    let reduced = value.reduce();
    let numerator = reduced.numerator() as i64;
    let numerator = match reduced.sign() {
        Sign::Positive => numerator,
        Sign::Negative => -numerator,
    };

    numerator == *expected.numer() && reduced.denominator() as i64 == *expected.denom()
}

quickcheck! {
    fn construction(numerator: i16, denominator: i16) -> TestResult {
        let Some((x, expected)) = both(numerator, denominator) else { return TestResult::discard() };

        TestResult::from_bool(same(x, expected))
    }

    fn arithmetic(a: (i16, i16), b: (i16, i16)) -> TestResult {
        let (Some((x, x_expected)), Some((y, y_expected))) = (both(a.0, a.1), both(b.0, b.1)) else {
            return TestResult::discard()
        };

        let mut agree = same(x + y, x_expected + y_expected)
            && same(x - y, x_expected - y_expected)
            && same(x * y, x_expected * y_expected)
            && same(-x, -x_expected);
        if !y.is_zero() {
            agree = agree && same(x / y, x_expected / y_expected);
        }
        TestResult::from_bool(agree)
    }

    fn ordering(a: (i16, i16), b: (i16, i16)) -> TestResult {
        let (Some((x, x_expected)), Some((y, y_expected))) = (both(a.0, a.1), both(b.0, b.1)) else {
            return TestResult::discard()
        };

        TestResult::from_bool(x.cmp(&y) == x_expected.cmp(&y_expected))
    }

    fn to_float(numerator: i16, denominator: i16) -> TestResult {
        let Some((x, _)) = both(numerator, denominator) else { return TestResult::discard() };

        let expected = f64::from(numerator) / f64::from(denominator);
        TestResult::from_bool(x.to_f64() == expected)
    }
}

#[test]
fn ordering_matches_on_sorted_values() {
    let mut values = vec![(3, 4), (-1, 2), (5, -3), (0, 1), (7, 7), (2, 9)];
    values.sort_by(|&(a, b), &(c, d)| Ratio::new(a, b).cmp(&Ratio::new(c, d)));

    let ours = values.iter()
        .map(|&(numerator, denominator)| Rational64::new(numerator, denominator).unwrap())
        .collect::<Vec<_>>();
    assert!(ours.windows(2).all(|pair| pair[0].cmp(&pair[1]) != Ordering::Greater));
}

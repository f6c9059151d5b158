/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::Rational32::from_f64($value as f64).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational32::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::Rational64::from_f64($value as f64).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational64::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R128 {
    ($value:expr) => {
        $crate::Rational128::from_f64($value as f64).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational128::new($numer, $denom).unwrap()
    };
}

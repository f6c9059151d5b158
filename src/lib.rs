//! # Exact rational numbers
//!
//! A rational number is stored as a sign and two unsigned magnitudes, a numerator and a strictly
//! positive denominator. Values are not kept in lowest terms: arithmetic produces whatever the
//! common denominator algorithm gives, and `Rational::reduce` brings a value to lowest terms when
//! asked. Equality, ordering and hashing look at the reduced value.
//!
//! The magnitudes have a fixed width, see `Rational32`, `Rational64` and `Rational128`. Operators
//! panic on overflow, the `checked_*` methods return `None` instead.
#![warn(missing_docs)]

pub mod error;
pub mod rational;
pub mod traits;

pub use error::RationalError;
pub use rational::{Rational, Rational128, Rational32, Rational64};
pub use rational::sign::Sign;
pub use traits::{gcd, lcm, Magnitude};

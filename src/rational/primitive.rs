//! # Mixing with primitive integers
//!
//! Each width mixes with the signed integer of the same width. The integer is promoted with
//! `Rational::from_integer` before the operation.
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::rational::Rational;

macro_rules! impl_primitive_operator {
    ($magnitude:ident, $signed:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<$signed> for Rational<$magnitude> {
            type Output = Self;

            fn $method(self, rhs: $signed) -> Self::Output {
                $trait::$method(self, Self::from_integer(rhs))
            }
        }

        impl $trait<$signed> for &Rational<$magnitude> {
            type Output = Rational<$magnitude>;

            fn $method(self, rhs: $signed) -> Self::Output {
                $trait::$method(self, Rational::<$magnitude>::from_integer(rhs))
            }
        }

        impl $trait<Rational<$magnitude>> for $signed {
            type Output = Rational<$magnitude>;

            fn $method(self, rhs: Rational<$magnitude>) -> Self::Output {
                $trait::$method(Rational::<$magnitude>::from_integer(self), rhs)
            }
        }

        impl $trait<&Rational<$magnitude>> for $signed {
            type Output = Rational<$magnitude>;

            fn $method(self, rhs: &Rational<$magnitude>) -> Self::Output {
                $trait::$method(Rational::<$magnitude>::from_integer(self), rhs)
            }
        }

        impl $assign_trait<$signed> for Rational<$magnitude> {
            fn $assign_method(&mut self, rhs: $signed) {
                $assign_trait::$assign_method(self, Self::from_integer(rhs));
            }
        }
    }
}

macro_rules! impl_primitive {
    ($magnitude:ident, $signed:ident) => {
        impl From<$signed> for Rational<$magnitude> {
            fn from(value: $signed) -> Self {
                Self::from_integer(value)
            }
        }

        impl_primitive_operator!($magnitude, $signed, Add, add, AddAssign, add_assign);
        impl_primitive_operator!($magnitude, $signed, Sub, sub, SubAssign, sub_assign);
        impl_primitive_operator!($magnitude, $signed, Mul, mul, MulAssign, mul_assign);
        impl_primitive_operator!($magnitude, $signed, Div, div, DivAssign, div_assign);

        impl PartialEq<$signed> for Rational<$magnitude> {
            fn eq(&self, other: &$signed) -> bool {
                <Self as PartialEq>::eq(self, &Self::from_integer(*other))
            }
        }

        impl PartialEq<Rational<$magnitude>> for $signed {
            fn eq(&self, other: &Rational<$magnitude>) -> bool {
                Rational::<$magnitude>::from_integer(*self).eq(other)
            }
        }

        impl PartialOrd<$signed> for Rational<$magnitude> {
            fn partial_cmp(&self, other: &$signed) -> Option<Ordering> {
                Some(self.cmp(&Self::from_integer(*other)))
            }
        }

        impl PartialOrd<Rational<$magnitude>> for $signed {
            fn partial_cmp(&self, other: &Rational<$magnitude>) -> Option<Ordering> {
                Some(Rational::<$magnitude>::from_integer(*self).cmp(other))
            }
        }
    }
}
impl_primitive!(u32, i32);
impl_primitive!(u64, i64);
impl_primitive!(u128, i128);

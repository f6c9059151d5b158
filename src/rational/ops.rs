//! # Field operations
//!
//! The arithmetic itself lives in the `checked_*` methods. The operator traits wrap them and panic
//! when the result doesn't fit, with the messages of the primitive integers.
use num_traits::CheckedMul;

use crate::rational::Rational;
use crate::rational::sign::Sign;
use crate::traits::{lcm, Magnitude};

impl<M: Magnitude> Rational<M> {
    /// Sum of two values, `None` if it doesn't fit.
    ///
    /// The denominator of the result is the least common multiple of the two denominators.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.combine(rhs, Sign::Positive)
    }

    /// Difference of two values, `None` if it doesn't fit.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.combine(rhs, Sign::Negative)
    }

    /// Product of two values, `None` if it doesn't fit.
    ///
    /// Magnitudes are multiplied without reducing first.
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let numerator = CheckedMul::checked_mul(&self.numerator, &rhs.numerator)?;
        let denominator = CheckedMul::checked_mul(&self.denominator, &rhs.denominator)?;

        Some(Self::assemble(self.sign * rhs.sign, numerator, denominator))
    }

    /// Quotient of two values, `None` if it doesn't fit or if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.checked_mul(&rhs.reciprocal().ok()?)
    }

    /// Add or subtract over the least common multiple of the denominators.
    ///
    /// # Arguments
    ///
    /// * `rhs`: Value to add or subtract.
    /// * `operation`: `Positive` to add, `Negative` to subtract.
    fn combine(&self, rhs: &Self, operation: Sign) -> Option<Self> {
        let common = lcm(self.denominator, rhs.denominator)?;
        let left = self.numerator.checked_mul(&(common / self.denominator))?;
        let right = rhs.numerator.checked_mul(&(common / rhs.denominator))?;
        let right_sign = rhs.sign * operation;

        // Signed sum of the scaled numerators, in sign-magnitude form
        let (sign, numerator) = if self.sign == right_sign {
            (self.sign, left.checked_add(&right)?)
        } else if left >= right {
            (self.sign, left - right)
        } else {
            (right_sign, right - left)
        };

        Some(Self::assemble(sign, numerator, common))
    }
}

pub(super) fn add_or_panic<M: Magnitude>(left: &Rational<M>, right: &Rational<M>) -> Rational<M> {
    left.checked_add(right).unwrap_or_else(|| panic!("attempt to add with overflow"))
}

pub(super) fn sub_or_panic<M: Magnitude>(left: &Rational<M>, right: &Rational<M>) -> Rational<M> {
    left.checked_sub(right).unwrap_or_else(|| panic!("attempt to subtract with overflow"))
}

pub(super) fn mul_or_panic<M: Magnitude>(left: &Rational<M>, right: &Rational<M>) -> Rational<M> {
    left.checked_mul(right).unwrap_or_else(|| panic!("attempt to multiply with overflow"))
}

pub(super) fn div_or_panic<M: Magnitude>(left: &Rational<M>, right: &Rational<M>) -> Rational<M> {
    if right.is_zero() {
        panic!("attempt to divide by zero");
    }

    left.checked_div(right).unwrap_or_else(|| panic!("attempt to divide with overflow"))
}

/// Implement an operator and its assigning variant for all combinations of values and references.
macro_rules! impl_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $inner:path) => {
        impl<M: Magnitude> $trait for Rational<M> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $inner(&self, &rhs)
            }
        }

        impl<M: Magnitude> $trait<&Rational<M>> for Rational<M> {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                $inner(&self, rhs)
            }
        }

        impl<M: Magnitude> $trait<Rational<M>> for &Rational<M> {
            type Output = Rational<M>;

            fn $method(self, rhs: Rational<M>) -> Self::Output {
                $inner(self, &rhs)
            }
        }

        impl<M: Magnitude> $trait for &Rational<M> {
            type Output = Rational<M>;

            fn $method(self, rhs: Self) -> Self::Output {
                $inner(self, rhs)
            }
        }

        impl<M: Magnitude> $assign_trait for Rational<M> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = $inner(self, &rhs);
            }
        }

        impl<M: Magnitude> $assign_trait<&Rational<M>> for Rational<M> {
            fn $assign_method(&mut self, rhs: &Self) {
                *self = $inner(self, rhs);
            }
        }
    }
}

mod field {
    use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

    use crate::rational::Rational;
    use crate::rational::ops::{add_or_panic, div_or_panic, mul_or_panic, sub_or_panic};
    use crate::traits::Magnitude;

    impl_operator!(Add, add, AddAssign, add_assign, add_or_panic);
    impl_operator!(Sub, sub, SubAssign, sub_assign, sub_or_panic);
    impl_operator!(Mul, mul, MulAssign, mul_assign, mul_or_panic);
    impl_operator!(Div, div, DivAssign, div_assign, div_or_panic);
}

mod neg {
    use std::ops::Neg;

    use crate::rational::Rational;
    use crate::traits::Magnitude;

    impl<M: Magnitude> Neg for Rational<M> {
        type Output = Self;

        fn neg(self) -> Self::Output {
            Self::assemble(-self.sign, self.numerator, self.denominator)
        }
    }

    impl<M: Magnitude> Neg for &Rational<M> {
        type Output = Rational<M>;

        fn neg(self) -> Self::Output {
            Neg::neg(*self)
        }
    }
}

mod fold {
    use std::iter::{Product, Sum};

    use num_traits::{One, Zero};

    use crate::rational::Rational;
    use crate::traits::Magnitude;

    impl<M: Magnitude> Sum for Rational<M> {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<'a, M: Magnitude> Sum<&'a Rational<M>> for Rational<M> {
        fn sum<I: Iterator<Item=&'a Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<M: Magnitude> Product for Rational<M> {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }

    impl<'a, M: Magnitude> Product<&'a Rational<M>> for Rational<M> {
        fn product<I: Iterator<Item=&'a Self>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }
}

mod identities {
    use num_traits::{One, Zero};

    use crate::rational::Rational;
    use crate::rational::sign::Sign;
    use crate::traits::Magnitude;

    impl<M: Magnitude> Zero for Rational<M> {
        fn zero() -> Self {
            Self::assemble(Sign::Positive, M::zero(), M::one())
        }

        fn is_zero(&self) -> bool {
            Rational::is_zero(self)
        }
    }

    impl<M: Magnitude> One for Rational<M> {
        fn one() -> Self {
            Self::assemble(Sign::Positive, M::one(), M::one())
        }
    }
}

mod checked {
    use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};

    use crate::rational::Rational;
    use crate::traits::Magnitude;

    impl<M: Magnitude> CheckedAdd for Rational<M> {
        fn checked_add(&self, v: &Self) -> Option<Self> {
            Rational::checked_add(self, v)
        }
    }

    impl<M: Magnitude> CheckedSub for Rational<M> {
        fn checked_sub(&self, v: &Self) -> Option<Self> {
            Rational::checked_sub(self, v)
        }
    }

    impl<M: Magnitude> CheckedMul for Rational<M> {
        fn checked_mul(&self, v: &Self) -> Option<Self> {
            Rational::checked_mul(self, v)
        }
    }

    impl<M: Magnitude> CheckedDiv for Rational<M> {
        fn checked_div(&self, v: &Self) -> Option<Self> {
            Rational::checked_div(self, v)
        }
    }
}

//! # Arithmetic
//!
//! Every operation computes a raw numerator and denominator and passes them through
//! `Fraction::new`. Values with a zero denominator take the same path, there are no special cases
//! for them.
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

use num::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};
use num_traits::CheckedNeg;

use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::integer::SignedInteger;

impl<I: SignedInteger> Fraction<I> {
    /// `(a·d' + d·n') / (d·d')`
    fn plus(&self, rhs: &Self) -> Self {
        Self::new(
            self.numerator * rhs.denominator + self.denominator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }

    /// `(a·d' - d·n') / (d·d')`
    fn minus(&self, rhs: &Self) -> Self {
        Self::new(
            self.numerator * rhs.denominator - self.denominator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }

    /// `(a·n') / (d·d')`
    fn times(&self, rhs: &Self) -> Self {
        Self::new(self.numerator * rhs.numerator, self.denominator * rhs.denominator)
    }
}

macro_rules! define_binary {
    ($op:ident, $method:ident, $inner:ident) => {
        impl<I: SignedInteger> $op for Fraction<I> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Fraction::$inner(&self, &rhs)
            }
        }

        impl<I: SignedInteger> $op<&Fraction<I>> for Fraction<I> {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                Fraction::$inner(&self, rhs)
            }
        }

        impl<I: SignedInteger> $op<Fraction<I>> for &Fraction<I> {
            type Output = Fraction<I>;

            fn $method(self, rhs: Fraction<I>) -> Self::Output {
                Fraction::$inner(self, &rhs)
            }
        }

        impl<'a, I: SignedInteger> $op<&'a Fraction<I>> for &Fraction<I> {
            type Output = Fraction<I>;

            fn $method(self, rhs: &'a Fraction<I>) -> Self::Output {
                Fraction::$inner(self, rhs)
            }
        }
    }
}

define_binary!(Add, add, plus);
define_binary!(Sub, sub, minus);
define_binary!(Mul, mul, times);

impl<I: SignedInteger> Neg for Fraction<I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.numerator, self.denominator)
    }
}

impl<I: SignedInteger> Neg for &Fraction<I> {
    type Output = Fraction<I>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<I: SignedInteger> CheckedAdd for Fraction<I> {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let left = self.numerator.checked_mul(&rhs.denominator)?;
        let right = self.denominator.checked_mul(&rhs.numerator)?;
        let numerator = left.checked_add(&right)?;
        let denominator = self.denominator.checked_mul(&rhs.denominator)?;

        Some(Self::new(numerator, denominator))
    }
}

impl<I: SignedInteger> CheckedSub for Fraction<I> {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let left = self.numerator.checked_mul(&rhs.denominator)?;
        let right = self.denominator.checked_mul(&rhs.numerator)?;
        let numerator = left.checked_sub(&right)?;
        let denominator = self.denominator.checked_mul(&rhs.denominator)?;

        Some(Self::new(numerator, denominator))
    }
}

impl<I: SignedInteger> CheckedMul for Fraction<I> {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let numerator = self.numerator.checked_mul(&rhs.numerator)?;
        let denominator = self.denominator.checked_mul(&rhs.denominator)?;

        Some(Self::new(numerator, denominator))
    }
}

impl<I: SignedInteger> CheckedNeg for Fraction<I> {
    fn checked_neg(&self) -> Option<Self> {
        // `I::MIN` has no negation
        let numerator = I::zero().checked_sub(&self.numerator)?;

        Some(Self::new(numerator, self.denominator))
    }
}

impl<I: SignedInteger> Zero for Fraction<I> {
    fn zero() -> Self {
        Self::integer(I::zero())
    }

    /// Only true for finite zeros; `0/0` is not zero.
    fn is_zero(&self) -> bool {
        self.numerator.is_zero() && !self.denominator.is_zero()
    }
}

impl<I: SignedInteger> One for Fraction<I> {
    fn one() -> Self {
        Self::integer(I::one())
    }
}

impl<I: SignedInteger> Sum for Fraction<I> {
    fn sum<T: Iterator<Item = Self>>(iter: T) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, I: SignedInteger> Sum<&'a Fraction<I>> for Fraction<I> {
    fn sum<T: Iterator<Item = &'a Fraction<I>>>(iter: T) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<I: SignedInteger> Product for Fraction<I> {
    fn product<T: Iterator<Item = Self>>(iter: T) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<'a, I: SignedInteger> Product<&'a Fraction<I>> for Fraction<I> {
    fn product<T: Iterator<Item = &'a Fraction<I>>>(iter: T) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

//! # Fractions
//!
//! Exact rationals in canonical form: no common factor between numerator and denominator, and the
//! sign on the numerator. A zero denominator is allowed and collapses the numerator to `1`, `-1`
//! or `0`, so that `7/0` and `9999999/0` are the same value.
use log::trace;
use num::{NumCast, Zero};

use crate::data::number_types::integer::{gcd, SignedInteger};
use crate::data::number_types::nonzero::{NonzeroSign, NonzeroSigned};
use crate::error::{Error, Result};

mod cmp;
mod display;
mod macros;
mod ops;

/// Aliased type for the common widths.
pub type Fraction32 = Fraction<i32>;
/// Aliased type for the common widths.
pub type Fraction64 = Fraction<i64>;
/// Aliased type for the common widths.
pub type Fraction128 = Fraction<i128>;

/// A numerator and denominator pair in lowest terms.
///
/// Invariants:
///
/// * `denominator >= 0`
/// * if `denominator != 0`, the two have no common factor
/// * if `denominator == 0`, `numerator` is one of `-1`, `0` and `1`
///
/// Every rational value has exactly one representation, so the derived equality is the value
/// equality. Note that this differs from comparing cross-products: `1/0` and `-1/0` are not equal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Fraction<I> {
    numerator: I,
    denominator: I,
}

impl<I: SignedInteger> Fraction<I> {
    /// Create a new fraction in canonical form.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Any value, including zero and negative values.
    ///
    /// # Return value
    ///
    /// The reduced fraction. When `denominator` is zero, this is `1/0`, `-1/0` or `0/0` depending
    /// on the sign of `numerator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use proper_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(-20, -25), Fraction::new(4, 5));
    /// assert_eq!(Fraction::new(9999999, 0), Fraction::infinity());
    /// ```
    ///
    /// Components must be signed integers. Floating point values are rejected, also when whole:
    ///
    /// ```compile_fail
    /// use proper_fraction::Fraction;
    ///
    /// let _ = Fraction::new(1.0_f64, 2.0);
    /// ```
    ///
    /// Unsigned integers can't carry the sign and are rejected as well:
    ///
    /// ```compile_fail
    /// use proper_fraction::Fraction;
    ///
    /// let _ = Fraction::new(1_u32, 2);
    /// ```
    pub fn new(numerator: I, denominator: I) -> Self {
        if denominator.is_zero() {
            return Self::collapse(numerator);
        }

        let (numerator, denominator) = if denominator < I::zero() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        let divisor = gcd(numerator, denominator);
        debug_assert!(divisor > I::zero());

        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    /// Fraction with denominator `1`.
    pub fn integer(value: I) -> Self {
        Self { numerator: value, denominator: I::one() }
    }

    /// The value `1/0`.
    pub fn infinity() -> Self {
        Self { numerator: I::one(), denominator: I::zero() }
    }

    /// The value `-1/0`.
    pub fn neg_infinity() -> Self {
        Self { numerator: -I::one(), denominator: I::zero() }
    }

    /// The value `0/0`.
    pub fn indeterminate() -> Self {
        Self { numerator: I::zero(), denominator: I::zero() }
    }

    /// Fold a numerator over a zero denominator onto its sign.
    fn collapse(numerator: I) -> Self {
        let sentinel = match sign(numerator) {
            None => I::zero(),
            Some(sign) => sign.unit(),
        };

        if sentinel != numerator {
            trace!("Collapsed {}/0 to {}/0", numerator, sentinel);
        }

        Self { numerator: sentinel, denominator: I::zero() }
    }

    pub fn numerator(&self) -> I {
        self.numerator
    }

    /// Never negative.
    pub fn denominator(&self) -> I {
        self.denominator
    }

    /// Whether the denominator is not zero.
    pub fn is_finite(&self) -> bool {
        !self.denominator.is_zero()
    }

    /// Whether this is `1/0` or `-1/0`.
    pub fn is_infinite(&self) -> bool {
        self.denominator.is_zero() && !self.numerator.is_zero()
    }

    /// Whether this is `0/0`.
    pub fn is_indeterminate(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_zero()
    }

    /// Whether this is a finite value with denominator `1`.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Sign of the value, `None` when the numerator is zero.
    ///
    /// Also defined for the infinite values.
    pub fn sign(&self) -> Option<NonzeroSign> {
        sign(self.numerator)
    }

    /// Convert the components to another integer width.
    ///
    /// # Errors
    ///
    /// When the numerator or the denominator doesn't fit in `J`.
    pub fn try_cast<J: SignedInteger>(self) -> Result<Fraction<J>> {
        let numerator = <J as NumCast>::from(self.numerator);
        let denominator = <J as NumCast>::from(self.denominator);

        match (numerator, denominator) {
            // Same values, so still in canonical form
            (Some(numerator), Some(denominator)) => Ok(Fraction { numerator, denominator }),
            _ => Err(Error::OutOfRange {
                numerator: self.numerator.to_string(),
                denominator: self.denominator.to_string(),
                target: std::any::type_name::<J>(),
            }),
        }
    }
}

fn sign<I: SignedInteger>(value: I) -> Option<NonzeroSign> {
    if value.is_zero() {
        None
    } else {
        Some(NonzeroSigned::signum(&value))
    }
}

impl<I: SignedInteger> From<I> for Fraction<I> {
    fn from(value: I) -> Self {
        Self::integer(value)
    }
}

impl<I: SignedInteger> From<(I, I)> for Fraction<I> {
    fn from((numerator, denominator): (I, I)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl<I: SignedInteger> Default for Fraction<I> {
    fn default() -> Self {
        Self::zero()
    }
}

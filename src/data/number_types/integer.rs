//! # Integers
//!
//! The component types a fraction can be built from, and their nonzero signs.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num::{Integer, PrimInt, Signed};

use crate::data::number_types::nonzero::NonzeroSigned;

pub mod sign;

/// Primitive signed integer that can be the numerator and denominator of a fraction.
///
/// Only integer types qualify; floating point values, even whole ones, are rejected by this bound.
pub trait SignedInteger:
    PrimInt +
    Signed +
    Integer +
    NonzeroSigned +
    Hash +
    Debug +
    Display +
{
}

impl<T> SignedInteger for T
where
    T: PrimInt + Signed + Integer + NonzeroSigned + Hash + Debug + Display,
{
}

/// Greatest common divisor, never negative.
///
/// Is zero only when both arguments are zero.
pub fn gcd<I: SignedInteger>(left: I, right: I) -> I {
    Integer::gcd(&left, &right)
}

use std::ops::Neg;

use num::One;

/// A signed number that can have a nonzero value.
pub trait NonzeroSigned: Clone {
    /// Whether the value is positive or negative.
    ///
    /// Should only be called on values that are not zero.
    fn signum(&self) -> Sign;
}

/// Sign of a nonzero value.
///
/// Existing `Sign` types, such as the one in `num`, typically have a third value for the sign of
/// 0. A fraction with a zero numerator has no sign at all, so it is represented as the absence of
/// a `Sign` instead.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// `x > 0`
    Positive,
    /// `x < 0`
    Negative,
}

impl Sign {
    /// The unit value with this sign: `1` or `-1`.
    pub fn unit<T: One + Neg<Output = T>>(self) -> T {
        match self {
            Sign::Positive => T::one(),
            Sign::Negative => -T::one(),
        }
    }
}

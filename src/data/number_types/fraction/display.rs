use std::fmt;

use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::integer::SignedInteger;

/// Finite values that are whole render as a plain integer, e.g. `1500/60` as `25` and `0/7` as
/// `0`. Everything else renders as `numerator/denominator`, including `-1/0` and `0/0`.
impl<I: SignedInteger> fmt::Display for Fraction<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.denominator.is_zero() {
            if self.numerator.is_zero() {
                return write!(f, "0");
            }
            if self.numerator.is_multiple_of(&self.denominator) {
                return write!(f, "{}", self.numerator / self.denominator);
            }
        }

        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

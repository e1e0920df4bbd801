use std::cmp::Ordering;

use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::integer::SignedInteger;

/// Ordering by cross-multiplication, `a/d > n/e` iff `a·e > d·n`.
///
/// Both denominators are non-negative, so the products can be compared without sign correction.
/// The products are never formed: finite values are compared through their floor quotients and
/// remainders instead, which can't overflow.
///
/// The result agrees with the structural equality: identical pairs are `Equal`, and distinct
/// pairs whose cross-products tie are incomparable. That only happens when a zero denominator is
/// involved, for example `1/0` against `-1/0`, or `0/0` against anything else.
impl<I: SignedInteger> PartialOrd for Fraction<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }

        let ordering = match (self.denominator.is_zero(), other.denominator.is_zero()) {
            (false, false) => cmp_finite(
                self.numerator, self.denominator,
                other.numerator, other.denominator,
            ),
            // `a·e` against `0·n`, with `e > 0`
            (true, false) => self.numerator.cmp(&I::zero()),
            // `a·0` against `d·n`, with `d > 0`
            (false, true) => I::zero().cmp(&other.numerator),
            (true, true) => Ordering::Equal,
        };

        match ordering {
            Ordering::Equal => None,
            unequal => Some(unequal),
        }
    }
}

/// Compare `a/b` against `c/d` for positive `b` and `d`.
fn cmp_finite<I: SignedInteger>(a: I, b: I, c: I, d: I) -> Ordering {
    debug_assert!(b > I::zero() && d > I::zero());

    let (left_whole, left_rest) = a.div_mod_floor(&b);
    let (right_whole, right_rest) = c.div_mod_floor(&d);

    match left_whole.cmp(&right_whole) {
        Ordering::Equal => match (left_rest.is_zero(), right_rest.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // `r/b < s/d` iff `d/s < b/r`
            (false, false) => cmp_finite(d, right_rest, b, left_rest),
        },
        unequal => unequal,
    }
}

//! # Scenarios
//!
//! Exercises the public surface the way a caller sees it: construction, operators and rendering.
use itertools::iproduct;
use num::Zero;

use proper_fraction::{Fraction, Fraction128, Fraction32, Fraction64, Sign};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn f(numerator: i64, denominator: i64) -> Fraction64 {
    Fraction64::new(numerator, denominator)
}

#[test]
fn rendering() {
    init();

    assert_eq!(f(1500, 90).to_string(), "50/3");
    assert_eq!(f(1500, 60).to_string(), "25");
    assert_eq!(f(0, 0).to_string(), "0/0");
    assert_eq!(f(-1, 0).to_string(), "-1/0");
    assert_eq!(f(0, 5).to_string(), "0");
    assert_eq!(Fraction64::from(99).to_string(), "99");
    assert_eq!(format!("{} + {}", f(1, 2), f(-2, 4)), "1/2 + -1/2");
}

#[test]
fn arithmetic() {
    init();

    assert_eq!(f(3, 4), f(1, 12) + f(2, 3));
    assert_eq!(f(1, 0) + f(5, 6), f(1, 0));
    assert_eq!(f(0, 0) + f(5, 6), f(0, 0));
    assert_eq!(f(-7, 12), f(1, 12) - f(2, 3));
    assert_eq!(f(2, 36), f(1, 12) * f(2, 3));
    assert_eq!(f(-3, 4), -f(3, 4));
}

#[test]
fn comparison() {
    assert!(f(2, 3) > f(5, 12));
    assert!(!(f(5, 12) > f(2, 3)));
    assert_ne!(f(1, 0), f(-1, 0));
    assert_ne!(Fraction64::from(0), f(1, 0));
}

#[test]
fn lowest_terms_are_kept_through_arithmetic() {
    init();

    for (a, b, c, d) in iproduct!(-5..=5, -5..=5, -5..=5, -5..=5) {
        let (left, right) = (f(a, b), f(c, d));
        for result in vec![left + right, left - right, left * right, -left] {
            assert!(result.denominator() >= 0);
            if result.denominator() == 0 {
                assert!((-1..=1).contains(&result.numerator()));
            } else {
                assert_eq!(num::integer::gcd(result.numerator(), result.denominator()), 1);
            }
        }
    }
}

#[test]
fn widths_agree() {
    for (a, b, c, d) in iproduct!(-6..=6, -6..=6, -6..=6, -6..=6) {
        let narrow = Fraction32::new(a, b) + Fraction32::new(c, d);
        let wide = Fraction128::new(a as i128, b as i128) + Fraction128::new(c as i128, d as i128);
        assert_eq!(narrow.try_cast::<i128>(), Ok(wide));
        assert_eq!(narrow.to_string(), wide.to_string());
    }
}

#[test]
fn accumulate() {
    init();

    let harmonic: Fraction64 = (1..=10).map(|i| f(1, i)).sum();
    assert_eq!(harmonic, f(7381, 2520));
    assert_eq!(harmonic.sign(), Some(Sign::Positive));

    let telescoping: Fraction64 = (1..=9).map(|i| f(i, i + 1)).product();
    assert_eq!(telescoping, f(1, 10));

    assert!(Fraction::<i16>::zero().is_zero());
}

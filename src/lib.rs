//! # Proper fractions
//!
//! An exact rational value type that is kept in lowest terms at all times. The sign lives on the
//! numerator, the denominator is never negative, and a zero denominator is a value rather than a
//! fault: it collapses to one of `1/0`, `-1/0` or `0/0`.
//!
//! Because every value has exactly one representation, equality is structural.
//!
//! ```
//! use proper_fraction::Fraction64;
//!
//! let sum = Fraction64::new(1, 12) + Fraction64::new(2, 3);
//! assert_eq!(sum, Fraction64::new(3, 4));
//! assert_eq!(Fraction64::new(1500, 90).to_string(), "50/3");
//! ```
pub use data::number_types::fraction::{Fraction, Fraction128, Fraction32, Fraction64};
pub use data::number_types::integer::SignedInteger;
pub use data::number_types::nonzero::NonzeroSign as Sign;
pub use error::{Error, Result};

pub mod data;
pub mod error;

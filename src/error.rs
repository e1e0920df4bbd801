//! # Errors
//!
//! Construction and arithmetic never fail: zero denominators are values, and only integer types
//! are accepted as components. What remains are conversions between integer widths.
use std::error::Error as StdError;
use std::fmt;

/// Shorthand for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when working with fractions.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A component does not fit in the target integer type.
    OutOfRange {
        /// Rendered numerator of the source value.
        numerator: String,
        /// Rendered denominator of the source value.
        denominator: String,
        /// Name of the integer type that was converted to.
        target: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { numerator, denominator, target } => write!(
                f,
                "Fraction {}/{} can't be represented with {} components",
                numerator, denominator, target,
            ),
        }
    }
}

impl StdError for Error {}

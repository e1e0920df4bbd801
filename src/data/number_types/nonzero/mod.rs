//! # Nonzero values
//!
//! A fraction's sign is only meaningful when its numerator is not zero. The trait here lets the
//! fraction code ask for a two-valued sign once it has ruled out zero.
pub use sign::NonzeroSigned;
pub use sign::Sign as NonzeroSign;

pub mod sign;

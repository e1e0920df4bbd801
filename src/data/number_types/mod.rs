//! # Number types
//!
//! Fractions, and the integer traits they are built on.
pub mod fraction;
pub mod integer;
pub mod nonzero;

//! # cayley-integers
//!
//! Arbitrary precision integer and rational arithmetic for the cayley engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//! - Text parsing of `p` and `p/q` tokens
//!
//! Nothing in this crate ever converts to floating point.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::{ParseRationalError, Rational};

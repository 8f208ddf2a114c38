//! # cayley-rings
//!
//! Algebraic structures for the cayley engine.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`
//! - The rational field `Q`
//! - `ArithmeticError`, the failure type of exact scalar division
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod traits;

pub use rationals::Q;
pub use traits::{ArithmeticError, CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};

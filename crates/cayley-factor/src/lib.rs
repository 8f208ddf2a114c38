//! Polynomial factorization over the rationals for the cayley engine.
//!
//! This crate provides:
//! - **Rational roots**: simple roots modulo a small prime, Hensel-lifted
//!   and read back as fractions
//! - **Kronecker splitting**: interpolation-based search for higher-degree
//!   factors of root-free polynomials, bounded by [`FactorConfig`]
//! - **`factor`**: the full pipeline from a rational polynomial to monic
//!   irreducible factors with multiplicities
//!
//! Factor order is part of the contract: eigenvalues are reported in the
//! order their linear factors are discovered here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod hensel;
pub mod kronecker;
pub mod rational_roots;
pub mod univariate;

#[cfg(test)]
mod proptests;

pub use config::{FactorConfig, DEFAULT_MAX_COMBINATIONS};
pub use kronecker::{kronecker_split, KroneckerOutcome};
pub use rational_roots::{extract_rational_roots, rational_roots, RootSplit};
pub use univariate::{factor, Factorization, FactorizationDisplay, IrreducibleFactor};

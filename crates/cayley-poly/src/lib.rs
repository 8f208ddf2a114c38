//! # cayley-poly
//!
//! Univariate polynomial arithmetic for the cayley engine.
//!
//! This crate provides:
//! - `DensePoly<R>`, a dense polynomial that is itself a ring element, so
//!   matrices with polynomial entries (such as `A − xI`) are ordinary
//!   `DenseMatrix<DensePoly<Q>>` values
//! - Division with remainder and GCD over a field
//! - Yun squarefree decomposition
//! - Lagrange interpolation
//! - Integer-content helpers for rational polynomials

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod dense;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use algorithms::gcd::{poly_div_rem, poly_gcd};
pub use algorithms::interpolate::lagrange_interpolate;
pub use algorithms::squarefree::{squarefree_decomposition, SquarefreeDecomposition, SquarefreeFactor};
pub use dense::{DensePoly, PolyDisplay};

//! # cayley-linalg
//!
//! Exact dense linear algebra for the cayley engine.
//!
//! This crate provides:
//! - `DenseMatrix<R>` over any ring, with field elimination (RREF, rank,
//!   null space, inverse, determinant) when `R` is a field
//! - Bareiss fraction-free determinants over Euclidean domains, which is
//!   how characteristic polynomials are computed over `Q[x]`
//! - Exact Gram-Schmidt orthonormalization with surd-valued unit vectors
//!
//! Every operation that can fail on user-shaped input returns
//! [`LinalgError`]. Nothing is ever converted to floating point.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod error;
pub mod gram_schmidt;

pub use dense_matrix::DenseMatrix;
pub use error::{LinalgError, Result};
pub use gram_schmidt::{gram_schmidt, OrthonormalBasis, Surd, UnitVector};

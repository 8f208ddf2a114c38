//! Exact eigen-analysis of rational matrices.
//!
//! Every result is exact. Characteristic polynomials are computed over
//! `Q[x]` by fraction-free elimination, factored completely over Q, and
//! eigenvectors come from exact null spaces. Eigenvalues that are roots of
//! an irreducible factor of degree ≥ 2 are reported but never approximated.
//!
//! # Example
//!
//! ```
//! use cayley_eigen::{Operation, ComputationResult, EngineConfig};
//! use cayley_linalg::DenseMatrix;
//! use cayley_rings::rationals::Q;
//!
//! let a = DenseMatrix::from_rows(vec![
//!     vec![Q::from_integer(1), Q::from_integer(3)],
//!     vec![Q::from_integer(2), Q::from_integer(-4)],
//! ]);
//! let result = Operation::Eigen(a).execute(&EngineConfig::default()).unwrap();
//! if let ComputationResult::Eigenstructure(e) = result {
//!     assert_eq!(e.pairs[0].value, Q::from_integer(2));
//!     assert_eq!(e.pairs[1].value, Q::from_integer(-5));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cayley_hamilton;
pub mod charpoly;
pub mod config;
pub mod diagonalize;
pub mod eigen;
pub mod error;
pub mod jordan;
pub mod minpoly;
pub mod operation;
pub mod reconstruct;
pub mod result;

pub use cayley_hamilton::{verify_cayley_hamilton, CayleyHamiltonCheck};
pub use charpoly::{
    characteristic_polynomial, evaluate_at_matrix, factored_characteristic_polynomial, CharacteristicPolynomial,
};
pub use config::{EngineConfig, DEFAULT_MAX_MINPOLY_CANDIDATES};
pub use diagonalize::{diagonalization_from_eigenstructure, diagonalize, Diagonalization, DiagonalizationOutcome};
pub use eigen::{eigenstructure, EigenPair, Eigenstructure};
pub use error::{EngineError, Stage, StageContext};
pub use jordan::{jordan_form, jordan_from_eigenstructure, JordanBlock, JordanForm};
pub use minpoly::{minimal_polynomial, MinimalPolynomial};
pub use operation::Operation;
pub use reconstruct::{default_eigenpairs, reconstruct};
pub use result::ComputationResult;

#[cfg(test)]
mod proptests;

//! # Cayley
//!
//! Exact linear algebra over the rationals.
//!
//! Eigenvalues, eigenvectors, characteristic and minimal polynomials,
//! diagonalizations, Jordan forms, orthonormal bases and matrix
//! reconstructions, all computed without floating point.
//!
//! ## Crates
//!
//! - **integers**: arbitrary precision integers and rationals
//! - **rings**: the algebraic trait hierarchy and the field `Q`
//! - **poly**: dense univariate polynomials, gcd, squarefree parts
//! - **factor**: complete factorization over Q
//! - **linalg**: exact matrices, null spaces, Gram-Schmidt
//! - **eigen**: the engine operations
//!
//! ## Quick Start
//!
//! ```
//! use cayley::prelude::*;
//!
//! let a: DenseMatrix<Q> = DenseMatrix::from_rows(vec![
//!     vec![Q::from_integer(2), Q::from_integer(1)],
//!     vec![Q::from_integer(0), Q::from_integer(2)],
//! ]);
//! let m = minimal_polynomial(&a, &EngineConfig::default()).unwrap();
//! assert_eq!(m.polynomial.to_string(), "x^2 - 4x + 4");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cayley_eigen as eigen;
pub use cayley_factor as factor;
pub use cayley_integers as integers;
pub use cayley_linalg as linalg;
pub use cayley_poly as poly;
pub use cayley_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cayley_eigen::{
        characteristic_polynomial, diagonalize, eigenstructure, jordan_form, minimal_polynomial, reconstruct,
        verify_cayley_hamilton, ComputationResult, DiagonalizationOutcome, EngineConfig, EngineError, Operation,
        Stage,
    };
    pub use cayley_factor::{factor, Factorization, FactorConfig, IrreducibleFactor};
    pub use cayley_integers::{Integer, Rational};
    pub use cayley_linalg::{gram_schmidt, DenseMatrix, OrthonormalBasis, Surd, UnitVector};
    pub use cayley_poly::DensePoly;
    pub use cayley_rings::{Field, Ring, Q};
}

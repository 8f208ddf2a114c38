//! Typed results of engine operations.

use cayley_linalg::{DenseMatrix, OrthonormalBasis};
use cayley_rings::rationals::Q;

use crate::cayley_hamilton::CayleyHamiltonCheck;
use crate::charpoly::CharacteristicPolynomial;
use crate::diagonalize::DiagonalizationOutcome;
use crate::eigen::Eigenstructure;
use crate::jordan::JordanForm;
use crate::minpoly::MinimalPolynomial;

/// The payload of a successful [`Operation`](crate::Operation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputationResult {
    /// Eigenvalues, multiplicities and eigenvector bases.
    Eigenstructure(Eigenstructure),
    /// `P` and `D`, or the Jordan fallback with its reason.
    Diagonalization(DiagonalizationOutcome),
    /// `det(A − xI)` and its factorization.
    CharacteristicPolynomial(CharacteristicPolynomial),
    /// The minimal polynomial.
    MinimalPolynomial(MinimalPolynomial),
    /// `p(A) = 0`.
    CayleyHamilton(CayleyHamiltonCheck),
    /// Exact unit vectors.
    OrthonormalBasis(OrthonormalBasis),
    /// `P·D·P⁻¹`.
    ReconstructedMatrix(DenseMatrix<Q>),
    /// Jordan blocks, `J` and `P`.
    JordanForm(JordanForm),
}

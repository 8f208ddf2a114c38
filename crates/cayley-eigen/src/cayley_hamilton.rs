//! Cayley–Hamilton verification.

use cayley_linalg::DenseMatrix;
use cayley_poly::DensePoly;
use cayley_rings::rationals::Q;

use crate::charpoly::{characteristic_polynomial, evaluate_at_matrix};
use crate::error::{EngineError, Stage, StageContext};

/// A characteristic polynomial and its value at the matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CayleyHamiltonCheck {
    /// `det(A − xI)`.
    pub characteristic: DensePoly<Q>,
    /// `p(A)`, always the zero matrix on success.
    pub evaluated: DenseMatrix<Q>,
}

/// Evaluates the characteristic polynomial at `a` and checks that the
/// result vanishes.
///
/// # Errors
///
/// `NonSquareMatrix` for rectangular input; `Internal` if `p(A) ≠ 0`.
pub fn verify_cayley_hamilton(a: &DenseMatrix<Q>) -> Result<CayleyHamiltonCheck, EngineError> {
    let stage = Stage::CayleyHamilton;
    a.require_square().at(stage)?;

    let characteristic = characteristic_polynomial(a)?;
    let evaluated = evaluate_at_matrix(&characteristic, a).at(stage)?;
    if !evaluated.is_zero() {
        log::error!("p(A) is non-zero:\n{evaluated}");
        return Err(EngineError::internal(stage, "characteristic polynomial does not annihilate the matrix"));
    }

    Ok(CayleyHamiltonCheck {
        characteristic,
        evaluated,
    })
}

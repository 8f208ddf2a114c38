//! Characteristic polynomials and polynomial evaluation at a matrix.

use cayley_factor::{factor, Factorization};
use cayley_linalg::{DenseMatrix, LinalgError};
use cayley_poly::DensePoly;
use cayley_rings::rationals::Q;

use crate::config::EngineConfig;
use crate::error::{EngineError, Stage, StageContext};

/// A characteristic polynomial together with its factorization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacteristicPolynomial {
    /// `det(A − xI)`.
    pub polynomial: DensePoly<Q>,
    /// Its factorization over Q.
    pub factorization: Factorization,
}

/// Computes `det(A − xI)` by Bareiss elimination over `Q[x]`.
///
/// The leading coefficient is `(−1)ⁿ`.
///
/// # Errors
///
/// `NonSquareMatrix` for a rectangular matrix.
pub fn characteristic_polynomial(a: &DenseMatrix<Q>) -> Result<DensePoly<Q>, EngineError> {
    let stage = Stage::CharacteristicPolynomial;
    a.require_square().at(stage)?;

    let shifted = a
        .map(|c| DensePoly::constant(c.clone()))
        .shift_diagonal(&DensePoly::x())
        .at(stage)?;
    let p = shifted.bareiss_det().at(stage)?;

    log::debug!("characteristic polynomial of degree {}: {p}", p.degree());
    Ok(p)
}

/// Computes and factors the characteristic polynomial.
///
/// # Errors
///
/// `NonSquareMatrix` for a rectangular matrix.
pub fn factored_characteristic_polynomial(
    a: &DenseMatrix<Q>,
    config: &EngineConfig,
) -> Result<CharacteristicPolynomial, EngineError> {
    let polynomial = characteristic_polynomial(a)?;
    let factorization = factor(&polynomial, &config.factor).at(Stage::CharacteristicPolynomial)?;
    Ok(CharacteristicPolynomial {
        polynomial,
        factorization,
    })
}

/// Evaluates `p(A) = Σ cᵢ·Aⁱ` by Horner's rule.
///
/// # Errors
///
/// `NonSquare` for a rectangular matrix.
pub fn evaluate_at_matrix(p: &DensePoly<Q>, a: &DenseMatrix<Q>) -> Result<DenseMatrix<Q>, LinalgError> {
    a.require_square()?;
    let n = a.num_rows();
    let mut acc = DenseMatrix::zeros(n, n);

    for c in p.coeffs().iter().rev() {
        acc = acc.mm(a)?.try_add(&DenseMatrix::identity(n).scale(c))?;
    }

    Ok(acc)
}

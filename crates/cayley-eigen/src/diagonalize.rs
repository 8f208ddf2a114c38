//! Diagonalization with a Jordan fallback.

use cayley_linalg::DenseMatrix;
use cayley_rings::rationals::Q;

use crate::config::EngineConfig;
use crate::eigen::{eigenstructure, Eigenstructure};
use crate::error::{EngineError, Stage, StageContext};
use crate::jordan::{jordan_from_eigenstructure, JordanForm};

const STAGE: Stage = Stage::Diagonalization;

/// `A = P·D·P⁻¹` with `D` diagonal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagonalization {
    /// Eigenvector columns, grouped by eigenvalue in discovery order.
    pub p: DenseMatrix<Q>,
    /// Eigenvalues on the diagonal, repeated by multiplicity.
    pub d: DenseMatrix<Q>,
}

/// What [`diagonalize`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagonalizationOutcome {
    /// The matrix is diagonalizable.
    Diagonalizable(Diagonalization),
    /// The matrix is not diagonalizable; its Jordan form is given instead.
    Jordan {
        /// The `DiagonalizationFailure` explaining why.
        reason: EngineError,
        /// The Jordan decomposition.
        form: JordanForm,
    },
}

impl DiagonalizationOutcome {
    /// True for the diagonalizable case.
    #[must_use]
    pub fn is_diagonalizable(&self) -> bool {
        matches!(self, Self::Diagonalizable(_))
    }
}

/// Builds `P` and `D` for a diagonalizable eigenstructure and checks
/// `P·D·P⁻¹ = A` exactly.
///
/// # Errors
///
/// `UnsupportedExactRoot` for irrational eigenvalues,
/// `DiagonalizationFailure` if some eigenvalue is defective, and `Internal`
/// if the exact check fails.
pub fn diagonalization_from_eigenstructure(
    a: &DenseMatrix<Q>,
    eigen: &Eigenstructure,
) -> Result<Diagonalization, EngineError> {
    eigen.require_rational(STAGE)?;
    if let Some(pair) = eigen.first_defective() {
        return Err(EngineError::DiagonalizationFailure {
            stage: STAGE,
            reason: format!(
                "eigenvalue {} has geometric multiplicity {} but algebraic multiplicity {}",
                pair.value,
                pair.geometric_multiplicity(),
                pair.algebraic_multiplicity
            ),
        });
    }

    let columns: Vec<Vec<Q>> = eigen.pairs.iter().flat_map(|p| p.basis.iter().cloned()).collect();
    let diagonal: Vec<Q> = eigen
        .pairs
        .iter()
        .flat_map(|p| std::iter::repeat(p.value.clone()).take(p.basis.len()))
        .collect();

    if columns.len() != a.num_rows() {
        return Err(EngineError::internal(
            STAGE,
            format!("{} eigenvectors for a {}x{} matrix", columns.len(), a.num_rows(), a.num_cols()),
        ));
    }

    let p = DenseMatrix::from_cols(&columns).at(STAGE)?;
    let d = DenseMatrix::diagonal(&diagonal);
    let p_inv = p
        .inverse()
        .map_err(|_| EngineError::internal(STAGE, "eigenvector matrix is singular"))?;
    if p.mm(&d).at(STAGE)?.mm(&p_inv).at(STAGE)? != *a {
        return Err(EngineError::internal(STAGE, "P·D·P⁻¹ does not reproduce the matrix"));
    }

    Ok(Diagonalization { p, d })
}

/// Diagonalizes a square rational matrix, falling back to its Jordan form.
///
/// # Errors
///
/// `NonSquareMatrix` for rectangular input, `UnsupportedExactRoot` for
/// irrational eigenvalues, and the internal errors of the exact checks.
pub fn diagonalize(a: &DenseMatrix<Q>, config: &EngineConfig) -> Result<DiagonalizationOutcome, EngineError> {
    a.require_square().at(STAGE)?;
    let eigen = eigenstructure(a, config)?;

    match diagonalization_from_eigenstructure(a, &eigen) {
        Ok(diag) => Ok(DiagonalizationOutcome::Diagonalizable(diag)),
        Err(reason @ EngineError::DiagonalizationFailure { .. }) => {
            log::debug!("falling back to jordan form: {reason}");
            let form = jordan_from_eigenstructure(a, &eigen)?;
            Ok(DiagonalizationOutcome::Jordan { reason, form })
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jordan::JordanBlock;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn mat(rows: &[&[i64]]) -> DenseMatrix<Q> {
        DenseMatrix::from_rows(rows.iter().map(|r| r.iter().map(|&v| q(v)).collect()).collect())
    }

    #[test]
    fn test_diagonalizable() {
        let a = mat(&[&[1, 3], &[2, -4]]);
        let DiagonalizationOutcome::Diagonalizable(diag) = diagonalize(&a, &EngineConfig::default()).unwrap() else {
            panic!("expected a diagonalization");
        };
        assert_eq!(diag.d, mat(&[&[2, 0], &[0, -5]]));
        assert_eq!(
            diag.p,
            DenseMatrix::from_rows(vec![vec![q(3), Q::new(-1, 2)], vec![q(1), q(1)]])
        );
    }

    #[test]
    fn test_repeated_eigenvalue_diagonalizable() {
        let a = mat(&[&[2, 0, 0], &[0, 2, 0], &[0, 0, 3]]);
        let outcome = diagonalize(&a, &EngineConfig::default()).unwrap();
        let DiagonalizationOutcome::Diagonalizable(diag) = outcome else {
            panic!("expected a diagonalization");
        };
        assert_eq!(diag.d, a);
    }

    #[test]
    fn test_defective_falls_back_to_jordan() {
        let a = mat(&[&[2, 1], &[0, 2]]);
        let outcome = diagonalize(&a, &EngineConfig::default()).unwrap();
        assert!(!outcome.is_diagonalizable());
        let DiagonalizationOutcome::Jordan { reason, form } = outcome else {
            panic!("expected the jordan fallback");
        };
        assert!(matches!(reason, EngineError::DiagonalizationFailure { stage: Stage::Diagonalization, .. }));
        assert_eq!(form.blocks, vec![JordanBlock { eigenvalue: q(2), size: 2 }]);
    }

    #[test]
    fn test_irrational_eigenvalues() {
        let err = diagonalize(&mat(&[&[0, 2], &[1, 0]]), &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedExactRoot { stage: Stage::Diagonalization, .. }));
    }

    #[test]
    fn test_non_square() {
        let err = diagonalize(&mat(&[&[1, 2, 3], &[4, 5, 6]]), &EngineConfig::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::NonSquareMatrix {
                stage: Stage::Diagonalization,
                rows: 2,
                cols: 3
            }
        );
    }
}

//! Rebuilding a matrix from prescribed eigenpairs.

use cayley_linalg::DenseMatrix;
use cayley_rings::rationals::Q;

use crate::error::{EngineError, Stage, StageContext};

const STAGE: Stage = Stage::Reconstruction;

/// Returns `P·D·P⁻¹` where the columns of `P` are `vectors` and `D` has
/// `eigenvalues` on its diagonal.
///
/// # Errors
///
/// `DimensionMismatch` if the counts disagree or a vector has the wrong
/// length; `SingularMatrix` if the vectors are linearly dependent.
pub fn reconstruct(vectors: &[Vec<Q>], eigenvalues: &[Q]) -> Result<DenseMatrix<Q>, EngineError> {
    let n = vectors.len();
    if n == 0 {
        return Err(EngineError::DimensionMismatch {
            stage: STAGE,
            expected: 1,
            actual: 0,
        });
    }
    if eigenvalues.len() != n {
        return Err(EngineError::DimensionMismatch {
            stage: STAGE,
            expected: n,
            actual: eigenvalues.len(),
        });
    }
    if let Some(v) = vectors.iter().find(|v| v.len() != n) {
        return Err(EngineError::DimensionMismatch {
            stage: STAGE,
            expected: n,
            actual: v.len(),
        });
    }

    let p = DenseMatrix::from_cols(vectors).at(STAGE)?;
    let p_inv = p.inverse().at(STAGE)?;
    let d = DenseMatrix::diagonal(eigenvalues);
    let a = p.mm(&d).at(STAGE)?.mm(&p_inv).at(STAGE)?;
    log::debug!("reconstructed {n}x{n} matrix from eigenvalues {eigenvalues:?}");
    Ok(a)
}

/// The standard basis of `Q^size` and the eigenvalues `1..=size`.
#[must_use]
pub fn default_eigenpairs(size: usize) -> (Vec<Vec<Q>>, Vec<Q>) {
    let vectors = DenseMatrix::<Q>::identity(size).to_cols();
    let eigenvalues = (1..=size).map(|k| Q::from_integer(k as i64)).collect();
    (vectors, eigenvalues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_standard_basis() {
        let a = reconstruct(&[vec![q(1), q(0)], vec![q(0), q(1)]], &[q(1), q(2)]).unwrap();
        assert_eq!(a, DenseMatrix::from_rows(vec![vec![q(1), q(0)], vec![q(0), q(2)]]));
    }

    #[test]
    fn test_recovers_known_matrix() {
        // eigenpairs of [[1, 3], [2, -4]]
        let a = reconstruct(&[vec![q(3), q(1)], vec![Q::new(-1, 2), q(1)]], &[q(2), q(-5)]).unwrap();
        assert_eq!(a, DenseMatrix::from_rows(vec![vec![q(1), q(3)], vec![q(2), q(-4)]]));
    }

    #[test]
    fn test_dependent_vectors() {
        let err = reconstruct(&[vec![q(1), q(2)], vec![q(2), q(4)]], &[q(1), q(2)]).unwrap_err();
        assert_eq!(err, EngineError::SingularMatrix { stage: Stage::Reconstruction });
    }

    #[test]
    fn test_count_mismatch() {
        let err = reconstruct(&[vec![q(1), q(0)], vec![q(0), q(1)]], &[q(1)]).unwrap_err();
        assert_eq!(
            err,
            EngineError::DimensionMismatch {
                stage: Stage::Reconstruction,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_short_vector() {
        let err = reconstruct(&[vec![q(1), q(0)], vec![q(0)]], &[q(1), q(2)]).unwrap_err();
        assert!(matches!(err, EngineError::DimensionMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn test_defaults() {
        let (vectors, eigenvalues) = default_eigenpairs(3);
        assert_eq!(vectors[1], vec![q(0), q(1), q(0)]);
        assert_eq!(eigenvalues, vec![q(1), q(2), q(3)]);
        let a = reconstruct(&vectors, &eigenvalues).unwrap();
        assert_eq!(a, DenseMatrix::diagonal(&eigenvalues));
    }
}

//! Eigenvalues and eigenvector bases.

use std::fmt;

use cayley_factor::{Factorization, IrreducibleFactor};
use cayley_linalg::DenseMatrix;
use cayley_poly::DensePoly;
use cayley_rings::rationals::Q;

use crate::charpoly::factored_characteristic_polynomial;
use crate::config::EngineConfig;
use crate::error::{EngineError, Stage, StageContext};

/// A rational eigenvalue with its multiplicities and eigenvectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EigenPair {
    /// The eigenvalue.
    pub value: Q,
    /// Exponent of `x − value` in the characteristic polynomial.
    pub algebraic_multiplicity: u32,
    /// Basis of `null(A − value·I)`.
    pub basis: Vec<Vec<Q>>,
}

impl EigenPair {
    /// Dimension of the eigenspace.
    #[must_use]
    pub fn geometric_multiplicity(&self) -> usize {
        self.basis.len()
    }

    /// True if the eigenspace is smaller than the algebraic multiplicity.
    #[must_use]
    pub fn is_defective(&self) -> bool {
        self.geometric_multiplicity() < self.algebraic_multiplicity as usize
    }
}

/// Everything known about the spectrum of a square rational matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eigenstructure {
    /// `det(A − xI)`.
    pub characteristic: DensePoly<Q>,
    /// Its factorization; eigenvalues follow its factor order.
    pub factorization: Factorization,
    /// Rational eigenvalues in discovery order.
    pub pairs: Vec<EigenPair>,
    /// Irreducible factors of degree ≥ 2, whose roots are not rational.
    pub unsupported: Vec<IrreducibleFactor>,
}

impl Eigenstructure {
    /// True if every eigenvalue is rational and none is defective.
    #[must_use]
    pub fn is_diagonalizable(&self) -> bool {
        self.unsupported.is_empty() && self.pairs.iter().all(|p| !p.is_defective())
    }

    /// Fails with `UnsupportedExactRoot` if any eigenvalue is irrational.
    ///
    /// # Errors
    ///
    /// `UnsupportedExactRoot` naming the first offending factor.
    pub fn require_rational(&self, stage: Stage) -> Result<(), EngineError> {
        match self.unsupported.first() {
            Some(f) => Err(EngineError::UnsupportedExactRoot {
                stage,
                factor: f.factor.display_in("λ").to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Returns the first defective eigenvalue, if any.
    #[must_use]
    pub fn first_defective(&self) -> Option<&EigenPair> {
        self.pairs.iter().find(|p| p.is_defective())
    }
}

impl fmt::Display for EigenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "λ = {} (algebraic {}, geometric {})",
            self.value,
            self.algebraic_multiplicity,
            self.geometric_multiplicity()
        )
    }
}

/// Computes the eigenstructure of a square rational matrix.
///
/// # Errors
///
/// `NonSquareMatrix` for a rectangular matrix. Irrational eigenvalues are
/// not an error here; they are listed in `unsupported`.
pub fn eigenstructure(a: &DenseMatrix<Q>, config: &EngineConfig) -> Result<Eigenstructure, EngineError> {
    let stage = Stage::Eigenvectors;
    a.require_square().at(stage)?;

    let characteristic = factored_characteristic_polynomial(a, config)?;
    let factorization = characteristic.factorization;

    let mut pairs = Vec::new();
    for (value, algebraic_multiplicity) in factorization.roots() {
        let basis = a.shift_diagonal(&value).at(stage)?.null_space().at(stage)?;
        log::debug!(
            "eigenvalue {value}: algebraic {algebraic_multiplicity}, geometric {}",
            basis.len()
        );
        if basis.is_empty() {
            return Err(EngineError::internal(
                stage,
                format!("eigenvalue {value} has a trivial eigenspace"),
            ));
        }
        pairs.push(EigenPair {
            value,
            algebraic_multiplicity,
            basis,
        });
    }

    let unsupported: Vec<IrreducibleFactor> = factorization.nonlinear().cloned().collect();
    if !unsupported.is_empty() {
        log::debug!("{} irreducible factor(s) without rational roots", unsupported.len());
    }

    Ok(Eigenstructure {
        characteristic: characteristic.polynomial,
        factorization,
        pairs,
        unsupported,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn mat(rows: &[&[i64]]) -> DenseMatrix<Q> {
        DenseMatrix::from_rows(rows.iter().map(|r| r.iter().map(|&v| q(v)).collect()).collect())
    }

    #[test]
    fn test_distinct_eigenvalues_in_discovery_order() {
        let e = eigenstructure(&mat(&[&[1, 3], &[2, -4]]), &EngineConfig::default()).unwrap();
        let values: Vec<Q> = e.pairs.iter().map(|p| p.value.clone()).collect();
        assert_eq!(values, vec![q(2), q(-5)]);
        assert!(e.pairs.iter().all(|p| p.algebraic_multiplicity == 1));
        assert_eq!(e.pairs[0].basis, vec![vec![q(3), q(1)]]);
        assert_eq!(e.pairs[1].basis, vec![vec![Q::new(-1, 2), q(1)]]);
        assert!(e.is_diagonalizable());
    }

    #[test]
    fn test_defective_eigenvalue() {
        let e = eigenstructure(&mat(&[&[2, 1], &[0, 2]]), &EngineConfig::default()).unwrap();
        assert_eq!(e.pairs.len(), 1);
        assert_eq!(e.pairs[0].value, q(2));
        assert_eq!(e.pairs[0].algebraic_multiplicity, 2);
        assert_eq!(e.pairs[0].geometric_multiplicity(), 1);
        assert!(!e.is_diagonalizable());
        assert_eq!(e.first_defective().map(|p| p.value.clone()), Some(q(2)));
    }

    #[test]
    fn test_irrational_eigenvalues_reported() {
        // x^2 - 2
        let e = eigenstructure(&mat(&[&[0, 2], &[1, 0]]), &EngineConfig::default()).unwrap();
        assert!(e.pairs.is_empty());
        assert_eq!(e.unsupported.len(), 1);
        let err = e.require_rational(Stage::Diagonalization).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnsupportedExactRoot {
                stage: Stage::Diagonalization,
                factor: "λ^2 - 2".to_string()
            }
        );
    }

    #[test]
    fn test_non_square() {
        let err = eigenstructure(&mat(&[&[1, 2, 3], &[4, 5, 6]]), &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::NonSquareMatrix { rows: 2, cols: 3, .. }));
    }

    #[test]
    fn test_nineteen_digit_entry() {
        let n: Q = "1000000000000000003".parse().unwrap();
        let e = eigenstructure(&DenseMatrix::from_rows(vec![vec![n.clone()]]), &EngineConfig::default()).unwrap();
        assert_eq!(e.pairs.len(), 1);
        assert_eq!(e.pairs[0].value, n);
        assert_eq!(e.pairs[0].basis, vec![vec![q(1)]]);
    }

    #[test]
    fn test_large_prime_diagonal() {
        let e = eigenstructure(&mat(&[&[99991, 0, 0], &[0, 99989, 0], &[0, 0, 99971]]), &EngineConfig::default()).unwrap();
        let values: Vec<Q> = e.pairs.iter().map(|p| p.value.clone()).collect();
        assert_eq!(values, vec![q(99971), q(99989), q(99991)]);
    }

    #[test]
    fn test_large_triangular_entries() {
        let big = |s: &str| s.parse::<Q>().unwrap();
        let a = DenseMatrix::from_rows(vec![
            vec![big("1000000000000000003"), big("7"), big("-5")],
            vec![q(0), big("-999999999999999989/7"), big("123456789012345678")],
            vec![q(0), q(0), big("2")],
        ]);
        let e = eigenstructure(&a, &EngineConfig::default()).unwrap();
        let values: Vec<Q> = e.pairs.iter().map(|p| p.value.clone()).collect();
        assert_eq!(
            values,
            vec![big("2"), big("-999999999999999989/7"), big("1000000000000000003")]
        );
        assert!(e.is_diagonalizable());
    }

    #[test]
    fn test_display() {
        let e = eigenstructure(&mat(&[&[2, 1], &[0, 2]]), &EngineConfig::default()).unwrap();
        assert_eq!(e.pairs[0].to_string(), "λ = 2 (algebraic 2, geometric 1)");
    }
}

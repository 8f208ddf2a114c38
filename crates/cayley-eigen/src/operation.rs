//! Operation dispatch.

use cayley_linalg::{gram_schmidt, DenseMatrix};
use cayley_rings::rationals::Q;

use crate::cayley_hamilton::verify_cayley_hamilton;
use crate::charpoly::factored_characteristic_polynomial;
use crate::config::EngineConfig;
use crate::diagonalize::diagonalize;
use crate::eigen::eigenstructure;
use crate::error::{EngineError, Stage, StageContext};
use crate::jordan::jordan_form;
use crate::minpoly::minimal_polynomial;
use crate::reconstruct::reconstruct;
use crate::result::ComputationResult;

/// A request to the engine with its exact inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Eigenvalues and eigenvectors.
    Eigen(DenseMatrix<Q>),
    /// `P·D·P⁻¹`, with the Jordan form as fallback.
    Diagonalize(DenseMatrix<Q>),
    /// Factored `det(A − xI)`.
    CharacteristicPolynomial(DenseMatrix<Q>),
    /// Least-degree monic annihilator.
    MinimalPolynomial(DenseMatrix<Q>),
    /// Checks `p(A) = 0` for the characteristic polynomial.
    CayleyHamilton(DenseMatrix<Q>),
    /// Orthonormalizes the rows in order.
    GramSchmidt(Vec<Vec<Q>>),
    /// Builds a matrix from eigenvector columns and eigenvalues.
    Reconstruct {
        /// Eigenvectors, one per column of `P`.
        vectors: Vec<Vec<Q>>,
        /// Eigenvalues in the same order.
        eigenvalues: Vec<Q>,
    },
    /// Jordan canonical form.
    Jordan(DenseMatrix<Q>),
}

impl Operation {
    /// Short name used in logs and reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Eigen(_) => "eigen",
            Self::Diagonalize(_) => "diagonalize",
            Self::CharacteristicPolynomial(_) => "char-poly",
            Self::MinimalPolynomial(_) => "min-poly",
            Self::CayleyHamilton(_) => "cayley-hamilton",
            Self::GramSchmidt(_) => "gram-schmidt",
            Self::Reconstruct { .. } => "reconstruct",
            Self::Jordan(_) => "jordan",
        }
    }

    /// Runs the operation.
    ///
    /// # Errors
    ///
    /// Whatever the underlying computation reports, tagged with its stage.
    pub fn execute(&self, config: &EngineConfig) -> Result<ComputationResult, EngineError> {
        log::info!("running {}", self.name());
        let result = match self {
            Self::Eigen(a) => ComputationResult::Eigenstructure(eigenstructure(a, config)?),
            Self::Diagonalize(a) => ComputationResult::Diagonalization(diagonalize(a, config)?),
            Self::CharacteristicPolynomial(a) => {
                ComputationResult::CharacteristicPolynomial(factored_characteristic_polynomial(a, config)?)
            }
            Self::MinimalPolynomial(a) => ComputationResult::MinimalPolynomial(minimal_polynomial(a, config)?),
            Self::CayleyHamilton(a) => ComputationResult::CayleyHamilton(verify_cayley_hamilton(a)?),
            Self::GramSchmidt(vectors) => {
                ComputationResult::OrthonormalBasis(gram_schmidt(vectors).at(Stage::GramSchmidt)?)
            }
            Self::Reconstruct { vectors, eigenvalues } => {
                ComputationResult::ReconstructedMatrix(reconstruct(vectors, eigenvalues)?)
            }
            Self::Jordan(a) => ComputationResult::JordanForm(jordan_form(a, config)?),
        };
        Ok(result)
    }
}

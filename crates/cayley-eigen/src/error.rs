//! Engine error taxonomy.
//!
//! Lower layers fail with [`LinalgError`] or [`ArithmeticError`]; the
//! engine converts those into [`EngineError`] and records the stage that
//! was running.

use std::fmt;

use cayley_linalg::LinalgError;
use cayley_rings::ArithmeticError;
use thiserror::Error;

/// The part of the engine an error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Turning text into exact values.
    Parse,
    /// Building `det(A − xI)`.
    CharacteristicPolynomial,
    /// Eigenvalues and eigenvector bases.
    Eigenvectors,
    /// `P·D·P⁻¹` construction.
    Diagonalization,
    /// Jordan chains and `P·J·P⁻¹`.
    JordanForm,
    /// Minimal polynomial candidate search.
    MinimalPolynomial,
    /// `p(A) = 0` check.
    CayleyHamilton,
    /// Orthonormalization of the input rows.
    GramSchmidt,
    /// `A = P·D·P⁻¹` from user eigenpairs.
    Reconstruction,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parse => "parse",
            Self::CharacteristicPolynomial => "characteristic polynomial",
            Self::Eigenvectors => "eigenvectors",
            Self::Diagonalization => "diagonalization",
            Self::JordanForm => "jordan form",
            Self::MinimalPolynomial => "minimal polynomial",
            Self::CayleyHamilton => "cayley-hamilton",
            Self::GramSchmidt => "gram-schmidt",
            Self::Reconstruction => "reconstruction",
        };
        f.write_str(name)
    }
}

/// Everything that can go wrong in an engine operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed matrix or vector text.
    #[error("line {line}, column {column}: {message}")]
    Parse {
        /// 1-based line of the offending token.
        line: usize,
        /// 1-based column of the offending token.
        column: usize,
        /// What was wrong.
        message: String,
    },

    /// A square-only operation received a rectangular matrix.
    #[error("{stage}: expected a square matrix, got {rows}x{cols}")]
    NonSquareMatrix {
        /// Failing stage.
        stage: Stage,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A matrix that must be inverted has determinant zero.
    #[error("{stage}: matrix is singular")]
    SingularMatrix {
        /// Failing stage.
        stage: Stage,
    },

    /// Some eigenvalue has fewer independent eigenvectors than its
    /// multiplicity.
    #[error("{stage}: not diagonalizable: {reason}")]
    DiagonalizationFailure {
        /// Failing stage.
        stage: Stage,
        /// Which eigenvalue is defective.
        reason: String,
    },

    /// Jordan chains did not account for every multiplicity.
    #[error("{stage}: jordan chain construction failed: {reason}")]
    JordanConstructionFailure {
        /// Failing stage.
        stage: Stage,
        /// What did not add up.
        reason: String,
    },

    /// An input vector lies in the span of earlier ones.
    #[error("{stage}: vector {} is linearly dependent on the preceding vectors", .index + 1)]
    LinearlyDependentInput {
        /// Failing stage.
        stage: Stage,
        /// Zero-based index of the dependent vector.
        index: usize,
    },

    /// An eigenvalue is a root of an irreducible factor of degree ≥ 2.
    #[error("{stage}: eigenvalues include the irrational roots of {factor}")]
    UnsupportedExactRoot {
        /// Failing stage.
        stage: Stage,
        /// The irreducible factor, displayed.
        factor: String,
    },

    /// A bounded search would exceed its configured limit.
    #[error("{stage}: search needs {candidates} candidates, limit is {limit}")]
    SearchExhausted {
        /// Failing stage.
        stage: Stage,
        /// Size of the search space.
        candidates: usize,
        /// The configured limit.
        limit: usize,
    },

    /// Factorization stopped at its combination cap, so a factor of the
    /// characteristic polynomial may still split.
    #[error("{stage}: factorization stopped at the limit of {limit} combinations, a factor may still split")]
    IncompleteFactorization {
        /// Failing stage.
        stage: Stage,
        /// The configured combination cap.
        limit: usize,
    },

    /// An algorithm divided by an exact zero.
    #[error("{stage}: division by zero")]
    DivisionByZero {
        /// Failing stage.
        stage: Stage,
    },

    /// Operand shapes disagree.
    #[error("{stage}: dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Failing stage.
        stage: Stage,
        /// The size that was needed.
        expected: usize,
        /// The size that was given.
        actual: usize,
    },

    /// A postcondition failed; this is a defect in the engine.
    #[error("{stage}: internal error: {message}")]
    Internal {
        /// Failing stage.
        stage: Stage,
        /// The violated postcondition.
        message: String,
    },
}

impl EngineError {
    /// The stage the error was raised in.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Parse { .. } => Stage::Parse,
            Self::NonSquareMatrix { stage, .. }
            | Self::SingularMatrix { stage }
            | Self::DiagonalizationFailure { stage, .. }
            | Self::JordanConstructionFailure { stage, .. }
            | Self::LinearlyDependentInput { stage, .. }
            | Self::UnsupportedExactRoot { stage, .. }
            | Self::SearchExhausted { stage, .. }
            | Self::IncompleteFactorization { stage, .. }
            | Self::DivisionByZero { stage }
            | Self::DimensionMismatch { stage, .. }
            | Self::Internal { stage, .. } => *stage,
        }
    }

    /// True for implementation defects, false for problems the user can fix
    /// by changing the input or the limits.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::JordanConstructionFailure { .. } | Self::Internal { .. } | Self::DivisionByZero { .. }
        )
    }

    /// Process exit code: 1 for user errors, 2 for internal ones.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_internal() {
            2
        } else {
            1
        }
    }

    pub(crate) fn internal(stage: Stage, message: impl Into<String>) -> Self {
        Self::Internal {
            stage,
            message: message.into(),
        }
    }

    /// Converts a matrix error raised during `stage`.
    #[must_use]
    pub fn from_linalg(err: LinalgError, stage: Stage) -> Self {
        match err {
            LinalgError::NonSquare { rows, cols } => Self::NonSquareMatrix { stage, rows, cols },
            LinalgError::Singular => Self::SingularMatrix { stage },
            LinalgError::DimensionMismatch { expected, actual } => {
                Self::DimensionMismatch { stage, expected, actual }
            }
            LinalgError::RaggedRows { len, expected, .. } => Self::DimensionMismatch {
                stage,
                expected,
                actual: len,
            },
            LinalgError::Empty => Self::DimensionMismatch {
                stage,
                expected: 1,
                actual: 0,
            },
            LinalgError::LinearlyDependent { index } => Self::LinearlyDependentInput { stage, index },
            LinalgError::Arithmetic(e) => Self::from_arithmetic(e, stage),
        }
    }

    /// Converts a scalar arithmetic error raised during `stage`.
    #[must_use]
    pub fn from_arithmetic(err: ArithmeticError, stage: Stage) -> Self {
        match err {
            ArithmeticError::DivisionByZero => Self::DivisionByZero { stage },
            ArithmeticError::InexactDivision => Self::internal(stage, "inexact division"),
        }
    }
}

/// Attaches a stage to lower-layer errors.
pub trait StageContext<T> {
    /// Maps the error into an [`EngineError`] for `stage`.
    ///
    /// # Errors
    ///
    /// Returns the converted error if `self` is `Err`.
    fn at(self, stage: Stage) -> Result<T, EngineError>;
}

impl<T> StageContext<T> for Result<T, LinalgError> {
    fn at(self, stage: Stage) -> Result<T, EngineError> {
        self.map_err(|e| EngineError::from_linalg(e, stage))
    }
}

impl<T> StageContext<T> for Result<T, ArithmeticError> {
    fn at(self, stage: Stage) -> Result<T, EngineError> {
        self.map_err(|e| EngineError::from_arithmetic(e, stage))
    }
}

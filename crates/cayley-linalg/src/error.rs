//! Errors raised by matrix operations.

use cayley_rings::ArithmeticError;
use thiserror::Error;

/// Failures of exact matrix operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A square matrix was required.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NonSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// The matrix has determinant exactly zero.
    #[error("matrix is singular")]
    Singular,

    /// Operand shapes do not agree.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The size the operation needed.
        expected: usize,
        /// The size it was given.
        actual: usize,
    },

    /// A row has a different length than the first row.
    #[error("row {row} has {len} entries, expected {expected}")]
    RaggedRows {
        /// Zero-based index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// No rows, or rows with no entries.
    #[error("matrix has no entries")]
    Empty,

    /// A vector lies in the span of the ones before it.
    #[error("vector {index} is linearly dependent on the preceding vectors")]
    LinearlyDependent {
        /// Zero-based index of the dependent vector.
        index: usize,
    },

    /// Scalar arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Result alias for matrix operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

//! The per-invocation context.

use cayley::eigen::{default_eigenpairs, EngineConfig, EngineError, Operation, Stage};
use clap::ValueEnum;

use crate::input::{parse_matrix, parse_vector};
use crate::render::Report;

/// Matrix used when none is supplied.
pub const DEFAULT_MATRIX: &str = "1 3\n2 -4";

/// How reports are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented sections for terminals.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Eigenpairs for `reconstruct`, as raw text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconstructInput {
    /// Matrix dimension.
    pub size: usize,
    /// One entry per eigenvector; empty means the standard basis.
    pub vectors: Vec<String>,
    /// Whitespace-separated eigenvalues; `None` means `1..=size`.
    pub eigenvalues: Option<String>,
}

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// Eigenvalues and eigenvectors of the session matrix.
    Eigen,
    /// Diagonalize, or give the Jordan form.
    Diagonalize,
    /// Factored characteristic polynomial.
    CharacteristicPolynomial,
    /// Minimal polynomial.
    MinimalPolynomial,
    /// Verify `p(A) = 0`.
    CayleyHamilton,
    /// Orthonormalize the rows of the session matrix.
    GramSchmidt,
    /// Build a matrix from eigenpairs.
    Reconstruct(ReconstructInput),
    /// Jordan canonical form.
    Jordan,
}

/// Matrix text, output format and engine limits for one run.
#[derive(Clone, Debug)]
pub struct Session {
    matrix_text: String,
    format: OutputFormat,
    config: EngineConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Session {
    /// A session on the default matrix with text output.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            matrix_text: DEFAULT_MATRIX.to_string(),
            format: OutputFormat::Text,
            config,
        }
    }

    /// Replaces the matrix text.
    #[must_use]
    pub fn with_matrix_text(mut self, text: impl Into<String>) -> Self {
        self.matrix_text = text.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// The engine limits in effect.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses the inputs a task needs into an [`Operation`].
    ///
    /// # Errors
    ///
    /// `Parse` for malformed text; `DimensionMismatch` when the number of
    /// eigenvectors differs from the requested size.
    pub fn operation(&self, task: &Task) -> Result<Operation, EngineError> {
        let op = match task {
            Task::Eigen => Operation::Eigen(parse_matrix(&self.matrix_text)?),
            Task::Diagonalize => Operation::Diagonalize(parse_matrix(&self.matrix_text)?),
            Task::CharacteristicPolynomial => Operation::CharacteristicPolynomial(parse_matrix(&self.matrix_text)?),
            Task::MinimalPolynomial => Operation::MinimalPolynomial(parse_matrix(&self.matrix_text)?),
            Task::CayleyHamilton => Operation::CayleyHamilton(parse_matrix(&self.matrix_text)?),
            Task::GramSchmidt => Operation::GramSchmidt(parse_matrix(&self.matrix_text)?.to_rows()),
            Task::Jordan => Operation::Jordan(parse_matrix(&self.matrix_text)?),
            Task::Reconstruct(input) => reconstruct_operation(input)?,
        };
        Ok(op)
    }

    /// Runs a task and collects its report.
    ///
    /// # Errors
    ///
    /// Any [`EngineError`] from parsing or computation.
    pub fn run(&self, task: &Task) -> Result<Report, EngineError> {
        let op = self.operation(task)?;
        let result = op.execute(&self.config)?;
        Ok(Report::new(op.name(), &result))
    }

    /// Formats a report in the session's output format.
    ///
    /// # Errors
    ///
    /// JSON serialization failures.
    pub fn render(&self, report: &Report) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(report.to_text()),
            OutputFormat::Json => report.to_json(),
        }
    }
}

fn reconstruct_operation(input: &ReconstructInput) -> Result<Operation, EngineError> {
    let (default_vectors, default_values) = default_eigenpairs(input.size);

    let vectors = if input.vectors.is_empty() {
        default_vectors
    } else {
        if input.vectors.len() != input.size {
            return Err(EngineError::DimensionMismatch {
                stage: Stage::Reconstruction,
                expected: input.size,
                actual: input.vectors.len(),
            });
        }
        input
            .vectors
            .iter()
            .enumerate()
            .map(|(i, text)| {
                parse_vector(text).map_err(|e| match e {
                    EngineError::Parse { column, message, .. } => EngineError::Parse {
                        line: i + 1,
                        column,
                        message: format!("eigenvector {}: {message}", i + 1),
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    let eigenvalues = match &input.eigenvalues {
        Some(text) => parse_vector(text)?,
        None => default_values,
    };

    Ok(Operation::Reconstruct { vectors, eigenvalues })
}

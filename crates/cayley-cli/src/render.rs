//! Human and JSON output.
//!
//! Every value is converted to its exact string form before rendering, so
//! both formats carry `p/q` rationals and `√d` surds verbatim.

use std::fmt::Write as _;

use cayley::eigen::{ComputationResult, DiagonalizationOutcome, JordanForm};
use cayley::factor::Factorization;
use cayley::linalg::DenseMatrix;
use cayley::rings::{Ring, Q};
use serde::Serialize;

/// Indeterminate used for characteristic and minimal polynomials.
pub const VAR: &str = "λ";

/// Output of one operation, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The operation name.
    pub operation: String,
    /// Titled parts of the answer, in display order.
    pub sections: Vec<Section>,
}

/// A titled list of lines and an optional matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading.
    pub title: String,
    /// Free-form lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    /// Matrix entries, row-major.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<String>>>,
}

impl Section {
    fn lines(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            matrix: None,
        }
    }

    fn line(title: impl Into<String>, line: impl Into<String>) -> Self {
        Self::lines(title, vec![line.into()])
    }

    fn matrix(title: impl Into<String>, m: &DenseMatrix<Q>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            matrix: Some(m.to_rows().iter().map(|r| r.iter().map(ToString::to_string).collect()).collect()),
        }
    }
}

fn vector(v: &[Q]) -> String {
    let parts: Vec<String> = v.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

fn jordan_sections(form: &JordanForm, sections: &mut Vec<Section>) {
    sections.push(Section::lines(
        "Jordan blocks",
        form.blocks.iter().map(ToString::to_string).collect(),
    ));
    sections.push(Section::matrix("J", &form.j));
    sections.push(Section::matrix("P", &form.p));
}

impl Report {
    /// Builds a report for a finished operation.
    #[must_use]
    pub fn new(operation: &str, result: &ComputationResult) -> Self {
        let mut sections = Vec::new();

        match result {
            ComputationResult::Eigenstructure(e) => {
                sections.push(Section::lines(
                    "Characteristic polynomial",
                    vec![
                        e.characteristic.display_in(VAR).to_string(),
                        e.factorization.display_in(VAR).to_string(),
                    ],
                ));
                for pair in &e.pairs {
                    let mut lines = vec![
                        format!("algebraic multiplicity {}", pair.algebraic_multiplicity),
                        format!("geometric multiplicity {}", pair.geometric_multiplicity()),
                    ];
                    lines.extend(pair.basis.iter().map(|v| format!("v = {}", vector(v))));
                    sections.push(Section::lines(format!("{VAR} = {}", pair.value), lines));
                }
                if !e.unsupported.is_empty() {
                    sections.push(Section::lines(
                        "Irrational eigenvalues",
                        e.unsupported
                            .iter()
                            .map(|f| format!("roots of {}", f.factor.display_in(VAR)))
                            .collect(),
                    ));
                }
            }
            ComputationResult::Diagonalization(DiagonalizationOutcome::Diagonalizable(d)) => {
                sections.push(Section::matrix("P", &d.p));
                sections.push(Section::matrix("D", &d.d));
            }
            ComputationResult::Diagonalization(DiagonalizationOutcome::Jordan { reason, form }) => {
                sections.push(Section::line("Not diagonalizable", reason.to_string()));
                jordan_sections(form, &mut sections);
            }
            ComputationResult::CharacteristicPolynomial(c) => {
                sections.push(Section::line(
                    "Characteristic polynomial",
                    c.polynomial.display_in(VAR).to_string(),
                ));
                sections.push(Section::line("Factored", c.factorization.display_in(VAR).to_string()));
                if !c.factorization.complete {
                    sections.push(Section::line(
                        "Note",
                        "factor search was capped; non-linear factors may be reducible",
                    ));
                }
            }
            ComputationResult::MinimalPolynomial(m) => {
                let factored = Factorization {
                    unit: Q::one(),
                    factors: m.factors.clone(),
                    complete: true,
                };
                sections.push(Section::line("Minimal polynomial", m.polynomial.display_in(VAR).to_string()));
                sections.push(Section::line("Factored", factored.display_in(VAR).to_string()));
            }
            ComputationResult::CayleyHamilton(check) => {
                sections.push(Section::line(
                    "Characteristic polynomial",
                    check.characteristic.display_in(VAR).to_string(),
                ));
                sections.push(Section::matrix("p(A)", &check.evaluated));
                sections.push(Section::line("Cayley-Hamilton", "p(A) = 0 holds"));
            }
            ComputationResult::OrthonormalBasis(basis) => {
                sections.push(Section::lines(
                    "Orthonormal basis",
                    basis
                        .vectors
                        .iter()
                        .enumerate()
                        .map(|(i, u)| format!("e{} = {u}", i + 1))
                        .collect(),
                ));
            }
            ComputationResult::ReconstructedMatrix(a) => {
                sections.push(Section::matrix("A", a));
            }
            ComputationResult::JordanForm(form) => jordan_sections(form, &mut sections),
        }

        Self {
            operation: operation.to_string(),
            sections,
        }
    }

    /// Plain text with right-aligned matrix columns.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", section.title);
            for line in &section.lines {
                let _ = writeln!(out, "  {line}");
            }
            if let Some(rows) = &section.matrix {
                write_matrix(&mut out, rows);
            }
        }
        out
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_matrix(out: &mut String, rows: &[Vec<String>]) {
    let cols = rows.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..cols)
        .map(|c| rows.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
        .collect();

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        let _ = writeln!(out, "  [ {} ]", cells.join("  "));
    }
}

//! Jordan canonical form from generalized eigenvector chains.
//!
//! For an eigenvalue `r` with algebraic multiplicity `m`, let `N = A − rI`
//! and `K_j = null(Nʲ)`. The kernels grow until `dim K_s = m`, and the
//! number of chains of length at least `j` is `dim K_j − dim K_{j−1}`.
//! Chain tops are chosen from level `s` downwards: a vector of `K_j` is a
//! new top when it is independent of `K_{j−1}` plus every vector already
//! placed at height `j` by a longer chain.

use std::fmt;

use cayley_linalg::DenseMatrix;
use cayley_rings::rationals::Q;

use crate::config::EngineConfig;
use crate::eigen::{eigenstructure, EigenPair, Eigenstructure};
use crate::error::{EngineError, Stage, StageContext};

const STAGE: Stage = Stage::JordanForm;

/// One Jordan block `J_size(eigenvalue)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JordanBlock {
    /// The eigenvalue on the diagonal.
    pub eigenvalue: Q,
    /// Block dimension, at least 1.
    pub size: usize,
}

impl fmt::Display for JordanBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J_{}({})", self.size, self.eigenvalue)
    }
}

/// `A = P·J·P⁻¹` with `J` in Jordan canonical form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JordanForm {
    /// Blocks in the order they appear along the diagonal of `J`.
    pub blocks: Vec<JordanBlock>,
    /// The Jordan matrix.
    pub j: DenseMatrix<Q>,
    /// Columns are the chains, eigenvector first within each chain.
    pub p: DenseMatrix<Q>,
}

impl JordanForm {
    /// True if every block has size 1.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.blocks.iter().all(|b| b.size == 1)
    }
}

fn failure(reason: impl Into<String>) -> EngineError {
    EngineError::JordanConstructionFailure {
        stage: STAGE,
        reason: reason.into(),
    }
}

fn rank_of(vectors: &[Vec<Q>]) -> Result<usize, EngineError> {
    if vectors.is_empty() {
        return Ok(0);
    }
    DenseMatrix::try_from_rows(vectors.to_vec()).at(STAGE)?.rank().at(STAGE)
}

/// Builds the chains `[N^{k−1}x, …, Nx, x]` for one eigenvalue.
fn chains_for(a: &DenseMatrix<Q>, pair: &EigenPair) -> Result<Vec<Vec<Vec<Q>>>, EngineError> {
    let n = a.num_rows();
    let m = pair.algebraic_multiplicity as usize;
    let nilpotent = a.shift_diagonal(&pair.value).at(STAGE)?;

    // kernels[j] is a basis of K_j; K_0 = {0}
    let mut kernels: Vec<Vec<Vec<Q>>> = vec![Vec::new()];
    let mut power = DenseMatrix::identity(n);
    while kernels[kernels.len() - 1].len() < m {
        if kernels.len() > n {
            return Err(failure(format!(
                "generalized eigenspace of {} stalls at dimension {} below multiplicity {m}",
                pair.value,
                kernels[kernels.len() - 1].len()
            )));
        }
        power = power.mm(&nilpotent).at(STAGE)?;
        kernels.push(power.null_space().at(STAGE)?);
    }
    let depth = kernels.len() - 1;
    log::trace!("eigenvalue {}: kernel dimensions {:?}", pair.value, kernels.iter().map(Vec::len).collect::<Vec<_>>());

    // Each chain is stored bottom-up: chain[h - 1] sits at height h
    let mut chains: Vec<Vec<Vec<Q>>> = Vec::new();
    for level in (1..=depth).rev() {
        let mut reference: Vec<Vec<Q>> = kernels[level - 1].clone();
        reference.extend(chains.iter().map(|c| c[level - 1].clone()));

        let longer = chains.len();
        let wanted = (kernels[level].len() - kernels[level - 1].len())
            .checked_sub(longer)
            .ok_or_else(|| failure(format!("kernel dimensions of {} are not monotone", pair.value)))?;

        let mut rank = rank_of(&reference)?;
        let mut found = 0;
        for candidate in &kernels[level] {
            if found == wanted {
                break;
            }
            reference.push(candidate.clone());
            let extended = rank_of(&reference)?;
            if extended == rank {
                reference.pop();
                continue;
            }
            rank = extended;
            found += 1;

            let mut chain = vec![candidate.clone()];
            for _ in 1..level {
                let next = nilpotent.mv(&chain[chain.len() - 1]).at(STAGE)?;
                chain.push(next);
            }
            chain.reverse();
            chains.push(chain);
        }

        if found < wanted {
            return Err(failure(format!(
                "found {found} of {wanted} chain tops at level {level} for eigenvalue {}",
                pair.value
            )));
        }
    }

    let total: usize = chains.iter().map(Vec::len).sum();
    if total != m {
        return Err(failure(format!(
            "block sizes for eigenvalue {} sum to {total}, expected {m}",
            pair.value
        )));
    }
    Ok(chains)
}

/// Builds the Jordan form from an already computed eigenstructure.
///
/// # Errors
///
/// `UnsupportedExactRoot` if some eigenvalue is irrational;
/// `JordanConstructionFailure` if the chains do not account for every
/// multiplicity or `P·J·P⁻¹ ≠ A`.
pub fn jordan_from_eigenstructure(a: &DenseMatrix<Q>, eigen: &Eigenstructure) -> Result<JordanForm, EngineError> {
    a.require_square().at(STAGE)?;
    eigen.require_rational(STAGE)?;
    let n = a.num_rows();

    let mut blocks = Vec::new();
    let mut columns: Vec<Vec<Q>> = Vec::with_capacity(n);
    for pair in &eigen.pairs {
        for chain in chains_for(a, pair)? {
            blocks.push(JordanBlock {
                eigenvalue: pair.value.clone(),
                size: chain.len(),
            });
            columns.extend(chain);
        }
    }

    if columns.len() != n {
        return Err(failure(format!("{} chain vectors for a {n}x{n} matrix", columns.len())));
    }

    let mut j = DenseMatrix::zeros(n, n);
    let mut offset = 0;
    for block in &blocks {
        for k in 0..block.size {
            j[(offset + k, offset + k)] = block.eigenvalue.clone();
            if k + 1 < block.size {
                j[(offset + k, offset + k + 1)] = Q::from_integer(1);
            }
        }
        offset += block.size;
    }

    let p = DenseMatrix::from_cols(&columns).at(STAGE)?;
    let p_inv = p
        .inverse()
        .map_err(|_| failure("chain vectors are linearly dependent"))?;
    let rebuilt = p.mm(&j).at(STAGE)?.mm(&p_inv).at(STAGE)?;
    if &rebuilt != a {
        return Err(failure("P·J·P⁻¹ does not reproduce the matrix"));
    }

    log::debug!(
        "jordan form with blocks {}",
        blocks.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    );
    Ok(JordanForm { blocks, j, p })
}

/// Computes the Jordan canonical form of a square rational matrix.
///
/// # Errors
///
/// `NonSquareMatrix` for rectangular input, plus the errors of
/// [`jordan_from_eigenstructure`].
pub fn jordan_form(a: &DenseMatrix<Q>, config: &EngineConfig) -> Result<JordanForm, EngineError> {
    a.require_square().at(STAGE)?;
    let eigen = eigenstructure(a, config)?;
    jordan_from_eigenstructure(a, &eigen)
}

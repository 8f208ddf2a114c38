//! Minimal polynomial by bounded divisor search.
//!
//! The minimal polynomial divides the characteristic polynomial and shares
//! its irreducible factors, so it is `∏ fᵢ^eᵢ` with `1 ≤ eᵢ ≤ kᵢ`. Every
//! exponent tuple is a candidate; the lowest-degree candidate that
//! annihilates `A` wins.

use cayley_factor::IrreducibleFactor;
use cayley_linalg::DenseMatrix;
use cayley_poly::DensePoly;
use cayley_rings::rationals::Q;

use crate::charpoly::{evaluate_at_matrix, factored_characteristic_polynomial};
use crate::config::EngineConfig;
use crate::error::{EngineError, Stage, StageContext};

const STAGE: Stage = Stage::MinimalPolynomial;

/// The monic minimal polynomial and its factored form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimalPolynomial {
    /// The monic annihilating polynomial of least degree.
    pub polynomial: DensePoly<Q>,
    /// The characteristic factors with their exponents in the minimal
    /// polynomial.
    pub factors: Vec<IrreducibleFactor>,
    /// How many candidates were evaluated before the answer.
    pub candidates_tried: usize,
}

/// Exponent tuples `1..=kᵢ` in Cartesian order, last position fastest.
fn exponent_tuples(bounds: &[u32]) -> Vec<Vec<u32>> {
    let mut out = Vec::new();
    let mut current = vec![1u32; bounds.len()];
    loop {
        out.push(current.clone());
        let mut pos = bounds.len();
        loop {
            if pos == 0 {
                return out;
            }
            pos -= 1;
            if current[pos] < bounds[pos] {
                current[pos] += 1;
                break;
            }
            current[pos] = 1;
        }
    }
}

fn candidate_degree(factors: &[IrreducibleFactor], exponents: &[u32]) -> usize {
    factors
        .iter()
        .zip(exponents)
        .map(|(f, &e)| f.factor.degree() * e as usize)
        .sum()
}

/// Computes the minimal polynomial of a square rational matrix.
///
/// # Errors
///
/// `NonSquareMatrix` for rectangular input, `IncompleteFactorization` when
/// the factor search hit its cap (a factor kept whole could hide a smaller
/// annihilator), `SearchExhausted` when the number of exponent tuples exceeds
/// `config.max_minpoly_candidates`, and `Internal` if no candidate
/// annihilates the matrix.
pub fn minimal_polynomial(a: &DenseMatrix<Q>, config: &EngineConfig) -> Result<MinimalPolynomial, EngineError> {
    a.require_square().at(STAGE)?;
    let characteristic = factored_characteristic_polynomial(a, config)?;
    if !characteristic.factorization.complete {
        return Err(EngineError::IncompleteFactorization {
            stage: STAGE,
            limit: config.factor.max_combinations,
        });
    }
    let base = characteristic.factorization.factors;

    let bounds: Vec<u32> = base.iter().map(|f| f.multiplicity).collect();
    let space = bounds
        .iter()
        .fold(1usize, |acc, &k| acc.saturating_mul(k as usize));
    if space > config.max_minpoly_candidates {
        return Err(EngineError::SearchExhausted {
            stage: STAGE,
            candidates: space,
            limit: config.max_minpoly_candidates,
        });
    }

    let mut tuples = exponent_tuples(&bounds);
    tuples.sort_by_key(|t| candidate_degree(&base, t));

    for (tried, exponents) in tuples.iter().enumerate() {
        let candidate = base
            .iter()
            .zip(exponents)
            .fold(DensePoly::one(), |acc, (f, &e)| acc.mul(&f.factor.pow(e)));
        log::trace!("candidate {exponents:?}: {candidate}");

        if evaluate_at_matrix(&candidate, a).at(STAGE)?.is_zero() {
            log::debug!("minimal polynomial {candidate} after {} candidate(s)", tried + 1);
            let factors = base
                .iter()
                .zip(exponents)
                .map(|(f, &e)| IrreducibleFactor {
                    factor: f.factor.clone(),
                    multiplicity: e,
                })
                .collect();
            return Ok(MinimalPolynomial {
                polynomial: candidate,
                factors,
                candidates_tried: tried + 1,
            });
        }
    }

    Err(EngineError::internal(
        STAGE,
        format!("none of {} candidates annihilates the matrix", tuples.len()),
    ))
}

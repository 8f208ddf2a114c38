//! Kronecker's method for splitting root-free rational polynomials.
//!
//! A primitive integer factor `g` of degree `d` of an integer polynomial `f`
//! satisfies `g(xᵢ) | f(xᵢ)` at every integer point. Choosing a divisor at
//! `d + 1` points and interpolating gives every possible `g`; each candidate
//! is checked by exact division. The search is exponential in the number of
//! divisors, so it is capped by [`FactorConfig::max_combinations`]. The same
//! cap bounds the trial division that lists those divisors: a value whose
//! square root exceeds it ends the search as if the cap had been reached.

use cayley_integers::Integer;
use cayley_poly::algorithms::gcd::poly_div_rem;
use cayley_poly::rational::{eval_integer, has_integer_coeffs, primitive_integer_coeffs};
use cayley_poly::{lagrange_interpolate, DensePoly};
use cayley_rings::rationals::Q;
use num_traits::Zero;

use crate::config::FactorConfig;

/// Result of splitting one cofactor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KroneckerOutcome {
    /// Monic factors in discovery order. Irreducible when `complete`.
    pub factors: Vec<DensePoly<Q>>,
    /// Number of interpolation candidates tried.
    pub combinations: usize,
    /// False if the combination cap stopped the search early.
    pub complete: bool,
}

enum Search {
    Found {
        factor: DensePoly<Q>,
        cofactor: DensePoly<Q>,
    },
    NotFound,
    Exhausted,
}

struct Splitter {
    max_combinations: usize,
    tried: usize,
    exhausted: bool,
}

impl Splitter {
    fn split(&mut self, f: DensePoly<Q>, min_degree: usize, out: &mut Vec<DensePoly<Q>>) {
        let n = f.degree();
        for d in min_degree..=n / 2 {
            match self.find_factor(&f, d) {
                Search::Found { factor, cofactor } => {
                    log::debug!("kronecker: split off a degree {d} factor");
                    // No factor of degree < d exists, so `factor` is irreducible
                    out.push(factor.monic());
                    self.split(cofactor, d, out);
                    return;
                }
                Search::NotFound => {}
                Search::Exhausted => {
                    self.exhausted = true;
                    out.push(f.monic());
                    return;
                }
            }
        }
        out.push(f.monic());
    }

    fn find_factor(&mut self, f: &DensePoly<Q>, d: usize) -> Search {
        let coeffs = primitive_integer_coeffs(f);
        let (points, values) = evaluation_points(&coeffs, d + 1);

        // trial division for the divisor lists shares the combination budget
        let max_trial = u64::try_from(self.max_combinations).unwrap_or(u64::MAX);
        let mut choices: Vec<Vec<Integer>> = Vec::with_capacity(values.len());
        for (i, v) in values.iter().enumerate() {
            let Some(divisors) = v.divisors_bounded(max_trial) else {
                log::debug!("kronecker: f({}) = {v} is too large to list its divisors", points[i]);
                return Search::Exhausted;
            };
            // g and -g are the same factor: fix the sign at the first point
            if i == 0 {
                choices.push(divisors);
            } else {
                choices.push(divisors.into_iter().flat_map(|x| [x.clone(), -x]).collect());
            }
        }

        let q_points: Vec<Q> = points.into_iter().map(Q::from).collect();
        let mut index = vec![0usize; choices.len()];

        loop {
            if self.tried >= self.max_combinations {
                return Search::Exhausted;
            }
            self.tried += 1;

            let q_values: Vec<Q> = index
                .iter()
                .zip(&choices)
                .map(|(&i, c)| Q::from(c[i].clone()))
                .collect();
            log::trace!("kronecker: degree {d} candidate {:?}", q_values);

            if let Ok(g) = lagrange_interpolate(&q_points, &q_values) {
                if !g.is_zero() && g.degree() == d && has_integer_coeffs(&g) {
                    if let Ok((cofactor, rem)) = poly_div_rem(f, &g) {
                        if rem.is_zero() {
                            return Search::Found { factor: g, cofactor };
                        }
                    }
                }
            }

            if !advance(&mut index, &choices) {
                return Search::NotFound;
            }
        }
    }
}

/// Steps a mixed-radix counter, last position fastest. Returns false on wrap.
fn advance(index: &mut [usize], choices: &[Vec<Integer>]) -> bool {
    for pos in (0..index.len()).rev() {
        index[pos] += 1;
        if index[pos] < choices[pos].len() {
            return true;
        }
        index[pos] = 0;
    }
    false
}

/// Picks `count` integer points `0, 1, -1, 2, -2, …` where `f` does not vanish.
fn evaluation_points(coeffs: &[Integer], count: usize) -> (Vec<Integer>, Vec<Integer>) {
    let mut points = Vec::with_capacity(count);
    let mut values = Vec::with_capacity(count);
    let mut k = 0i64;

    while points.len() < count {
        let magnitude = (k + 1) / 2;
        let x = Integer::new(if k % 2 == 1 { magnitude } else { -magnitude });
        k += 1;
        let value = eval_integer(coeffs, &x);
        if !value.is_zero() {
            points.push(x);
            values.push(value);
        }
    }

    (points, values)
}

/// Splits a polynomial with no rational roots into irreducible monic factors.
///
/// Factors of degree 1 are never searched for. When the combination cap is
/// reached the unsplit remainder is returned as a single factor and
/// `complete` is false.
#[must_use]
pub fn kronecker_split(f: &DensePoly<Q>, config: &FactorConfig) -> KroneckerOutcome {
    let mut splitter = Splitter {
        max_combinations: config.max_combinations,
        tried: 0,
        exhausted: false,
    };
    let mut factors = Vec::new();

    if f.is_zero() || f.degree() == 0 {
        return KroneckerOutcome {
            factors,
            combinations: 0,
            complete: true,
        };
    }

    splitter.split(f.clone(), 2, &mut factors);

    KroneckerOutcome {
        factors,
        combinations: splitter.tried,
        complete: !splitter.exhausted,
    }
}

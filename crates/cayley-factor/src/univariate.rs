//! Complete factorization of rational univariate polynomials.
//!
//! The pipeline is squarefree decomposition, then rational roots inside
//! each squarefree part, then Kronecker splitting of whatever root-free
//! cofactor of degree ≥ 4 remains. Factors come out in discovery order:
//! by ascending multiplicity, and within one multiplicity zero root first,
//! then rational roots in candidate order, then the higher-degree factors.

use std::fmt;

use cayley_poly::{squarefree_decomposition, DensePoly};
use cayley_rings::rationals::Q;
use cayley_rings::traits::{ArithmeticError, OrderedRing, Ring};

use crate::config::FactorConfig;
use crate::kronecker::kronecker_split;
use crate::rational_roots::extract_rational_roots;

/// A monic irreducible factor together with its exponent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IrreducibleFactor {
    /// The monic factor.
    pub factor: DensePoly<Q>,
    /// The exponent of the factor in the factored polynomial.
    pub multiplicity: u32,
}

impl IrreducibleFactor {
    /// Returns true for a factor of degree one.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        !self.factor.is_zero() && self.factor.degree() == 1
    }

    /// Returns `r` for a linear factor `x − r`.
    #[must_use]
    pub fn root(&self) -> Option<Q> {
        self.is_linear().then(|| -self.factor.coeff(0))
    }
}

/// `unit · ∏ factorᵢ^multiplicityᵢ`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization {
    /// The leading coefficient of the factored polynomial.
    pub unit: Q,
    /// Monic factors in discovery order.
    pub factors: Vec<IrreducibleFactor>,
    /// False if a Kronecker search was cut short, in which case some
    /// non-linear factor may still be reducible.
    pub complete: bool,
}

impl Factorization {
    /// Multiplies the factorization back out.
    #[must_use]
    pub fn to_polynomial(&self) -> DensePoly<Q> {
        self.factors.iter().fold(DensePoly::constant(self.unit.clone()), |acc, f| {
            acc.mul(&f.factor.pow(f.multiplicity))
        })
    }

    /// Iterates over the rational roots with their multiplicities.
    pub fn roots(&self) -> impl Iterator<Item = (Q, u32)> + '_ {
        self.factors
            .iter()
            .filter_map(|f| f.root().map(|r| (r, f.multiplicity)))
    }

    /// Iterates over the factors of degree ≥ 2.
    pub fn nonlinear(&self) -> impl Iterator<Item = &IrreducibleFactor> + '_ {
        self.factors.iter().filter(|f| !f.is_linear())
    }

    /// Displays the factorization in a named indeterminate.
    #[must_use]
    pub fn display_in<'a>(&'a self, var: &'a str) -> FactorizationDisplay<'a> {
        FactorizationDisplay { factorization: self, var }
    }
}

/// Display adapter produced by [`Factorization::display_in`].
pub struct FactorizationDisplay<'a> {
    factorization: &'a Factorization,
    var: &'a str,
}

impl fmt::Display for FactorizationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Factorization { unit, factors, .. } = self.factorization;

        if factors.is_empty() {
            return write!(f, "{unit}");
        }

        if unit.signum() < 0 {
            write!(f, "-")?;
        }
        let magnitude = unit.abs();
        if !magnitude.is_one() {
            write!(f, "{magnitude}")?;
        }

        for factor in factors {
            write!(f, "({})", factor.factor.display_in(self.var))?;
            if factor.multiplicity > 1 {
                write!(f, "^{}", factor.multiplicity)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_in("x"))
    }
}

/// Factors a rational polynomial into monic irreducibles over Q.
///
/// Constants factor as a bare unit. The zero polynomial has unit zero and
/// no factors.
///
/// # Errors
///
/// Propagates an `ArithmeticError` from the squarefree decomposition or the
/// root search, which exact division over Q never produces on valid input.
pub fn factor(p: &DensePoly<Q>, config: &FactorConfig) -> Result<Factorization, ArithmeticError> {
    let decomposition = squarefree_decomposition(p)?;
    let mut factors = Vec::new();
    let mut complete = true;

    for part in &decomposition.factors {
        let split = extract_rational_roots(&part.factor)?;
        factors.extend(split.roots.into_iter().map(|root| IrreducibleFactor {
            factor: DensePoly::linear(root),
            multiplicity: part.multiplicity,
        }));

        let rest = split.cofactor;
        match rest.degree() {
            0 => {}
            1..=3 => factors.push(IrreducibleFactor {
                factor: rest,
                multiplicity: part.multiplicity,
            }),
            degree => {
                let outcome = kronecker_split(&rest, config);
                if !outcome.complete {
                    log::warn!(
                        "factor search capped after {} combinations; a degree {degree} factor was kept whole",
                        outcome.combinations
                    );
                    complete = false;
                }
                factors.extend(outcome.factors.into_iter().map(|factor| IrreducibleFactor {
                    factor,
                    multiplicity: part.multiplicity,
                }));
            }
        }
    }

    log::debug!("factored a degree {} polynomial into {} factors", p.degree(), factors.len());

    Ok(Factorization {
        unit: decomposition.unit,
        factors,
        complete,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_distinct_roots_in_discovery_order() {
        // x^2 + 3x - 10
        let f = factor(&poly(&[-10, 3, 1]), &FactorConfig::default()).unwrap();
        let roots: Vec<_> = f.roots().collect();
        assert_eq!(roots, vec![(q(2), 1), (q(-5), 1)]);
        assert!(f.complete);
    }

    #[test]
    fn test_multiplicities() {
        // (x - 2)^2 (x + 1) = x^3 - 3x^2 + 4
        let f = factor(&poly(&[4, 0, -3, 1]), &FactorConfig::default()).unwrap();
        let roots: Vec<_> = f.roots().collect();
        assert_eq!(roots, vec![(q(-1), 1), (q(2), 2)]);
        assert_eq!(f.to_polynomial(), poly(&[4, 0, -3, 1]));
    }

    #[test]
    fn test_irreducible_quadratic_kept() {
        // (x - 1)(x^2 + 1)
        let f = factor(&poly(&[-1, 1, -1, 1]), &FactorConfig::default()).unwrap();
        assert_eq!(f.roots().collect::<Vec<_>>(), vec![(q(1), 1)]);
        let nonlinear: Vec<_> = f.nonlinear().collect();
        assert_eq!(nonlinear.len(), 1);
        assert_eq!(nonlinear[0].factor, poly(&[1, 0, 1]));
    }

    #[test]
    fn test_quartic_split_by_kronecker() {
        // (x^2 + 1)(x^2 + 2) = x^4 + 3x^2 + 2
        let p = poly(&[2, 0, 3, 0, 1]);
        let f = factor(&p, &FactorConfig::default()).unwrap();
        assert_eq!(f.nonlinear().count(), 2);
        assert_eq!(f.to_polynomial(), p);
    }

    #[test]
    fn test_unit_and_constant() {
        let f = factor(&poly(&[-6]), &FactorConfig::default()).unwrap();
        assert_eq!(f.unit, q(-6));
        assert!(f.factors.is_empty());

        let g = factor(&poly(&[4, -2]), &FactorConfig::default()).unwrap();
        assert_eq!(g.unit, q(-2));
        assert_eq!(g.roots().collect::<Vec<_>>(), vec![(q(2), 1)]);
    }

    #[test]
    fn test_display() {
        let f = factor(&poly(&[-10, 3, 1]), &FactorConfig::default()).unwrap();
        assert_eq!(f.to_string(), "(x - 2)(x + 5)");

        let g = factor(&poly(&[-4, 0, 6, 0, -2]), &FactorConfig::default()).unwrap();
        // -2 (x^2 - 1)(x^2 - 2)
        assert_eq!(g.display_in("λ").to_string(), "-2(λ - 1)(λ + 1)(λ^2 - 2)");

        let h = factor(&poly(&[0, 0, 1]), &FactorConfig::default()).unwrap();
        assert_eq!(h.to_string(), "(x)^2");
    }
}

//! Squarefree decomposition of polynomials.
//!
//! Writes a polynomial as `unit · f₁ · f₂² · f₃³ · …` where each `fᵢ` is
//! monic, squarefree and coprime to the others. Multiplicities of the
//! characteristic polynomial's roots come straight out of this.
//!
//! # Algorithm
//!
//! Yun's algorithm, valid over any field of characteristic 0.

use cayley_rings::traits::{ArithmeticError, Field};

use crate::algorithms::gcd::{poly_div_rem, poly_gcd};
use crate::dense::DensePoly;

/// A factor with its multiplicity in the squarefree decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor<F: Field> {
    /// The monic squarefree polynomial factor.
    pub factor: DensePoly<F>,
    /// The multiplicity (power) of this factor.
    pub multiplicity: u32,
}

/// Result of squarefree decomposition.
#[derive(Clone, Debug)]
pub struct SquarefreeDecomposition<F: Field> {
    /// The unit (leading coefficient of the input).
    pub unit: F,
    /// The squarefree factors, multiplicities ascending.
    pub factors: Vec<SquarefreeFactor<F>>,
}

impl<F: Field> SquarefreeDecomposition<F> {
    /// Reconstructs the original polynomial from the decomposition.
    #[must_use]
    pub fn to_polynomial(&self) -> DensePoly<F> {
        self.factors.iter().fold(DensePoly::constant(self.unit.clone()), |acc, sf| {
            acc.mul(&sf.factor.pow(sf.multiplicity))
        })
    }
}

/// Quotient of a division by a gcd, which must leave no remainder.
fn exact_quotient<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> Result<DensePoly<F>, ArithmeticError> {
    let (q, r) = poly_div_rem(a, b)?;
    if r.is_zero() {
        Ok(q)
    } else {
        Err(ArithmeticError::InexactDivision)
    }
}

/// Computes the squarefree decomposition of a polynomial using Yun's algorithm.
///
/// Constants (including zero) decompose into a unit with no factors.
///
/// # Errors
///
/// Propagates the `ArithmeticError` of a gcd division that fails or leaves
/// a remainder.
pub fn squarefree_decomposition<F: Field>(f: &DensePoly<F>) -> Result<SquarefreeDecomposition<F>, ArithmeticError> {
    if f.degree() == 0 {
        return Ok(SquarefreeDecomposition {
            unit: f.coeff(0),
            factors: Vec::new(),
        });
    }

    let unit = f.leading_coeff().clone();
    let f_monic = f.monic();
    let f_prime = f_monic.derivative();

    let g = poly_gcd(&f_monic, &f_prime);
    let mut a = exact_quotient(&f_monic, &g)?;
    let mut b = exact_quotient(&f_prime, &g)?;

    let mut factors = Vec::new();
    let mut multiplicity = 1u32;

    while a.degree() > 0 {
        let c = b.sub(&a.derivative());
        let d = poly_gcd(&a, &c);

        if d.degree() > 0 {
            factors.push(SquarefreeFactor {
                factor: d.clone(),
                multiplicity,
            });
        }

        a = exact_quotient(&a, &d)?;
        b = exact_quotient(&c, &d)?;
        multiplicity += 1;
    }

    Ok(SquarefreeDecomposition { unit, factors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cayley_rings::rationals::Q;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_squarefree_input() {
        // (x-1)(x-2)
        let decomp = squarefree_decomposition(&poly(&[2, -3, 1])).unwrap();
        assert_eq!(decomp.factors.len(), 1);
        assert_eq!(decomp.factors[0].multiplicity, 1);
        assert_eq!(decomp.factors[0].factor, poly(&[2, -3, 1]));
    }

    #[test]
    fn test_cube() {
        // (x+1)^3
        let decomp = squarefree_decomposition(&poly(&[1, 3, 3, 1])).unwrap();
        assert_eq!(decomp.factors.len(), 1);
        assert_eq!(decomp.factors[0].multiplicity, 3);
        assert_eq!(decomp.factors[0].factor, poly(&[1, 1]));
    }

    #[test]
    fn test_mixed_multiplicities_ascending() {
        // -2 (x-1) (x+1)^2 = -2x^3 - 2x^2 + 2x + 2
        let f = poly(&[2, 2, -2, -2]);
        let decomp = squarefree_decomposition(&f).unwrap();

        assert_eq!(decomp.unit, Q::from_integer(-2));
        assert_eq!(decomp.factors.len(), 2);
        assert_eq!(decomp.factors[0], SquarefreeFactor { factor: poly(&[-1, 1]), multiplicity: 1 });
        assert_eq!(decomp.factors[1], SquarefreeFactor { factor: poly(&[1, 1]), multiplicity: 2 });
        assert_eq!(decomp.to_polynomial(), f);
    }

    #[test]
    fn test_exact_quotient_rejects_remainder() {
        // x^2 + 1 is not a multiple of x - 1
        assert_eq!(
            exact_quotient(&poly(&[1, 0, 1]), &poly(&[-1, 1])),
            Err(ArithmeticError::InexactDivision)
        );
        assert_eq!(
            exact_quotient(&poly(&[1, 0, 1]), &DensePoly::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(exact_quotient(&poly(&[-1, 0, 1]), &poly(&[-1, 1])), Ok(poly(&[1, 1])));
    }

    #[test]
    fn test_constant() {
        let decomp = squarefree_decomposition(&poly(&[7])).unwrap();
        assert!(decomp.factors.is_empty());
        assert_eq!(decomp.unit, Q::from_integer(7));
    }
}

//! Polynomial division and GCD over a field.

use cayley_rings::traits::{ArithmeticError, Field, Ring};

use crate::dense::DensePoly;

/// Divides polynomial a by b, returning (quotient, remainder).
///
/// # Errors
///
/// Returns `DivisionByZero` if `b` is the zero polynomial.
pub fn poly_div_rem<F: Field>(
    a: &DensePoly<F>,
    b: &DensePoly<F>,
) -> Result<(DensePoly<F>, DensePoly<F>), ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    if a.is_zero() || a.degree() < b.degree() {
        return Ok((DensePoly::zero(), a.clone()));
    }

    let b_lead_inv = b.leading_coeff().inv().ok_or(ArithmeticError::DivisionByZero)?;
    let b_len = b.coeffs().len();
    let mut quotient = vec![F::zero(); a.degree() - b.degree() + 1];
    let mut remainder = a.coeffs().to_vec();

    while remainder.len() >= b_len {
        let deg_diff = remainder.len() - b_len;
        let coeff = remainder[remainder.len() - 1].clone() * b_lead_inv.clone();

        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[deg_diff + i] = remainder[deg_diff + i].clone() - coeff.clone() * bc.clone();
        }
        quotient[deg_diff] = coeff;

        // The leading term cancels exactly; drop it along with any new zeros
        remainder.pop();
        while remainder.last().map_or(false, Ring::is_zero) {
            remainder.pop();
        }
    }

    Ok((DensePoly::new(quotient), DensePoly::new(remainder)))
}

/// Computes the monic GCD of two polynomials with the Euclidean algorithm.
///
/// `gcd(0, 0)` is the zero polynomial.
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let r = match poly_div_rem(&p, &q) {
            Ok((_, r)) => r,
            Err(_) => break,
        };
        p = q;
        q = r;
    }

    p.monic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cayley_rings::rationals::Q;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_poly_div_rem() {
        // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
        let (q, r) = poly_div_rem(&poly(&[1, 2, 1]), &poly(&[1, 1])).unwrap();
        assert_eq!(q, poly(&[1, 1]));
        assert!(r.is_zero());
    }

    #[test]
    fn test_poly_div_rem_with_remainder() {
        // x^3 + 1 = (x^2 - 1)·x + (x + 1)
        let (q, r) = poly_div_rem(&poly(&[1, 0, 0, 1]), &poly(&[-1, 0, 1])).unwrap();
        assert_eq!(q, poly(&[0, 1]));
        assert_eq!(r, poly(&[1, 1]));
    }

    #[test]
    fn test_poly_div_by_zero() {
        assert_eq!(
            poly_div_rem(&poly(&[1, 1]), &DensePoly::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_poly_gcd() {
        // gcd(x^2 - 1, x^2 - 2x + 1) = x - 1
        let g = poly_gcd(&poly(&[-1, 0, 1]), &poly(&[1, -2, 1]));
        assert_eq!(g, poly(&[-1, 1]));
    }

    #[test]
    fn test_poly_gcd_coprime() {
        let g = poly_gcd(&poly(&[1, 0, 1]), &poly(&[-1, 1]));
        assert_eq!(g, DensePoly::one());
    }
}

//! Integer views of rational polynomials.
//!
//! Root and factor searches over Q work on the primitive integer associate:
//! denominators cleared, content divided out, leading coefficient positive.

use cayley_integers::Integer;
use cayley_rings::rationals::Q;
use num_traits::{One, Zero};

use crate::dense::DensePoly;

/// Returns the primitive integer coefficients (ascending degree) of a
/// non-zero rational polynomial.
///
/// The result is an associate of `p`: `p = c · result` for some non-zero
/// rational `c`. The zero polynomial maps to `[0]`.
#[must_use]
pub fn primitive_integer_coeffs(p: &DensePoly<Q>) -> Vec<Integer> {
    if p.is_zero() {
        return vec![Integer::zero()];
    }

    let common_den = p
        .coeffs()
        .iter()
        .fold(Integer::one(), |acc, c| acc.lcm(&c.denominator()));

    let scaled: Vec<Integer> = p
        .coeffs()
        .iter()
        .map(|c| c.numerator() * (common_den.clone() / c.denominator()))
        .collect();

    let content = scaled.iter().fold(Integer::zero(), |acc, c| acc.gcd(c));
    let sign = if scaled[scaled.len() - 1].is_negative() {
        -Integer::one()
    } else {
        Integer::one()
    };
    let divisor = content * sign;

    scaled.into_iter().map(|c| c / divisor.clone()).collect()
}

/// Builds a rational polynomial from integer coefficients (ascending degree).
#[must_use]
pub fn from_integer_coeffs(coeffs: &[Integer]) -> DensePoly<Q> {
    DensePoly::new(coeffs.iter().cloned().map(Q::from).collect())
}

/// Evaluates integer coefficients at an integer point.
#[must_use]
pub fn eval_integer(coeffs: &[Integer], x: &Integer) -> Integer {
    coeffs
        .iter()
        .rev()
        .fold(Integer::zero(), |acc, c| acc * x.clone() + c.clone())
}

/// Returns true if every coefficient of `p` is an integer.
#[must_use]
pub fn has_integer_coeffs(p: &DensePoly<Q>) -> bool {
    p.coeffs().iter().all(|c| c.as_inner().is_integer())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Integer> {
        values.iter().map(|&v| Integer::new(v)).collect()
    }

    #[test]
    fn test_primitive_integer_coeffs() {
        // -(1/2)x^2 + (3/4)x - 1  ~  2x^2 - 3x + 4
        let p = DensePoly::new(vec![Q::new(-1, 1), Q::new(3, 4), Q::new(-1, 2)]);
        assert_eq!(primitive_integer_coeffs(&p), ints(&[4, -3, 2]));
    }

    #[test]
    fn test_content_removed() {
        let p = DensePoly::new(vec![Q::from_integer(6), Q::from_integer(-4), Q::from_integer(2)]);
        assert_eq!(primitive_integer_coeffs(&p), ints(&[3, -2, 1]));
    }

    #[test]
    fn test_eval_integer() {
        // 2x^2 - 3x + 4 at x = 3 → 13
        assert_eq!(eval_integer(&ints(&[4, -3, 2]), &Integer::new(3)), Integer::new(13));
    }

    #[test]
    fn test_round_trip_through_integers() {
        let coeffs = ints(&[-6, 1, 1]);
        let p = from_integer_coeffs(&coeffs);
        assert!(has_integer_coeffs(&p));
        assert_eq!(primitive_integer_coeffs(&p), coeffs);
    }
}

//! Rational roots by modular lifting.
//!
//! For a primitive integer polynomial `aₙxⁿ + … + a₀` with `a₀ ≠ 0`, every
//! rational root `p/q` in lowest terms has `p | a₀` and `q | aₙ`, so
//! `N = aₙ·p/q` is an integer with `|N| ≤ |aₙa₀|`. Roots are found modulo a
//! small prime, Hensel-lifted past `2|aₙa₀|`, and `N` is read off the
//! symmetric residue of `aₙ·u`. No divisor of `a₀` or `aₙ` is ever listed.
//!
//! Roots are reported in rational root theorem order: `|p|` ascending, then
//! `q` ascending, positive sign first.

use cayley_integers::Integer;
use cayley_poly::algorithms::gcd::{poly_div_rem, poly_gcd};
use cayley_poly::rational::primitive_integer_coeffs;
use cayley_poly::DensePoly;
use cayley_rings::rationals::Q;
use cayley_rings::traits::{ArithmeticError, Ring};

use crate::hensel::{good_prime_roots, lift_root, symmetric_residue};

/// Roots pulled out of a polynomial and what is left over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootSplit {
    /// Rational roots in discovery order, repeated by multiplicity.
    pub roots: Vec<Q>,
    /// The monic cofactor with no rational roots.
    pub cofactor: DensePoly<Q>,
}

/// Returns the distinct non-zero rational roots of `p` in rational root
/// theorem order.
///
/// # Errors
///
/// Propagates the `ArithmeticError` of the squarefree-part division.
pub fn rational_roots(p: &DensePoly<Q>) -> Result<Vec<Q>, ArithmeticError> {
    if p.is_zero() || p.degree() == 0 || p.coeff(0).is_zero() {
        return Ok(Vec::new());
    }

    let (squarefree, _) = poly_div_rem(p, &poly_gcd(p, &p.derivative()))?;
    let coeffs = primitive_integer_coeffs(&squarefree);
    let constant = coeffs[0].abs();
    let leading = coeffs[coeffs.len() - 1].clone();

    let modular = good_prime_roots(&coeffs);
    let bound = leading.abs() * constant * Integer::new(2);

    let mut roots: Vec<Q> = modular
        .roots
        .iter()
        .filter_map(|&root| {
            let (u, modulus) = lift_root(&coeffs, root, modular.prime, &bound);
            let scaled = symmetric_residue(&(leading.clone() * &u), &modulus);
            let candidate = Q::from_parts(scaled, leading.clone())?;
            squarefree.eval(&candidate).is_zero().then_some(candidate)
        })
        .collect();

    roots.sort_by_key(|r| (r.numerator().abs(), r.denominator(), r.numerator().is_negative()));
    log::trace!("{} rational root(s) via prime {}", roots.len(), modular.prime);
    Ok(roots)
}

/// Divides `p` by `x − root`, assuming `root` is a root of `p`.
fn deflate(p: &DensePoly<Q>, root: &Q) -> DensePoly<Q> {
    let coeffs = p.coeffs();
    let mut quotient = vec![Q::zero(); coeffs.len() - 1];
    let mut carry = Q::zero();
    for i in (1..coeffs.len()).rev() {
        carry = coeffs[i].clone() + carry * root.clone();
        quotient[i - 1] = carry.clone();
    }
    DensePoly::new(quotient)
}

/// Pulls every rational root out of `p`.
///
/// The zero root comes first, then the remaining roots in candidate order.
/// A root of multiplicity `k` is reported `k` times; on squarefree input each
/// root appears once.
///
/// # Errors
///
/// Propagates the `ArithmeticError` of [`rational_roots`].
pub fn extract_rational_roots(p: &DensePoly<Q>) -> Result<RootSplit, ArithmeticError> {
    let mut cofactor = p.monic();
    let mut roots = Vec::new();

    while !cofactor.is_zero() && cofactor.degree() > 0 && cofactor.coeff(0).is_zero() {
        roots.push(Q::zero());
        cofactor = DensePoly::new(cofactor.coeffs()[1..].to_vec());
    }

    for root in rational_roots(&cofactor)? {
        while cofactor.degree() > 0 && cofactor.eval(&root).is_zero() {
            log::trace!("rational root {root} found");
            cofactor = deflate(&cofactor, &root);
            roots.push(root.clone());
        }
    }

    Ok(RootSplit { roots, cofactor })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    fn big(s: &str) -> Q {
        s.parse().unwrap()
    }

    #[test]
    fn test_root_order() {
        // (2x - 3)(2x + 1)(x + 1)(x - 3): |p| ascending, q ascending, + before -
        let p = poly(&[-3, 2]).mul(&poly(&[1, 2])).mul(&poly(&[1, 1])).mul(&poly(&[-3, 1]));
        assert_eq!(
            rational_roots(&p).unwrap(),
            vec![Q::new(-1, 1), Q::new(-1, 2), Q::new(3, 1), Q::new(3, 2)]
        );
    }

    #[test]
    fn test_roots_in_lowest_terms() {
        // 4x - 2
        assert_eq!(rational_roots(&poly(&[-2, 4])).unwrap(), vec![Q::new(1, 2)]);
    }

    #[test]
    fn test_roots_in_discovery_order() {
        // x^2 + 3x - 10 = (x - 2)(x + 5)
        let split = extract_rational_roots(&poly(&[-10, 3, 1])).unwrap();
        assert_eq!(split.roots, vec![Q::from_integer(2), Q::from_integer(-5)]);
        assert_eq!(split.cofactor, DensePoly::one());
    }

    #[test]
    fn test_zero_root_first() {
        // x (x - 1)(x + 1) = x^3 - x
        let split = extract_rational_roots(&poly(&[0, -1, 0, 1])).unwrap();
        assert_eq!(
            split.roots,
            vec![Q::from_integer(0), Q::from_integer(1), Q::from_integer(-1)]
        );
    }

    #[test]
    fn test_fractional_root() {
        // (2x - 1)(x^2 + 1) = 2x^3 - x^2 + 2x - 1
        let split = extract_rational_roots(&poly(&[-1, 2, -1, 2])).unwrap();
        assert_eq!(split.roots, vec![Q::new(1, 2)]);
        assert_eq!(split.cofactor, poly(&[1, 0, 1]));
    }

    #[test]
    fn test_repeated_root_reported_per_multiplicity() {
        // (x - 3)^2
        let split = extract_rational_roots(&poly(&[9, -6, 1])).unwrap();
        assert_eq!(split.roots, vec![Q::from_integer(3), Q::from_integer(3)]);
    }

    #[test]
    fn test_no_rational_roots() {
        let p = poly(&[-2, 0, 1]);
        assert!(rational_roots(&p).unwrap().is_empty());
        let split = extract_rational_roots(&p).unwrap();
        assert!(split.roots.is_empty());
        assert_eq!(split.cofactor, p);
    }

    #[test]
    fn test_large_roots() {
        // (x - 1000000000000000003)(7x + 999999999999999989)
        let r = big("1000000000000000003");
        let s = big("-999999999999999989/7");
        let p = DensePoly::linear(r.clone()).mul(&DensePoly::linear(s.clone()));
        assert_eq!(rational_roots(&p).unwrap(), vec![s, r]);
    }

    #[test]
    fn test_large_constant_without_roots() {
        // x^2 + 1000000000000000003 has no rational root
        let p = DensePoly::new(vec![big("1000000000000000003"), Q::zero(), Q::one()]);
        assert!(rational_roots(&p).unwrap().is_empty());
    }
}

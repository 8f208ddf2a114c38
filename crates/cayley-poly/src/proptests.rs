//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::{poly_div_rem, poly_gcd};
    use crate::algorithms::squarefree::squarefree_decomposition;
    use crate::dense::DensePoly;
    use crate::rational::{from_integer_coeffs, primitive_integer_coeffs};
    use cayley_rings::rationals::Q;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-20i64..20i64).prop_map(Q::from_integer)
    }

    fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = DensePoly<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn div_rem_reconstructs(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = poly_div_rem(&a, &b).unwrap();
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = poly_gcd(&a, &b);
            prop_assert!(a.is_divisible_by(&g));
            prop_assert!(b.is_divisible_by(&g));
        }

        #[test]
        fn squarefree_decomposition_reconstructs(a in nonzero_poly(), b in nonzero_poly()) {
            // a·b² always has a repeated factor when b is non-constant
            let f = a.mul(&b).mul(&b);
            let decomp = squarefree_decomposition(&f).unwrap();
            prop_assert_eq!(decomp.to_polynomial(), f);
            for sf in &decomp.factors {
                prop_assert!(sf.factor.is_monic());
            }
        }

        #[test]
        fn primitive_form_is_an_associate(a in nonzero_poly()) {
            let ints = primitive_integer_coeffs(&a);
            let back = from_integer_coeffs(&ints);
            prop_assert_eq!(back.monic(), a.monic());
        }
    }
}

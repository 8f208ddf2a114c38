//! Property-based tests for rational factorization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{factor, rational_roots, FactorConfig};
    use cayley_poly::DensePoly;
    use cayley_rings::rationals::Q;

    fn linear_factor() -> impl Strategy<Value = DensePoly<Q>> {
        (-6i64..=6, 1i64..=3).prop_map(|(p, q)| DensePoly::linear(Q::new(p, q)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn factorization_reconstructs(
            roots in proptest::collection::vec(linear_factor(), 1..=4),
            unit in (1i64..=5),
            with_quadratic in any::<bool>(),
        ) {
            let mut p = DensePoly::constant(Q::from_integer(unit));
            for r in &roots {
                p = p.mul(r);
            }
            if with_quadratic {
                // x^2 + x + 1 has no rational roots
                p = p.mul(&DensePoly::new(vec![Q::from_integer(1), Q::from_integer(1), Q::from_integer(1)]));
            }

            let f = factor(&p, &FactorConfig::default()).unwrap();
            prop_assert_eq!(f.to_polynomial(), p.clone());
            prop_assert!(f.factors.iter().all(|fac| fac.factor.is_monic()));

            let root_count: u32 = f.roots().map(|(_, m)| m).sum();
            prop_assert_eq!(root_count as usize, roots.len());
            prop_assert_eq!(f.nonlinear().count(), usize::from(with_quadratic));
        }

        #[test]
        fn every_reported_root_vanishes(roots in proptest::collection::vec(linear_factor(), 1..=4)) {
            let p = roots.iter().fold(DensePoly::one(), |acc, r| acc.mul(r));
            let f = factor(&p, &FactorConfig::default()).unwrap();
            for (root, _) in f.roots() {
                prop_assert!(p.eval(&root) == Q::from_integer(0));
            }
        }

        #[test]
        fn lifted_roots_match_the_linear_factors(
            roots in proptest::collection::btree_set((-40i64..=40, 1i64..=9), 1..=5),
            scale in 1i64..=1_000_000,
        ) {
            let mut expected: Vec<Q> = roots.iter().map(|&(p, q)| Q::new(p * scale, q)).collect();
            expected.sort_by_key(|r| (r.numerator().abs(), r.denominator(), r.numerator().is_negative()));
            expected.dedup();
            // zero roots are split off before the search
            expected.retain(|r| r.numerator().signum() != 0);

            let p = expected.iter().fold(DensePoly::one(), |acc, r| acc.mul(&DensePoly::linear(r.clone())));
            prop_assert_eq!(rational_roots(&p).unwrap(), expected);
        }
    }
}

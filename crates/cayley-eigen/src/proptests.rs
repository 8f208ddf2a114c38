//! Property-based tests for the engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        diagonalize, eigenstructure, evaluate_at_matrix, factored_characteristic_polynomial, jordan_form,
        minimal_polynomial, reconstruct, verify_cayley_hamilton, DiagonalizationOutcome, EngineConfig,
    };
    use cayley_linalg::DenseMatrix;
    use cayley_poly::DensePoly;
    use cayley_rings::rationals::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn small_matrix(n: usize) -> impl Strategy<Value = DenseMatrix<Q>> {
        proptest::collection::vec(proptest::collection::vec(-4i64..=4, n), n)
            .prop_map(|rows| DenseMatrix::from_rows(rows.into_iter().map(|r| r.into_iter().map(q).collect()).collect()))
    }

    /// `L·U` with unit diagonals, so always invertible.
    fn change_of_basis(n: usize) -> impl Strategy<Value = DenseMatrix<Q>> {
        (
            proptest::collection::vec(-2i64..=2, n * n),
            proptest::collection::vec(-2i64..=2, n * n),
        )
            .prop_map(move |(lower, upper)| {
                let mut l = DenseMatrix::identity(n);
                let mut u = DenseMatrix::identity(n);
                for i in 0..n {
                    for j in 0..i {
                        l[(i, j)] = q(lower[i * n + j]);
                        u[(j, i)] = q(upper[i * n + j]);
                    }
                }
                l.mm(&u).unwrap()
            })
    }

    /// A Jordan matrix with small integer eigenvalues; a superdiagonal 1 is
    /// placed only between equal diagonal entries.
    fn jordan_matrix(n: usize) -> impl Strategy<Value = DenseMatrix<Q>> {
        (
            proptest::collection::vec(-2i64..=2, n),
            proptest::collection::vec(any::<bool>(), n),
        )
            .prop_map(move |(mut values, links)| {
                values.sort_unstable();
                let mut j = DenseMatrix::diagonal(&values.iter().map(|&v| q(v)).collect::<Vec<_>>());
                for i in 0..n.saturating_sub(1) {
                    if values[i] == values[i + 1] && links[i] {
                        j[(i, i + 1)] = q(1);
                    }
                }
                j
            })
    }

    fn similar_to_jordan(n: usize) -> impl Strategy<Value = DenseMatrix<Q>> {
        (jordan_matrix(n), change_of_basis(n)).prop_map(|(j, s)| {
            let s_inv = s.inverse().unwrap();
            s.mm(&j).unwrap().mm(&s_inv).unwrap()
        })
    }

    fn rebuilds(p: &DenseMatrix<Q>, middle: &DenseMatrix<Q>, a: &DenseMatrix<Q>) -> bool {
        let p_inv = p.inverse().unwrap();
        p.mm(middle).unwrap().mm(&p_inv).unwrap() == *a
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn cayley_hamilton_holds(a in small_matrix(3)) {
            let check = verify_cayley_hamilton(&a).unwrap();
            prop_assert!(check.evaluated.is_zero());
            prop_assert_eq!(check.characteristic.degree(), 3);
        }

        #[test]
        fn characteristic_factorization_reconstructs(a in small_matrix(3)) {
            let c = factored_characteristic_polynomial(&a, &EngineConfig::default()).unwrap();
            prop_assert_eq!(c.factorization.to_polynomial(), c.polynomial);
        }

        #[test]
        fn minimal_polynomial_is_minimal(a in similar_to_jordan(4)) {
            let config = EngineConfig::default();
            let m = minimal_polynomial(&a, &config).unwrap();
            let characteristic = factored_characteristic_polynomial(&a, &config).unwrap().polynomial;

            prop_assert!(m.polynomial.is_monic());
            prop_assert!(characteristic.is_divisible_by(&m.polynomial));
            prop_assert!(evaluate_at_matrix(&m.polynomial, &a).unwrap().is_zero());

            // lowering any single exponent loses the annihilation property
            for i in 0..m.factors.len() {
                let smaller: DensePoly<Q> = m
                    .factors
                    .iter()
                    .enumerate()
                    .map(|(k, f)| {
                        let e = if k == i { f.multiplicity - 1 } else { f.multiplicity };
                        f.factor.pow(e)
                    })
                    .fold(DensePoly::one(), |acc, p| acc.mul(&p));
                prop_assert!(!evaluate_at_matrix(&smaller, &a).unwrap().is_zero());
            }
        }

        #[test]
        fn jordan_form_rebuilds(a in similar_to_jordan(4)) {
            let form = jordan_form(&a, &EngineConfig::default()).unwrap();
            prop_assert_eq!(form.blocks.iter().map(|b| b.size).sum::<usize>(), 4);
            prop_assert!(rebuilds(&form.p, &form.j, &a));
        }

        #[test]
        fn diagonalize_round_trips(a in similar_to_jordan(3)) {
            match diagonalize(&a, &EngineConfig::default()).unwrap() {
                DiagonalizationOutcome::Diagonalizable(d) => prop_assert!(rebuilds(&d.p, &d.d, &a)),
                DiagonalizationOutcome::Jordan { form, .. } => {
                    prop_assert!(!form.is_diagonal());
                    prop_assert!(rebuilds(&form.p, &form.j, &a));
                }
            }
        }

        #[test]
        fn reconstruct_then_eigen(
            s in change_of_basis(3),
            values in proptest::collection::btree_set(-6i64..=6, 3),
        ) {
            let values: Vec<Q> = values.into_iter().map(q).collect();
            let vectors = s.to_cols();
            let a = reconstruct(&vectors, &values).unwrap();

            let e = eigenstructure(&a, &EngineConfig::default()).unwrap();
            prop_assert_eq!(e.pairs.len(), 3);
            for (v, value) in vectors.iter().zip(&values) {
                let pair = e.pairs.iter().find(|p| &p.value == value).unwrap();
                prop_assert_eq!(pair.basis.len(), 1);
                // the recovered eigenvector spans the same line
                let line = DenseMatrix::from_rows(vec![v.clone(), pair.basis[0].clone()]);
                prop_assert_eq!(line.rank().unwrap(), 1);
            }
        }
    }
}

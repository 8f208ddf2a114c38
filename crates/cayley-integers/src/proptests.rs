//! Property-based tests for exact integer and rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn divisors_divide_and_are_sorted(n in non_zero_int()) {
            let n = Integer::new(n);
            let divisors = n.divisors_bounded(1000).unwrap();

            prop_assert!(divisors.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(divisors.first().cloned(), Some(Integer::one()));
            prop_assert_eq!(divisors.last().cloned(), Some(n.abs()));
            for d in divisors {
                prop_assert!((n.clone() % d).is_zero());
            }
        }

        #[test]
        fn square_split_reconstructs(n in 1i64..5000i64) {
            let n = Integer::new(n);
            let (f, d) = n.square_split();

            prop_assert_eq!(&f * &f * d.clone(), n);
            // below the trial bound d is square-free
            for k in d.divisors_bounded(1000).unwrap().into_iter().skip(1) {
                prop_assert!(!(d.clone() % (&k * &k)).is_zero());
            }
        }

        #[test]
        fn rational_is_canonical(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            prop_assert!(r.denominator().is_positive());
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one() || r.is_zero());
        }

        #[test]
        fn rational_distributive(a in small_rational(), b in small_rational(), c in small_rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().expect("non-zero rational has a reciprocal");
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_display_parses_back(r in small_rational()) {
            let text = r.to_string();
            prop_assert_eq!(text.parse::<Rational>(), Ok(r));
        }
    }
}

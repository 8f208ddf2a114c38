//! Polynomial interpolation.

use cayley_rings::traits::{ArithmeticError, Field};

use crate::dense::DensePoly;

/// Lagrange interpolation through `(points[i], values[i])`.
///
/// Returns the unique polynomial of degree < `points.len()` through the
/// given points.
///
/// # Errors
///
/// Returns `DivisionByZero` if two interpolation points coincide.
pub fn lagrange_interpolate<F: Field>(points: &[F], values: &[F]) -> Result<DensePoly<F>, ArithmeticError> {
    let mut result = DensePoly::zero();

    for (i, (xi, yi)) in points.iter().zip(values).enumerate() {
        let mut basis = DensePoly::constant(yi.clone());

        for (j, xj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            // (x - x_j) / (x_i - x_j)
            let denom_inv = (xi.clone() - xj.clone())
                .inv()
                .ok_or(ArithmeticError::DivisionByZero)?;
            basis = basis.mul(&DensePoly::linear(xj.clone())).scale(&denom_inv);
        }

        result = result.add(&basis);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cayley_rings::rationals::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_lagrange_interpolation() {
        // 1 + x + x^2 through x = 0, 1, 2
        let p = lagrange_interpolate(&[q(0), q(1), q(2)], &[q(1), q(3), q(7)]).unwrap();
        assert_eq!(p, DensePoly::new(vec![q(1), q(1), q(1)]));
    }

    #[test]
    fn test_repeated_point_rejected() {
        assert_eq!(
            lagrange_interpolate(&[q(1), q(1)], &[q(0), q(2)]),
            Err(ArithmeticError::DivisionByZero)
        );
    }
}

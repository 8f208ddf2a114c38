//! Dense univariate polynomials.
//!
//! `DensePoly<R>` is both a container with the usual arithmetic and, through
//! the `Ring`/`EuclideanDomain` impls at the bottom of this file, a ring
//! element in its own right. That is what lets a matrix carry polynomial
//! entries such as `A − xI`.

use std::fmt;

use cayley_rings::traits::{ArithmeticError, CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};

use crate::algorithms::gcd::poly_div_rem;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order with trailing zeros
/// removed, so the leading coefficient of a non-zero polynomial is non-zero.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().map_or(false, Ring::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Creates the monic linear polynomial x − root.
    #[must_use]
    pub fn linear(root: R) -> Self {
        Self::new(vec![-root, R::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial reports degree 0; test `is_zero` first where the
    /// distinction matters.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns true if the leading coefficient is one.
    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_one()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients, lowest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook).
    ///
    /// Degrees here are bounded by the matrix dimension, well below the
    /// range where sub-quadratic multiplication pays off.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let result = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_scalar(i as i64))
            .collect();

        Self::new(result)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }
}

impl<F: Field> DensePoly<F> {
    /// Returns the monic associate (the zero polynomial is returned as is).
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.leading_coeff().inv() {
            Some(inv) if !self.is_zero() => self.scale(&inv),
            _ => self.clone(),
        }
    }

    /// Returns true if `divisor` divides `self` exactly.
    #[must_use]
    pub fn is_divisible_by(&self, divisor: &Self) -> bool {
        poly_div_rem(self, divisor).map_or(false, |(_, r)| r.is_zero())
    }
}

impl<R: OrderedRing + fmt::Display> DensePoly<R> {
    /// Displays the polynomial in a named indeterminate, highest degree first.
    #[must_use]
    pub fn display_in<'a>(&'a self, var: &'a str) -> PolyDisplay<'a, R> {
        PolyDisplay { poly: self, var }
    }
}

/// Display adapter produced by [`DensePoly::display_in`].
pub struct PolyDisplay<'a, R: Ring> {
    poly: &'a DensePoly<R>,
    var: &'a str,
}

impl<R: OrderedRing + fmt::Display> fmt::Display for PolyDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.poly.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let negative = c.signum() < 0;
            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            let magnitude = c.abs();
            let text = magnitude.to_string();
            if i > 0 && magnitude.is_one() {
                // coefficient 1 is implicit
            } else if i > 0 && text.contains('/') {
                write!(f, "({text})")?;
            } else {
                write!(f, "{text}")?;
            }

            match i {
                0 => {}
                1 => write!(f, "{}", self.var)?,
                _ => write!(f, "{}^{i}", self.var)?,
            }
        }

        Ok(())
    }
}

impl<R: OrderedRing + fmt::Display> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_in("x"))
    }
}

impl<R: CommutativeRing> Ring for DensePoly<R> {
    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }
}

impl<R: CommutativeRing> std::ops::Add for DensePoly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        DensePoly::add(&self, &rhs)
    }
}

impl<R: CommutativeRing> std::ops::Sub for DensePoly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        DensePoly::sub(&self, &rhs)
    }
}

impl<R: CommutativeRing> std::ops::Mul for DensePoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        DensePoly::mul(&self, &rhs)
    }
}

impl<R: CommutativeRing> std::ops::Neg for DensePoly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        DensePoly::neg(&self)
    }
}

impl<R: CommutativeRing> CommutativeRing for DensePoly<R> {}
impl<R: IntegralDomain> IntegralDomain for DensePoly<R> {}

/// Polynomials over a field form a Euclidean domain (degree as the norm).
impl<F: Field> EuclideanDomain for DensePoly<F> {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), ArithmeticError> {
        poly_div_rem(self, other)
    }
}

//! Algebraic structure traits.
//!
//! This module defines the core algebraic traits that every matrix and
//! polynomial algorithm in the workspace is generic over.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use thiserror::Error;

/// Failures of exact scalar arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor was the exact zero value.
    #[error("division by zero")]
    DivisionByZero,

    /// A division that must be exact left a remainder.
    #[error("inexact division in a Euclidean domain")]
    InexactDivision,
}

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds an integer via repeated addition of `one()`.
    fn from_i64(n: i64) -> Self {
        Self::one().mul_by_scalar(n)
    }

    /// Computes self + self + ... (n times).
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n by repeated squaring.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// An integral domain is a commutative ring with no zero divisors.
pub trait IntegralDomain: CommutativeRing {}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0, there exist q, r such that a = b*q + r
/// and either r = 0 or φ(r) < φ(b).
pub trait EuclideanDomain: IntegralDomain {
    /// Computes the quotient and remainder of division.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `other` is zero.
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), ArithmeticError>;

    /// Divides where the quotient is known to be exact.
    ///
    /// Fraction-free elimination relies on this: a non-zero remainder means
    /// an upstream arithmetic defect.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero divisor and `InexactDivision` when
    /// a remainder is left.
    fn exact_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        let (q, r) = self.div_rem(other)?;
        if r.is_zero() {
            Ok(q)
        } else {
            Err(ArithmeticError::InexactDivision)
        }
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: EuclideanDomain {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `other` is zero.
    fn try_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        other
            .inv()
            .map(|inv| self.clone() * inv)
            .ok_or(ArithmeticError::DivisionByZero)
    }
}

/// Ordered rings expose a sign.
pub trait OrderedRing: Ring + Ord {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}

//! The field of rational numbers Q.

use std::str::FromStr;

use crate::traits::{ArithmeticError, CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};
use cayley_integers::{Integer, ParseRationalError, Rational};

/// The field of rational numbers.
///
/// Wraps `cayley_integers::Rational` and implements the algebraic traits, so
/// every generic matrix and polynomial algorithm can run over it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Creates a rational from a numerator and denominator given as big integers.
    #[must_use]
    pub fn from_parts(num: Integer, den: Integer) -> Option<Self> {
        Rational::checked_new(num, den).map(Self)
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }

    /// Returns the numerator of the reduced fraction.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        self.0.numerator()
    }

    /// Returns the (positive) denominator of the reduced fraction.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        self.0.denominator()
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::from(0))
    }

    fn one() -> Self {
        Self(Rational::from(1))
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        use num_traits::One;
        self.0.is_one()
    }

    fn from_i64(n: i64) -> Self {
        Self::from_integer(n)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self(self.0.clone() * Rational::from(n))
    }
}

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), ArithmeticError> {
        // In a field division is exact, so the remainder is always zero
        Ok((self.try_div(other)?, Self::zero()))
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        self.0.checked_recip().map(Self)
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Integer> for Q {
    fn from(value: Integer) -> Self {
        Self(Rational::from_integer(value))
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl FromStr for Q {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

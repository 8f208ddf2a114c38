//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! number-theoretic helpers the engine needs: divisor enumeration for the
//! bounded factor searches and perfect-square extraction for exact radicals.

use dashu::base::{Abs, Gcd, Signed as DashuSigned, SquareRoot};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        DashuSigned::is_positive(&self.0)
    }

    /// Computes the greatest common divisor (always non-negative).
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Computes the least common multiple (always non-negative).
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Attempts to convert to a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }

    /// Returns `⌊√|self|⌋`.
    #[must_use]
    pub fn isqrt(&self) -> Self {
        Self(IBig::from(self.0.clone().abs().sqrt()))
    }

    /// Returns `r` with `r² = self`, if `self` is a perfect square.
    #[must_use]
    pub fn exact_sqrt(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        let r = self.isqrt();
        (&r * &r == *self).then_some(r)
    }

    /// Returns the positive divisors of `|self|` in ascending order, or
    /// `None` if trial division would have to go past `max_trial`.
    ///
    /// Zero has no finite divisor set and yields an empty vector.
    #[must_use]
    pub fn divisors_bounded(&self, max_trial: u64) -> Option<Vec<Self>> {
        let n = self.abs();
        if n.is_zero() {
            return Some(Vec::new());
        }
        let root = n.isqrt();
        if root.to_u64().map_or(true, |r| r > max_trial) {
            return None;
        }

        let mut small = Vec::new();
        let mut large = Vec::new();
        let mut d = Self::one();
        while d <= root {
            if (n.clone() % d.clone()).is_zero() {
                let cofactor = n.clone() / d.clone();
                if cofactor != d {
                    large.push(cofactor);
                }
                small.push(d.clone());
            }
            d = d + Self::one();
        }

        small.extend(large.into_iter().rev());
        Some(small)
    }

    /// Splits a positive integer as `self = f² · d`.
    ///
    /// Squares of primes below [`SQUARE_TRIAL_LIMIT`] are divided out, then a
    /// remaining perfect square is absorbed into `f`. No full factorization
    /// is attempted, so `d` can keep the square of a large prime when it also
    /// has other factors.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not positive.
    #[must_use]
    pub fn square_split(&self) -> (Self, Self) {
        assert!(self.is_positive(), "square split needs a positive integer");

        let mut rest = self.clone();
        let mut outside = Self::one();
        let mut p = Self::new(2);
        let limit = Self::from(SQUARE_TRIAL_LIMIT);
        while p < limit && &p * &p <= rest {
            let square = &p * &p;
            while (rest.clone() % square.clone()).is_zero() {
                rest = rest / square.clone();
                outside = outside * p.clone();
            }
            p = p + Self::one();
        }

        if let Some(r) = rest.exact_sqrt() {
            return (outside * r, Self::one());
        }
        (outside, rest)
    }
}

/// Trial bound used by [`Integer::square_split`].
pub const SQUARE_TRIAL_LIMIT: u64 = 1000;

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('+').unwrap_or(s);
        Self::from_str_radix(s, 10)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0 % rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

//! Roots modulo a small prime and their Hensel lifts.
//!
//! A simple root `a` of `f` modulo `ℓ` lifts uniquely to a root modulo
//! `ℓᵏ`. Each step solves `f(u + t·ℓᵏ) ≡ 0 (mod ℓᵏ⁺¹)` for `t` with the
//! inverse of `f'(a)` modulo `ℓ`, so only the first derivative value needs
//! inverting.

use cayley_integers::Integer;
use cayley_poly::rational::eval_integer;
use num_traits::{One, Zero};

/// A prime with the simple roots of `f` modulo it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModularRoots {
    /// The prime `ℓ`.
    pub prime: u64,
    /// Roots in `0..ℓ`, ascending.
    pub roots: Vec<u64>,
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// `x mod m` in `0..m`.
fn residue(x: &Integer, m: u64) -> u64 {
    let modulus = Integer::from(m);
    let mut r = x.clone() % modulus.clone();
    if r.is_negative() {
        r = r + &modulus;
    }
    r.to_u64().unwrap_or(0)
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    let product = u128::from(a) * u128::from(b) % u128::from(m);
    u64::try_from(product).unwrap_or(0)
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

fn eval_mod(coeffs: &[u64], x: u64, m: u64) -> u64 {
    coeffs.iter().rev().fold(0, |acc, &c| (mul_mod(acc, x, m) + c) % m)
}

/// Finds the smallest prime `ℓ` not dividing the leading coefficient at
/// which every root of `f mod ℓ` is simple, and returns those roots.
///
/// `coeffs` are integer coefficients in ascending degree of a squarefree
/// polynomial; all but finitely many primes qualify for such input.
#[must_use]
pub fn good_prime_roots(coeffs: &[Integer]) -> ModularRoots {
    let leading = coeffs.last().cloned().unwrap_or_else(Integer::one);

    for prime in (2u64..).filter(|&n| is_prime(n)) {
        if residue(&leading, prime) == 0 {
            continue;
        }
        let reduced: Vec<u64> = coeffs.iter().map(|c| residue(c, prime)).collect();
        let derivative: Vec<u64> = reduced
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| mul_mod(i as u64 % prime, c, prime))
            .collect();

        let roots: Vec<u64> = (0..prime).filter(|&a| eval_mod(&reduced, a, prime) == 0).collect();
        if roots.iter().all(|&a| eval_mod(&derivative, a, prime) != 0) {
            log::trace!("prime {prime} gives {} simple root(s)", roots.len());
            return ModularRoots { prime, roots };
        }
    }

    ModularRoots {
        prime: 2,
        roots: Vec::new(),
    }
}

/// Lifts a simple root `root` of `f mod prime` until the modulus exceeds
/// `bound`, returning `(u, modulus)` with `f(u) ≡ 0 (mod modulus)`.
#[must_use]
pub fn lift_root(coeffs: &[Integer], root: u64, prime: u64, bound: &Integer) -> (Integer, Integer) {
    let reduced: Vec<u64> = coeffs.iter().map(|c| residue(c, prime)).collect();
    let slope = reduced
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .fold(0, |acc, (i, &c)| (mul_mod(acc, root, prime) + mul_mod(i as u64 % prime, c, prime)) % prime);
    let slope_inv = pow_mod(slope, prime - 2, prime);

    let ell = Integer::from(prime);
    let mut u = Integer::from(root);
    let mut modulus = ell.clone();
    while modulus <= *bound {
        let value = eval_integer(coeffs, &u);
        let quotient = value / modulus.clone();
        let t = (prime - residue(&quotient, prime)) % prime;
        let t = mul_mod(t, slope_inv, prime);
        u = u + &(Integer::from(t) * &modulus);
        modulus = modulus * &ell;
    }

    (u, modulus)
}

/// The representative of `x mod m` in `(−m/2, m/2]`.
#[must_use]
pub fn symmetric_residue(x: &Integer, m: &Integer) -> Integer {
    let mut r = x.clone() % m.clone();
    if r.is_negative() {
        r = r + m;
    }
    let half = m.clone() / Integer::new(2);
    if r > half {
        r - m.clone()
    } else if r.is_zero() {
        Integer::zero()
    } else {
        r
    }
}

//! Exact Gram-Schmidt orthonormalization over Q.
//!
//! Orthogonalization stays in Q. Normalization does not: `‖u‖` is in
//! general irrational, so each unit vector is kept as rational coefficients
//! times a single square root `√d`. Perfect squares are pulled out of `d`
//! without factoring it, see [`Integer::square_split`].

use std::fmt;

use cayley_integers::Integer;
use cayley_rings::rationals::Q;
use cayley_rings::traits::{Field, OrderedRing, Ring};
use num_traits::One;

use crate::error::{LinalgError, Result};

/// A number `coeff · √radicand` with positive radicand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surd {
    /// Rational multiplier.
    pub coeff: Q,
    /// Radicand; 1 means the value is rational.
    pub radicand: Integer,
}

impl fmt::Display for Surd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.radicand.is_one() || self.coeff.is_zero() {
            return write!(f, "{}", self.coeff);
        }

        if self.coeff.signum() < 0 {
            write!(f, "-")?;
        }
        let magnitude = self.coeff.abs();
        if magnitude.as_inner().is_integer() {
            if !magnitude.is_one() {
                write!(f, "{magnitude}")?;
            }
        } else {
            write!(f, "({magnitude})")?;
        }
        write!(f, "√{}", self.radicand)
    }
}

/// A unit vector `coeffs · √radicand`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitVector {
    /// Rational coefficients, one per component.
    pub coeffs: Vec<Q>,
    /// Radicand shared by every component.
    pub radicand: Integer,
}

impl UnitVector {
    /// Normalizes a non-zero rational vector exactly.
    ///
    /// With `‖u‖² = p/q` and `pq = f²·d`, `u/‖u‖ = (u·f/p)·√d`. The split
    /// costs a bounded number of trial divisions whatever the size of `pq`.
    ///
    /// # Errors
    ///
    /// `LinearlyDependent { index: 0 }` for the zero vector.
    pub fn normalize(u: &[Q]) -> Result<Self> {
        let norm_sq = dot(u, u);
        if norm_sq.is_zero() {
            return Err(LinalgError::LinearlyDependent { index: 0 });
        }

        let p = norm_sq.numerator();
        let (f, d) = (p.clone() * norm_sq.denominator()).square_split();
        let scale = Q::from(f).try_div(&Q::from(p))?;

        Ok(Self {
            coeffs: u.iter().map(|c| c.clone() * scale.clone()).collect(),
            radicand: d,
        })
    }

    /// Returns the components as surds.
    #[must_use]
    pub fn components(&self) -> Vec<Surd> {
        self.coeffs
            .iter()
            .map(|c| Surd {
                coeff: c.clone(),
                radicand: self.radicand.clone(),
            })
            .collect()
    }

    /// Returns `⟨v, v⟩`, exactly 1 for a unit vector.
    #[must_use]
    pub fn self_inner_product(&self) -> Q {
        dot(&self.coeffs, &self.coeffs) * Q::from(self.radicand.clone())
    }

    /// Returns true if `⟨self, other⟩ = 0`.
    ///
    /// The inner product is `Σ aᵢbᵢ · √(d₁d₂)`, so only the rational sum
    /// needs checking.
    #[must_use]
    pub fn is_orthogonal_to(&self, other: &Self) -> bool {
        dot(&self.coeffs, &other.coeffs).is_zero()
    }
}

impl fmt::Display for UnitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.components().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

/// Output of [`gram_schmidt`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrthonormalBasis {
    /// Unit vectors, one per input vector, in input order.
    pub vectors: Vec<UnitVector>,
    /// The orthogonal (not yet normalized) vectors `uᵢ`.
    pub orthogonal: Vec<Vec<Q>>,
}

impl OrthonormalBasis {
    /// Number of vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns true if there are no vectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

fn dot(a: &[Q], b: &[Q]) -> Q {
    a.iter()
        .zip(b)
        .fold(Q::zero(), |acc, (x, y)| acc + x.clone() * y.clone())
}

/// Orthonormalizes the given vectors in order.
///
/// `uᵢ = vᵢ − Σⱼ (⟨vᵢ,uⱼ⟩/⟨uⱼ,uⱼ⟩)·uⱼ`, then each `uᵢ` is normalized with
/// [`UnitVector::normalize`].
///
/// # Errors
///
/// `Empty` for no vectors or zero-length vectors, `RaggedRows` when lengths
/// differ, `LinearlyDependent` with the index of the first vector whose
/// remainder vanishes.
pub fn gram_schmidt(vectors: &[Vec<Q>]) -> Result<OrthonormalBasis> {
    let dim = vectors.first().map_or(0, Vec::len);
    if dim == 0 {
        return Err(LinalgError::Empty);
    }
    if let Some((row, v)) = vectors.iter().enumerate().find(|(_, v)| v.len() != dim) {
        return Err(LinalgError::RaggedRows {
            row,
            len: v.len(),
            expected: dim,
        });
    }
    log::debug!("gram-schmidt on {} vectors of dimension {dim}", vectors.len());

    let mut orthogonal: Vec<Vec<Q>> = Vec::with_capacity(vectors.len());
    let mut norms: Vec<Q> = Vec::with_capacity(vectors.len());

    for (index, v) in vectors.iter().enumerate() {
        let mut u = v.clone();
        for (uj, norm_j) in orthogonal.iter().zip(&norms) {
            let coeff = dot(v, uj).try_div(norm_j)?;
            for (ui, ujk) in u.iter_mut().zip(uj) {
                *ui = ui.clone() - coeff.clone() * ujk.clone();
            }
        }

        let norm = dot(&u, &u);
        if norm.is_zero() {
            return Err(LinalgError::LinearlyDependent { index });
        }
        orthogonal.push(u);
        norms.push(norm);
    }

    let vectors = orthogonal
        .iter()
        .map(|u| UnitVector::normalize(u))
        .collect::<Result<Vec<_>>>()?;

    Ok(OrthonormalBasis { vectors, orthogonal })
}

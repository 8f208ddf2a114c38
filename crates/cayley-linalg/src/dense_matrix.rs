//! Dense matrices over exact rings.
//!
//! Everything here is generic over the ring traits, so the same type holds
//! rational matrices for elimination and polynomial matrices such as
//! `A − xI` for fraction-free determinants.

use std::fmt;
use std::ops::{Index, IndexMut};

use cayley_rings::traits::{EuclideanDomain, Field, Ring};

use crate::error::{LinalgError, Result};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from rows whose shape is known to be rectangular.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths. Use
    /// [`try_from_rows`](Self::try_from_rows) for untrusted input.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "ragged rows");
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from rows, rejecting empty and ragged input.
    ///
    /// # Errors
    ///
    /// `Empty` for no rows or an empty first row, `RaggedRows` when a row
    /// length differs from the first.
    pub fn try_from_rows(rows: Vec<Vec<R>>) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(LinalgError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(LinalgError::RaggedRows {
                row,
                len: r.len(),
                expected,
            });
        }
        Ok(Self::from_rows(rows))
    }

    /// Creates a matrix whose columns are the given vectors.
    ///
    /// # Errors
    ///
    /// Same conditions as [`try_from_rows`](Self::try_from_rows), applied to
    /// the columns.
    pub fn from_cols(cols: &[Vec<R>]) -> Result<Self> {
        Ok(Self::try_from_rows(cols.to_vec())?.transpose())
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Creates a square matrix with `entries` on the diagonal.
    #[must_use]
    pub fn diagonal(entries: &[R]) -> Self {
        let mut m = Self::zeros(entries.len(), entries.len());
        for (i, e) in entries.iter().enumerate() {
            m[(i, i)] = e.clone();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Fails with `NonSquare` unless the matrix is square.
    ///
    /// # Errors
    ///
    /// `NonSquare` with the actual shape.
    pub fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NonSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Ring::is_zero)
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows).map(|row| self[(row, col)].clone()).collect()
    }

    /// Returns all rows as owned vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<R>> {
        (0..self.num_rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Returns all columns as owned vectors.
    #[must_use]
    pub fn to_cols(&self) -> Vec<Vec<R>> {
        (0..self.num_cols).map(|c| self.col(c)).collect()
    }

    /// Applies `f` to every entry, producing a matrix over another ring.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl Fn(&R) -> S) -> DenseMatrix<S> {
        DenseMatrix {
            data: self.data.iter().map(f).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `x.len()` differs from the column count.
    pub fn mv(&self, x: &[R]) -> Result<Vec<R>> {
        if x.len() != self.num_cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                actual: x.len(),
            });
        }
        Ok((0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x)
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect())
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the inner dimensions differ.
    pub fn mm(&self, other: &Self) -> Result<Self> {
        if self.num_cols != other.num_rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                actual: other.num_rows,
            });
        }

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = R::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    /// Entrywise sum.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the shapes differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Entrywise difference.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the shapes differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(R, R) -> R) -> Result<Self> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.data.len(),
                actual: other.data.len(),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Places `other` to the right of `self`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the row counts differ.
    pub fn hstack(&self, other: &Self) -> Result<Self> {
        if self.num_rows != other.num_rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_rows,
                actual: other.num_rows,
            });
        }
        let rows = (0..self.num_rows)
            .map(|r| self.row(r).iter().chain(other.row(r)).cloned().collect())
            .collect();
        Ok(Self::from_rows(rows))
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        self.map(|v| v.clone() * scalar.clone())
    }

    /// Returns `self − c·I`.
    ///
    /// # Errors
    ///
    /// `NonSquare` for a rectangular matrix.
    pub fn shift_diagonal(&self, c: &R) -> Result<Self> {
        self.require_square()?;
        let mut m = self.clone();
        for i in 0..self.num_rows {
            m[(i, i)] = m[(i, i)].clone() - c.clone();
        }
        Ok(m)
    }

    /// Raises a square matrix to a non-negative power.
    ///
    /// # Errors
    ///
    /// `NonSquare` for a rectangular matrix.
    pub fn pow(&self, n: u32) -> Result<Self> {
        self.require_square()?;
        let mut result = Self::identity(self.num_rows);
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mm(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mm(&base)?;
            }
        }
        Ok(result)
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }

    fn find_pivot(&self, col: usize, from_row: usize) -> Option<usize> {
        (from_row..self.num_rows).find(|&row| !self[(row, col)].is_zero())
    }
}

impl<R: EuclideanDomain> DenseMatrix<R> {
    /// Determinant by Bareiss fraction-free elimination.
    ///
    /// Every intermediate entry stays in the ring: each update
    /// `(m_ij·m_kk − m_ik·m_kj) / m_prev` divides exactly. Over `Q[x]` this
    /// computes `det(A − xI)` without rational functions.
    ///
    /// # Errors
    ///
    /// `NonSquare` for a rectangular matrix. An inexact division surfaces as
    /// `Arithmetic(InexactDivision)` and indicates an arithmetic defect.
    pub fn bareiss_det(&self) -> Result<R> {
        self.require_square()?;
        let n = self.num_rows;
        if n == 0 {
            return Ok(R::one());
        }

        let mut m = self.clone();
        let mut negate = false;
        let mut prev = R::one();

        for k in 0..n - 1 {
            let Some(pivot_row) = m.find_pivot(k, k) else {
                return Ok(R::zero());
            };
            if pivot_row != k {
                m.swap_rows(k, pivot_row);
                negate = !negate;
            }

            for i in k + 1..n {
                for j in k + 1..n {
                    let numer = m[(i, j)].clone() * m[(k, k)].clone() - m[(i, k)].clone() * m[(k, j)].clone();
                    m[(i, j)] = numer.exact_div(&prev)?;
                }
                m[(i, k)] = R::zero();
            }
            prev = m[(k, k)].clone();
        }

        let det = m[(n - 1, n - 1)].clone();
        Ok(if negate { -det } else { det })
    }
}

impl<R: Field> DenseMatrix<R> {
    /// Gaussian elimination with the first non-zero pivot in each column.
    ///
    /// Returns (row-echelon form with unit pivots, rank).
    ///
    /// # Errors
    ///
    /// Propagates `DivisionByZero` from pivot inversion.
    pub fn row_echelon(&self) -> Result<(Self, usize)> {
        let mut m = self.clone();
        let mut pivot_row = 0;

        for pivot_col in 0..m.num_cols {
            if pivot_row == m.num_rows {
                break;
            }
            let Some(found) = m.find_pivot(pivot_col, pivot_row) else {
                continue;
            };
            m.swap_rows(pivot_row, found);

            let inv = R::one().try_div(&m[(pivot_row, pivot_col)])?;
            m.scale_row(pivot_row, &inv);

            for row in pivot_row + 1..m.num_rows {
                if !m[(row, pivot_col)].is_zero() {
                    let factor = -m[(row, pivot_col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }

            pivot_row += 1;
        }

        Ok((m, pivot_row))
    }

    /// Reduced row echelon form by Gauss-Jordan elimination.
    ///
    /// Returns the RREF together with its pivot columns in ascending order.
    ///
    /// # Errors
    ///
    /// Propagates `DivisionByZero` from pivot inversion.
    pub fn rref(&self) -> Result<(Self, Vec<usize>)> {
        let (mut m, rank) = self.row_echelon()?;
        let mut pivots = Vec::with_capacity(rank);

        for pivot_row in 0..rank {
            if let Some(col) = (0..m.num_cols).find(|&c| !m[(pivot_row, c)].is_zero()) {
                pivots.push(col);
            }
        }

        for (pivot_row, &pivot_col) in pivots.iter().enumerate().rev() {
            for row in 0..pivot_row {
                if !m[(row, pivot_col)].is_zero() {
                    let factor = -m[(row, pivot_col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }
        }

        Ok((m, pivots))
    }

    /// Returns the rank.
    ///
    /// # Errors
    ///
    /// Propagates `DivisionByZero` from pivot inversion.
    pub fn rank(&self) -> Result<usize> {
        Ok(self.row_echelon()?.1)
    }

    /// Computes a basis of the null space `{x : Ax = 0}`.
    ///
    /// One vector per free column, in column order, with a 1 in the free
    /// position. An injective matrix yields an empty basis.
    ///
    /// # Errors
    ///
    /// Propagates `DivisionByZero` from pivot inversion.
    pub fn null_space(&self) -> Result<Vec<Vec<R>>> {
        let (rref, pivots) = self.rref()?;
        let mut basis = Vec::new();

        for free in (0..self.num_cols).filter(|c| !pivots.contains(c)) {
            let mut v = vec![R::zero(); self.num_cols];
            v[free] = R::one();
            for (pivot_row, &pivot_col) in pivots.iter().enumerate() {
                v[pivot_col] = -rref[(pivot_row, free)].clone();
            }
            basis.push(v);
        }

        Ok(basis)
    }

    /// Solves `Ax = b`, returning one solution (free variables set to zero)
    /// or `None` if the system is inconsistent.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `b.len()` differs from the row count.
    pub fn solve(&self, b: &[R]) -> Result<Option<Vec<R>>> {
        if b.len() != self.num_rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_rows,
                actual: b.len(),
            });
        }

        let column = DenseMatrix::from_rows(b.iter().map(|v| vec![v.clone()]).collect());
        let (rref, pivots) = self.hstack(&column)?.rref()?;

        if pivots.last() == Some(&self.num_cols) {
            return Ok(None);
        }

        let mut x = vec![R::zero(); self.num_cols];
        for (row, &col) in pivots.iter().enumerate() {
            x[col] = rref[(row, self.num_cols)].clone();
        }
        Ok(Some(x))
    }

    /// Determinant by elimination over the field.
    ///
    /// # Errors
    ///
    /// `NonSquare` for a rectangular matrix.
    pub fn det(&self) -> Result<R> {
        self.require_square()?;
        let n = self.num_rows;
        let mut m = self.clone();
        let mut det = R::one();

        for col in 0..n {
            let Some(pivot_row) = m.find_pivot(col, col) else {
                return Ok(R::zero());
            };
            if pivot_row != col {
                m.swap_rows(col, pivot_row);
                det = -det;
            }

            let pivot = m[(col, col)].clone();
            det = det * pivot.clone();

            for row in col + 1..n {
                if !m[(row, col)].is_zero() {
                    let factor = -m[(row, col)].try_div(&pivot)?;
                    m.add_scaled_row(row, col, &factor);
                }
            }
        }

        Ok(det)
    }

    /// Computes the inverse by reducing `[A | I]`.
    ///
    /// # Errors
    ///
    /// `NonSquare` for a rectangular matrix, `Singular` when the
    /// determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        self.require_square()?;
        let n = self.num_rows;

        let (rref, pivots) = self.hstack(&Self::identity(n))?.rref()?;
        if pivots.len() < n || pivots.iter().any(|&p| p >= n) {
            return Err(LinalgError::Singular);
        }

        let mut inv = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                inv[(i, j)] = rref[(i, n + j)].clone();
            }
        }
        Ok(inv)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

/// Rows on separate lines, entries separated by single spaces.
impl<R: fmt::Display> fmt::Display for DenseMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows {
            if row > 0 {
                writeln!(f)?;
            }
            let start = row * self.num_cols;
            for (k, entry) in self.data[start..start + self.num_cols].iter().enumerate() {
                if k > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{entry}")?;
            }
        }
        Ok(())
    }
}

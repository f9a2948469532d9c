//! Dense row-major matrix of `f64`.
//!
//! Every constructor enforces `rows >= 1`, `cols >= 1` and equal row
//! lengths, so the algorithms downstream never re-check ragged input.
//! All operations here are non-mutating and return a new matrix.
#![allow(clippy::needless_range_loop)]

use std::fmt;
use std::ops::Index;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use crate::core::error::{TitanError, TitanResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Build from nested rows; rejects empty and ragged input.
    pub fn new(data: Vec<Vec<f64>>) -> TitanResult<Self> {
        let cols = match data.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(TitanError::shape("Matrix must have at least one row and one column.")),
        };
        if data.iter().any(|row| row.len() != cols) {
            return Err(TitanError::shape("All rows must have the same length."));
        }
        Ok(Matrix { data })
    }

    /// Build a single-column matrix, the shape 2D points take.
    pub fn column(values: &[f64]) -> TitanResult<Self> {
        Matrix::new(values.iter().map(|&v| vec![v]).collect())
    }

    pub fn zeros(rows: usize, cols: usize) -> TitanResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(TitanError::invalid_argument(
                "The matrix dimensions must be positive integers.",
            ));
        }
        Ok(Matrix { data: vec![vec![0.0; cols]; rows] })
    }

    pub fn identity(size: usize) -> TitanResult<Self> {
        let mut identity = Matrix::zeros(size, size)?;
        for i in 0..size {
            identity.data[i][i] = 1.0;
        }
        Ok(identity)
    }

    /// Entries drawn uniformly from `[low, high)` using the caller's generator.
    pub fn random_uniform<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> TitanResult<Self> {
        if low.is_nan() || high.is_nan() || low >= high {
            return Err(TitanError::invalid_argument("uniform range must satisfy low < high"));
        }
        let uniform = Uniform::new(low, high);
        let mut m = Matrix::zeros(rows, cols)?;
        for row in m.data.iter_mut() {
            for value in row.iter_mut() {
                *value = uniform.sample(rng);
            }
        }
        Ok(m)
    }

    /// Entries drawn from N(mean, std_dev²) using the caller's generator.
    pub fn random_normal<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        mean: f64,
        std_dev: f64,
        rng: &mut R,
    ) -> TitanResult<Self> {
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return Err(TitanError::invalid_argument(
                "standard deviation must be finite and non-negative",
            ));
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| TitanError::InvalidArgument(format!("normal distribution: {e}")))?;
        let mut m = Matrix::zeros(rows, cols)?;
        for row in m.data.iter_mut() {
            for value in row.iter_mut() {
                *value = normal.sample(rng);
            }
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data[0].len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(Vec::as_slice)
    }

    pub fn to_vec(&self) -> Vec<Vec<f64>> {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<Vec<f64>> {
        self.data
    }

    /// Independent copy; callers can mutate the result freely.
    pub fn deep_copy(&self) -> Matrix {
        self.clone()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn ensure_square(&self) -> TitanResult<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(TitanError::shape("Matrix must be square."))
        }
    }

    /// Points handed to the 2D transforms are 2x1 columns.
    pub fn check_vector_2d(&self) -> TitanResult<()> {
        if self.rows() != 2 {
            return Err(TitanError::Dimension(self.rows()));
        }
        Ok(())
    }

    pub fn get_col(&self, col: usize) -> TitanResult<Vec<f64>> {
        if col >= self.cols() {
            return Err(TitanError::Index(format!(
                "column {} out of range for {} columns",
                col,
                self.cols()
            )));
        }
        Ok(self.data.iter().map(|row| row[col]).collect())
    }

    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let mut transposed = vec![vec![0.0; rows]; cols];
        for i in 0..rows {
            for j in 0..cols {
                transposed[j][i] = self.data[i][j];
            }
        }
        Matrix { data: transposed }
    }

    /// Apply `f` to every entry.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Matrix {
        Matrix {
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&v| f(v)).collect())
                .collect(),
        }
    }

    /// Apply `f` to every entry together with a fixed set of extra arguments.
    pub fn map_with<A: ?Sized, F: Fn(f64, &A) -> f64>(&self, args: &A, f: F) -> Matrix {
        self.map(|v| f(v, args))
    }

    fn check_row(&self, row: usize) -> TitanResult<()> {
        if row >= self.rows() {
            return Err(TitanError::Index(format!(
                "row {} out of range for {} rows",
                row,
                self.rows()
            )));
        }
        Ok(())
    }

    /// Multiply one row by `scale`.
    pub fn row_scale(&self, row: usize, scale: f64) -> TitanResult<Matrix> {
        self.check_row(row)?;
        let mut result = self.clone();
        for v in result.data[row].iter_mut() {
            *v *= scale;
        }
        Ok(result)
    }

    /// Exchange two rows.
    pub fn row_switch(&self, row1: usize, row2: usize) -> TitanResult<Matrix> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        let mut result = self.clone();
        result.data.swap(row1, row2);
        Ok(result)
    }

    /// Add `scale` times row `from` onto row `to`.
    pub fn row_add_multiple(&self, from: usize, to: usize, scale: f64) -> TitanResult<Matrix> {
        self.check_row(from)?;
        self.check_row(to)?;
        let mut result = self.clone();
        for j in 0..self.cols() {
            result.data[to][j] = self.data[to][j] + scale * self.data[from][j];
        }
        Ok(result)
    }

    // Crate-internal access for the elimination routines, which work on
    // an owned copy and swap whole rows.
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<f64>> {
        &mut self.data
    }

    pub(crate) fn from_rows_unchecked(data: Vec<Vec<f64>>) -> Matrix {
        debug_assert!(!data.is_empty() && !data[0].is_empty());
        Matrix { data }
    }

    /// True when every entry is within `epsilon` of `other`'s.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .flatten()
                .zip(other.data.iter().flatten())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = TitanError;

    fn try_from(data: Vec<Vec<f64>>) -> TitanResult<Self> {
        Matrix::new(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, v)?,
                    None => write!(f, "{}", v)?,
                }
            }
        }
        Ok(())
    }
}

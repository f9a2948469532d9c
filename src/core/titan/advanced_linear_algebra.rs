//! Decomposition, elimination and inversion with partial pivoting.
//!
//! Pivot ties are broken by the first maximum met in ascending row order,
//! so results are deterministic.
#![allow(clippy::needless_range_loop)]

use serde::Serialize;

use crate::core::error::{TitanError, TitanResult};
use crate::core::titan::matrix::Matrix;

/// Pivot magnitude at or below which elimination stops.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Factors produced by [`lup_decomposition`]: `P·A = L·U`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LupDecomposition {
    /// Unit lower-triangular.
    pub l: Matrix,
    /// Upper-triangular.
    pub u: Matrix,
    /// Row permutation applied while pivoting.
    pub p: Matrix,
}

/// LU decomposition with partial pivoting (Crout sweep, one column at a time).
///
/// At column `j` the row with the largest absolute value among rows `j..n`
/// becomes the pivot; the working array and the permutation are swapped
/// together. L and U are then read off the pivoted array.
pub fn lup_decomposition(a: &Matrix) -> TitanResult<LupDecomposition> {
    a.ensure_square()?;
    let size = a.rows();
    let mut lu = a.to_vec();
    let mut p = Matrix::identity(size)?.into_vec();
    let mut current_column = vec![0.0; size];

    for j in 0..size {
        for i in 0..size {
            current_column[i] = lu[i][j];
        }
        for i in 0..size {
            let s: f64 = (0..i.min(j)).map(|k| lu[i][k] * current_column[k]).sum();
            current_column[i] -= s;
            lu[i][j] = current_column[i];
        }

        let mut pivot = j;
        for i in (j + 1)..size {
            if current_column[i].abs() > current_column[pivot].abs() {
                pivot = i;
            }
        }
        if pivot != j {
            debug_log!("lup: column {j}: swapping rows {j} and {pivot}");
            lu.swap(pivot, j);
            p.swap(pivot, j);
        }

        if lu[j][j] != 0.0 {
            let diag = lu[j][j];
            for i in (j + 1)..size {
                lu[i][j] /= diag;
            }
        }
    }

    let mut l = Matrix::identity(size)?.into_vec();
    let mut u = Matrix::identity(size)?.into_vec();
    for i in 0..size {
        for j in 0..size {
            if i > j {
                l[i][j] = lu[i][j];
            } else {
                u[i][j] = lu[i][j];
            }
        }
    }

    Ok(LupDecomposition {
        l: Matrix::from_rows_unchecked(l),
        u: Matrix::from_rows_unchecked(u),
        p: Matrix::from_rows_unchecked(p),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationStatus {
    /// Every pivot was usable; the matrix is in reduced row-echelon form.
    Reduced,
    /// Elimination stopped at this pivot row; the matrix is only partially reduced.
    Singular { pivot: usize },
}

/// Outcome of [`gauss_jordan_eliminate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Elimination {
    pub matrix: Matrix,
    pub status: EliminationStatus,
}

impl Elimination {
    pub fn is_singular(&self) -> bool {
        matches!(self.status, EliminationStatus::Singular { .. })
    }

    /// Turn a degenerate elimination into `TitanError::Singular`.
    pub fn into_result(self) -> TitanResult<Matrix> {
        match self.status {
            EliminationStatus::Reduced => Ok(self.matrix),
            EliminationStatus::Singular { pivot } => Err(TitanError::Singular { pivot }),
        }
    }
}

/// Gauss-Jordan elimination to reduced row-echelon form.
///
/// Works on a copy: the input is never modified. When a pivot's magnitude
/// falls to `epsilon` or below, elimination stops and the partially reduced
/// matrix is returned tagged `Singular`; that is a result, not an error.
pub fn gauss_jordan_eliminate(m: &Matrix, epsilon: f64) -> Elimination {
    let mut work = m.deep_copy();
    let status = eliminate_rows(work.rows_mut(), epsilon);
    Elimination { matrix: work, status }
}

/// Alias of [`gauss_jordan_eliminate`].
pub fn row_reduce(m: &Matrix, epsilon: f64) -> Elimination {
    gauss_jordan_eliminate(m, epsilon)
}

fn eliminate_rows(m: &mut [Vec<f64>], eps: f64) -> EliminationStatus {
    let h = m.len();
    let w = m[0].len();
    let pivots = h.min(w);

    for y in 0..pivots {
        let mut maxrow = y;
        for y2 in (y + 1)..h {
            if m[y2][y].abs() > m[maxrow][y].abs() {
                maxrow = y2;
            }
        }
        if maxrow != y {
            debug_log!("gauss-jordan: pivot {y}: swapping in row {maxrow}");
            m.swap(y, maxrow);
        }

        if m[y][y].abs() <= eps {
            debug_log!("gauss-jordan: pivot {y} is {:e}, matrix is singular", m[y][y]);
            return EliminationStatus::Singular { pivot: y };
        }

        // Eliminate column below the pivot
        for y2 in (y + 1)..h {
            let c = m[y2][y] / m[y][y];
            for x in y..w {
                let delta = m[y][x] * c;
                m[y2][x] -= delta;
            }
        }
    }

    // Back-substitute, then normalize each pivot row
    for y in (0..pivots).rev() {
        let c = m[y][y];
        for y2 in 0..y {
            // descending so m[y2][y] is consumed last
            for x in (y..w).rev() {
                let delta = m[y][x] * m[y2][y] / c;
                m[y2][x] -= delta;
            }
        }
        m[y][y] /= c;
        for x in h..w {
            m[y][x] /= c;
        }
    }

    EliminationStatus::Reduced
}

fn augment_with_identity(m: &Matrix) -> TitanResult<Matrix> {
    let n = m.rows();
    let identity = Matrix::identity(n)?;
    let augmented = m
        .iter_rows()
        .zip(identity.iter_rows())
        .map(|(row, id)| row.iter().chain(id).copied().collect())
        .collect();
    Ok(Matrix::from_rows_unchecked(augmented))
}

fn right_half(m: &Matrix, n: usize) -> Matrix {
    Matrix::from_rows_unchecked(m.iter_rows().map(|row| row[n..].to_vec()).collect())
}

/// Inverse via Gauss-Jordan on `[A | I]`.
///
/// A singular input is not detected here: the right half of the partially
/// reduced system is returned as-is. Use [`matrix_inverse_checked`] to get
/// an error instead.
pub fn matrix_inverse(m: &Matrix) -> TitanResult<Matrix> {
    m.ensure_square()?;
    let reduced = gauss_jordan_eliminate(&augment_with_identity(m)?, DEFAULT_EPSILON);
    Ok(right_half(&reduced.matrix, m.rows()))
}

/// Like [`matrix_inverse`] but fails with `Singular` on a degenerate pivot.
pub fn matrix_inverse_checked(m: &Matrix, epsilon: f64) -> TitanResult<Matrix> {
    m.ensure_square()?;
    let reduced = gauss_jordan_eliminate(&augment_with_identity(m)?, epsilon).into_result()?;
    Ok(right_half(&reduced, m.rows()))
}

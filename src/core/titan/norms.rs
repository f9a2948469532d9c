//! Vector and matrix norms, band structure and diagonal dominance.

use crate::core::error::{TitanError, TitanResult};
use crate::core::titan::matrix::Matrix;

/// p-norm of a vector.
///
/// `p = f64::INFINITY` gives the largest absolute entry and
/// `p = f64::NEG_INFINITY` the smallest; any other `p` the generalized
/// `(Σ|v|^p)^(1/p)`.
pub fn vector_norm(v: &[f64], p: f64) -> TitanResult<f64> {
    if v.is_empty() {
        return Err(TitanError::shape("Vector must have at least one entry."));
    }
    let abs = v.iter().map(|x| x.abs());
    Ok(if p == f64::INFINITY {
        abs.fold(0.0, f64::max)
    } else if p == f64::NEG_INFINITY {
        abs.fold(f64::INFINITY, f64::min)
    } else {
        abs.map(|x| x.powf(p)).sum::<f64>().powf(1.0 / p)
    })
}

fn row_sums(m: &Matrix) -> Vec<f64> {
    m.iter_rows().map(|row| row.iter().map(|x| x.abs()).sum()).collect()
}

fn col_sums(m: &Matrix) -> Vec<f64> {
    row_sums(&m.transpose())
}

/// Matrix norm selected by `p`:
///
/// - `None`: Frobenius
/// - `±∞`: max / min absolute row sum
/// - `±1`: max / min absolute column sum
/// - `±2`: singular-value norms, not supported
/// - anything else: entry-wise p-norm
pub fn matrix_norm(m: &Matrix, p: Option<f64>) -> TitanResult<f64> {
    let Some(p) = p else {
        return Ok(m.iter_rows().flatten().map(|x| x * x).sum::<f64>().sqrt());
    };
    let max = |sums: Vec<f64>| sums.into_iter().fold(0.0, f64::max);
    let min = |sums: Vec<f64>| sums.into_iter().fold(f64::INFINITY, f64::min);

    if p == f64::INFINITY {
        Ok(max(row_sums(m)))
    } else if p == f64::NEG_INFINITY {
        Ok(min(row_sums(m)))
    } else if p == 1.0 {
        Ok(max(col_sums(m)))
    } else if p == -1.0 {
        Ok(min(col_sums(m)))
    } else if p == 2.0 || p == -2.0 {
        Err(TitanError::not_implemented("singular value norms are not supported"))
    } else {
        Ok(m.iter_rows()
            .flatten()
            .map(|x| x.abs().powf(p))
            .sum::<f64>()
            .powf(1.0 / p))
    }
}

fn ensure_band_input(m: &Matrix) -> TitanResult<()> {
    if m.rows() < 2 {
        return Err(TitanError::shape("Matrix must have at least 2 rows."));
    }
    Ok(())
}

/// Checks the first superdiagonal outside upper bandwidth `q` for zeros.
pub fn is_upper_band(m: &Matrix, q: usize) -> TitanResult<bool> {
    ensure_band_input(m)?;
    Ok((q.saturating_add(1)..m.cols())
        .enumerate()
        .take_while(|&(row, _)| row < m.rows())
        .all(|(row, col)| m[(row, col)] == 0.0))
}

/// Checks the first subdiagonal outside lower bandwidth `p` for zeros.
pub fn is_lower_band(m: &Matrix, p: usize) -> TitanResult<bool> {
    ensure_band_input(m)?;
    Ok((p.saturating_add(1)..m.rows())
        .enumerate()
        .take_while(|&(col, _)| col < m.cols())
        .all(|(col, row)| m[(row, col)] == 0.0))
}

fn off_diagonal_sum(line: &[f64], i: usize) -> f64 {
    line.iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(_, x)| x.abs())
        .sum()
}

fn dominance(m: &Matrix, by_column: bool, strict: bool) -> TitanResult<bool> {
    m.ensure_square()?;
    let lines = if by_column { m.transpose() } else { m.clone() };
    let dominant = lines.iter_rows().enumerate().all(|(i, line)| {
        let diag = line[i].abs();
        let rest = off_diagonal_sum(line, i);
        if strict { diag > rest } else { diag >= rest }
    });
    Ok(dominant)
}

pub fn is_row_dd(m: &Matrix) -> TitanResult<bool> {
    dominance(m, false, false)
}

pub fn is_strictly_row_dd(m: &Matrix) -> TitanResult<bool> {
    dominance(m, false, true)
}

pub fn is_column_dd(m: &Matrix) -> TitanResult<bool> {
    dominance(m, true, false)
}

pub fn is_strictly_column_dd(m: &Matrix) -> TitanResult<bool> {
    dominance(m, true, true)
}

//! Element-wise arithmetic, products and the determinant.
#![allow(clippy::needless_range_loop)]

use crate::core::error::{TitanError, TitanResult};
use crate::core::titan::matrix::Matrix;

fn ensure_same_shape(a: &Matrix, b: &Matrix) -> TitanResult<()> {
    if a.shape() != b.shape() {
        return Err(TitanError::mismatch(a.shape(), b.shape()));
    }
    Ok(())
}

fn zip_with(a: &Matrix, b: &Matrix, f: impl Fn(f64, f64) -> f64) -> TitanResult<Matrix> {
    ensure_same_shape(a, b)?;
    Ok(Matrix::from_rows_unchecked(
        a.iter_rows()
            .zip(b.iter_rows())
            .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| f(x, y)).collect())
            .collect(),
    ))
}

pub fn addition(a: &Matrix, b: &Matrix) -> TitanResult<Matrix> {
    zip_with(a, b, |x, y| x + y)
}

pub fn subtraction(a: &Matrix, b: &Matrix) -> TitanResult<Matrix> {
    zip_with(a, b, |x, y| x - y)
}

fn vector_mismatch(a: &[f64], b: &[f64]) -> TitanError {
    TitanError::mismatch((a.len(), 1), (b.len(), 1))
}

/// Flat-vector form of [`addition`].
pub fn add_vectors(a: &[f64], b: &[f64]) -> TitanResult<Vec<f64>> {
    if a.len() != b.len() {
        return Err(vector_mismatch(a, b));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Flat-vector form of [`subtraction`].
pub fn subtract_vectors(a: &[f64], b: &[f64]) -> TitanResult<Vec<f64>> {
    if a.len() != b.len() {
        return Err(vector_mismatch(a, b));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

pub fn scalar(m: &Matrix, value: f64) -> Matrix {
    m.map(|v| value * v)
}

pub fn transpose(m: &Matrix) -> Matrix {
    m.transpose()
}

pub fn identity_matrix(size: usize) -> TitanResult<Matrix> {
    Matrix::identity(size)
}

pub fn dot_product(v1: &[f64], v2: &[f64]) -> TitanResult<f64> {
    // Computes the dot product of two vectors
    if v1.len() != v2.len() {
        Err(vector_mismatch(v1, v2))
    } else {
        Ok(v1.iter().zip(v2.iter()).map(|(a, b)| a * b).sum())
    }
}

/// Standard matrix product. `m2` is transposed first so every entry is a
/// dot product of two contiguous rows.
pub fn matrix_multiply(m1: &Matrix, m2: &Matrix) -> TitanResult<Matrix> {
    if m1.cols() != m2.rows() {
        return Err(TitanError::mismatch(m1.shape(), m2.shape()));
    }

    let m2_t = m2.transpose();
    let mut result = vec![vec![0.0; m2.cols()]; m1.rows()];
    for i in 0..m1.rows() {
        for j in 0..m2.cols() {
            result[i][j] = dot_product(m1.row(i), m2_t.row(j))?;
        }
    }

    Ok(Matrix::from_rows_unchecked(result))
}

/// Determinant with closed forms for 1x1 and 2x2.
///
/// Larger matrices use the broken-diagonal sum: for each column `c`, the
/// product along the wrapped diagonal `(r, (c + r) mod n)` minus the product
/// along the wrapped anti-diagonal `(r, (c - r) mod n)`. This is exact up to
/// 3x3 (it is the rule of Sarrus there) but is NOT a general determinant for
/// n >= 4; it is kept for compatibility with existing results. Use
/// `lup_decomposition` when a true determinant is needed.
pub fn determinant(m: &Matrix) -> TitanResult<f64> {
    m.ensure_square()?;
    let n = m.rows();

    if n == 1 {
        return Ok(m[(0, 0)]);
    }

    if n == 2 {
        return Ok(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]);
    }

    let mut det = 0.0;
    for col in 0..n {
        let mut diag_right = m[(0, col)];
        let mut diag_left = m[(0, col)];
        for row in 1..n {
            diag_right *= m[(row, (col + row) % n)];
            diag_left *= m[(row, (col + n - row) % n)];
        }
        det += diag_right - diag_left;
    }

    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::new(rows).unwrap()
    }

    #[test]
    fn add_and_subtract() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![4.0, 3.0], vec![2.0, 1.0]]);
        assert_eq!(addition(&a, &b).unwrap().to_vec(), vec![vec![5.0; 2]; 2]);
        assert_eq!(
            subtraction(&a, &b).unwrap().to_vec(),
            vec![vec![-3.0, -1.0], vec![1.0, 3.0]]
        );
        let c = m(vec![vec![1.0, 2.0, 3.0]]);
        assert!(matches!(addition(&a, &c), Err(TitanError::ShapeMismatch { .. })));
    }

    #[test]
    fn vectors() {
        assert_eq!(add_vectors(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), vec![4.0, 6.0]);
        assert_eq!(subtract_vectors(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), vec![-2.0, -2.0]);
        assert!(add_vectors(&[1.0], &[1.0, 2.0]).is_err());
        assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert!(matches!(dot_product(&[1.0], &[]), Err(TitanError::ShapeMismatch { .. })));
    }

    #[test]
    fn scalar_does_not_mutate() {
        let a = m(vec![vec![1.0, -2.0]]);
        assert_eq!(scalar(&a, 3.0).to_vec(), vec![vec![3.0, -6.0]]);
        assert_eq!(a.to_vec(), vec![vec![1.0, -2.0]]);
    }

    #[test]
    fn multiply_rectangular() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = m(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]);
        let c = matrix_multiply(&a, &b).unwrap();
        assert_eq!(c.to_vec(), vec![vec![58.0, 64.0], vec![139.0, 154.0]]);
        assert!(matches!(matrix_multiply(&a, &a), Err(TitanError::ShapeMismatch { .. })));
    }

    #[test]
    fn determinant_closed_forms() {
        assert_eq!(determinant(&m(vec![vec![7.0]])).unwrap(), 7.0);
        assert_eq!(determinant(&m(vec![vec![4.0, 6.0], vec![3.0, 8.0]])).unwrap(), 14.0);
    }

    #[test]
    fn determinant_three_by_three_is_sarrus() {
        let a = m(vec![
            vec![2.0, -3.0, 1.0],
            vec![2.0, 0.0, -1.0],
            vec![1.0, 4.0, 5.0],
        ]);
        assert!((determinant(&a).unwrap() - 49.0).abs() < 1e-12);
    }

    #[test]
    fn determinant_four_by_four_follows_broken_diagonals() {
        // Broken diagonals of the identity: only the main diagonal is
        // non-zero and no anti-diagonal is, so the sum is 1.
        let i = Matrix::identity(4).unwrap();
        assert_eq!(determinant(&i).unwrap(), 1.0);
        // A true determinant of this permutation matrix is -1; the
        // broken-diagonal sum sees neither of its cycles and yields 0.
        let p = m(vec![
            vec![0.0, 1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(determinant(&p).unwrap(), 0.0);
    }

    #[test]
    fn determinant_requires_square() {
        let a = m(vec![vec![1.0, 2.0]]);
        assert!(matches!(determinant(&a), Err(TitanError::Shape(_))));
    }
}

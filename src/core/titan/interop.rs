//! Conversions to the nalgebra / num-complex types (feature: `interop`).
use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use crate::core::error::TitanResult;
use crate::core::titan::complex_numbers::Complex;
use crate::core::titan::matrix::Matrix;

impl From<Complex> for C64 {
    fn from(z: Complex) -> Self {
        C64::new(z.re(), z.im())
    }
}

impl From<C64> for Complex {
    fn from(z: C64) -> Self {
        Complex::new(z.re, z.im)
    }
}

impl From<&Matrix> for DMatrix<f64> {
    fn from(m: &Matrix) -> Self {
        DMatrix::from_fn(m.rows(), m.cols(), |i, j| m[(i, j)])
    }
}

/// Fails with `Shape` for a matrix with no rows or columns.
pub fn from_dmatrix(m: &DMatrix<f64>) -> TitanResult<Matrix> {
    Matrix::new(
        (0..m.nrows())
            .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
            .collect(),
    )
}

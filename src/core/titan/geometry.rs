//! 2D geometric transforms on column points `[[x], [y]]`.
//!
//! Each transform builds a small matrix and applies it with
//! `matrix_multiply`.

use crate::core::error::TitanResult;
use crate::core::titan::linear_algebra::matrix_multiply;
use crate::core::titan::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShearAxis {
    X,
    Y,
}

fn transform(rows: Vec<Vec<f64>>, point: &Matrix) -> TitanResult<Matrix> {
    point.check_vector_2d()?;
    let transformation = Matrix::new(rows)?;
    matrix_multiply(&transformation, point)
}

/// Rotate `point` by `degrees` about the origin.
pub fn rotate(point: &Matrix, degrees: f64, direction: Rotation) -> TitanResult<Matrix> {
    let negate = match direction {
        Rotation::Clockwise => -1.0,
        Rotation::CounterClockwise => 1.0,
    };
    let radians = degrees.to_radians();
    transform(
        vec![
            vec![radians.cos(), -negate * radians.sin()],
            vec![negate * radians.sin(), radians.cos()],
        ],
        point,
    )
}

pub fn scale(point: &Matrix, sx: f64, sy: f64) -> TitanResult<Matrix> {
    transform(vec![vec![sx, 0.0], vec![0.0, sy]], point)
}

/// Shear along one axis by factor `k`.
pub fn shear(point: &Matrix, k: f64, axis: ShearAxis) -> TitanResult<Matrix> {
    let (kx, ky) = match axis {
        ShearAxis::X => (k, 0.0),
        ShearAxis::Y => (0.0, k),
    };
    transform(vec![vec![1.0, kx], vec![ky, 1.0]], point)
}

/// Translate by `(tx, ty)` through homogeneous coordinates.
pub fn affine(point: &Matrix, tx: f64, ty: f64) -> TitanResult<Matrix> {
    point.check_vector_2d()?;
    let transformation = Matrix::new(vec![
        vec![1.0, 0.0, tx],
        vec![0.0, 1.0, ty],
        vec![0.0, 0.0, 1.0],
    ])?;
    let homogeneous = Matrix::column(&[point[(0, 0)], point[(1, 0)], 1.0])?;
    let moved = matrix_multiply(&transformation, &homogeneous)?;
    Matrix::column(&[moved[(0, 0)], moved[(1, 0)]])
}

//! Row/column permutation and zig-zag matrix construction.

use std::str::FromStr;

use crate::core::error::{TitanError, TitanResult};
use crate::core::titan::matrix::Matrix;

fn check_order(order: &[usize], len: usize, what: &str) -> TitanResult<()> {
    if order.len() != len {
        return Err(TitanError::Index(format!(
            "reordering has {} entries but the matrix has {} {}",
            order.len(),
            len,
            what
        )));
    }
    if let Some(&bad) = order.iter().find(|&&i| i >= len) {
        return Err(TitanError::Index(format!(
            "{} index {} out of range 0..{}",
            what, bad, len
        )));
    }
    Ok(())
}

/// Row `i` of the result is row `order[i]` of `m`.
pub fn reorder_rows(m: &Matrix, order: &[usize]) -> TitanResult<Matrix> {
    check_order(order, m.rows(), "rows")?;
    Matrix::new(order.iter().map(|&i| m.row(i).to_vec()).collect())
}

/// Column `j` of the result is column `order[j]` of `m`.
pub fn reorder_cols(m: &Matrix, order: &[usize]) -> TitanResult<Matrix> {
    check_order(order, m.cols(), "columns")?;
    let cols = order
        .iter()
        .map(|&j| m.get_col(j))
        .collect::<TitanResult<Vec<_>>>()?;
    Ok(Matrix::new(cols)?.transpose())
}

pub fn reverse_rows(m: &Matrix) -> TitanResult<Matrix> {
    let order: Vec<usize> = (0..m.rows()).rev().collect();
    reorder_rows(m, &order)
}

pub fn reverse_cols(m: &Matrix) -> TitanResult<Matrix> {
    let order: Vec<usize> = (0..m.cols()).rev().collect();
    reorder_cols(m, &order)
}

/// Corner a zig-zag path starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Direction of the path's first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl FromStr for Corner {
    type Err = TitanError;

    fn from_str(s: &str) -> TitanResult<Self> {
        match s {
            "TL" => Ok(Corner::TopLeft),
            "TR" => Ok(Corner::TopRight),
            "BL" => Ok(Corner::BottomLeft),
            "BR" => Ok(Corner::BottomRight),
            other => Err(TitanError::InvalidArgument(format!(
                "unknown corner {other:?}; expected TL, TR, BL or BR"
            ))),
        }
    }
}

impl FromStr for Axis {
    type Err = TitanError;

    fn from_str(s: &str) -> TitanResult<Self> {
        match s {
            "H" => Ok(Axis::Horizontal),
            "V" => Ok(Axis::Vertical),
            other => Err(TitanError::InvalidArgument(format!(
                "unknown direction {other:?}; expected H or V"
            ))),
        }
    }
}

/// n×n matrix of 1..=n² laid along a boustrophedon diagonal path.
///
/// Only the bottom-right/horizontal layout is generated directly; the
/// other seven come from reversing rows/columns and transposing it.
pub fn zigzag(n: usize, corner: Corner, axis: Axis) -> TitanResult<Matrix> {
    if n <= 1 {
        return Err(TitanError::invalid_argument("Matrix size must be at least 2x2."));
    }
    let brh = bottom_right_horizontal(n);
    match (corner, axis) {
        (Corner::BottomRight, Axis::Horizontal) => Ok(brh),
        (Corner::BottomRight, Axis::Vertical) => Ok(brh.transpose()),
        (Corner::BottomLeft, Axis::Horizontal) => reverse_cols(&brh),
        (Corner::BottomLeft, Axis::Vertical) => reverse_rows(&top_left(&brh)?.transpose()),
        (Corner::TopRight, Axis::Horizontal) => reverse_rows(&brh),
        (Corner::TopRight, Axis::Vertical) => reverse_rows(&brh.transpose()),
        (Corner::TopLeft, Axis::Horizontal) => top_left(&brh),
        (Corner::TopLeft, Axis::Vertical) => Ok(top_left(&brh)?.transpose()),
    }
}

fn top_left(brh: &Matrix) -> TitanResult<Matrix> {
    reverse_cols(&reverse_rows(brh)?)
}

/// String-selector form of [`zigzag`]: corner `TL|TR|BL|BR`, direction `H|V`.
pub fn zigzag_from_str(n: usize, corner: &str, dir: &str) -> TitanResult<Matrix> {
    zigzag(n, corner.parse()?, dir.parse()?)
}

// Fill from both ends: the top row counts down from n² and the bottom row
// up from 1, then each diagonal is walked from those anchors.
fn bottom_right_horizontal(n: usize) -> Matrix {
    let mut m = vec![vec![0.0; n]; n];
    let (mut tl, mut br, mut inc) = (n * n, 1, 1);
    let mut jump = false;
    m[0][0] = tl as f64;
    m[n - 1][n - 1] = br as f64;
    for i in 1..n {
        if jump {
            tl -= 4 * inc;
            br += 4 * inc;
            inc += 1;
        } else {
            tl -= 1;
            br += 1;
        }
        m[0][i] = tl as f64;
        m[n - 1][n - 1 - i] = br as f64;
        jump = !jump;
    }

    // diagonals hanging off the top row
    let mut dec = true;
    for i in 1..n {
        let mut val = m[0][i];
        for j in 1..=i {
            val += if dec { -1.0 } else { 1.0 };
            m[j][i - j] = val;
        }
        dec = !dec;
    }

    // diagonals rising from the bottom row
    let mut dec = n % 2 == 0;
    for i in 1..n - 1 {
        let mut val = m[n - 1][i];
        for j in 1..n - i {
            val += if dec { -1.0 } else { 1.0 };
            m[n - 1 - j][i + j] = val;
        }
        dec = !dec;
    }

    Matrix::from_rows_unchecked(m)
}

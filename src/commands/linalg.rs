use anyhow::{bail, Context, Result};
use colored::Colorize;

use super::{parse_matrix, parse_vector, Output};
use crate::config::TitanConfig;
use crate::core::titan::{advanced_linear_algebra as ala, linear_algebra, norms, reorder};

pub fn determinant(matrix: &str, out: &Output) -> Result<()> {
    let m = parse_matrix(matrix)?;
    let det = linear_algebra::determinant(&m).context("determinant failed")?;
    out.scalar(det)
}

pub fn inverse(matrix: &str, checked: bool, cfg: &TitanConfig, out: &Output) -> Result<()> {
    let m = parse_matrix(matrix)?;
    let inv = if checked {
        ala::matrix_inverse_checked(&m, cfg.elimination_epsilon)
    } else {
        ala::matrix_inverse(&m)
    }
    .context("inverse failed")?;
    out.matrix(None, &inv)
}

pub fn lup(matrix: &str, out: &Output) -> Result<()> {
    let m = parse_matrix(matrix)?;
    let lup = ala::lup_decomposition(&m).context("lup decomposition failed")?;
    if out.json {
        return out.json(&lup);
    }
    out.matrix(Some("L"), &lup.l)?;
    out.matrix(Some("U"), &lup.u)?;
    out.matrix(Some("P"), &lup.p)
}

pub fn rref(matrix: &str, epsilon: Option<f64>, cfg: &TitanConfig, out: &Output) -> Result<()> {
    let m = parse_matrix(matrix)?;
    let eps = epsilon.unwrap_or(cfg.elimination_epsilon);
    if eps < 0.0 {
        bail!("--epsilon must be non-negative, got {eps}");
    }
    let reduced = ala::gauss_jordan_eliminate(&m, eps);
    if out.json {
        let pivot = match reduced.status {
            ala::EliminationStatus::Reduced => None,
            ala::EliminationStatus::Singular { pivot } => Some(pivot),
        };
        return out.json(&serde_json::json!({
            "matrix": reduced.matrix,
            "singular_pivot": pivot,
        }));
    }
    if let ala::EliminationStatus::Singular { pivot } = reduced.status {
        eprintln!(
            "{}",
            format!("note: singular at pivot {pivot}; result is partially reduced").yellow()
        );
    }
    out.matrix(None, &reduced.matrix)
}

/// `fro` means Frobenius; anything else goes through `f64` parsing, which
/// accepts `inf` and `-inf`.
fn parse_order(order: Option<&str>) -> Result<Option<f64>> {
    match order {
        None => Ok(None),
        Some(o) if o.eq_ignore_ascii_case("fro") => Ok(None),
        Some(o) => o
            .parse::<f64>()
            .map(Some)
            .with_context(|| format!("Invalid norm order {o:?}")),
    }
}

pub fn norm(
    matrix: Option<&str>,
    vector: Option<&str>,
    order: Option<&str>,
    out: &Output,
) -> Result<()> {
    let p = parse_order(order)?;
    let value = match (matrix, vector) {
        (Some(m), _) => norms::matrix_norm(&parse_matrix(m)?, p).context("norm failed")?,
        (None, Some(v)) => {
            if order.is_some() && p.is_none() {
                bail!("the Frobenius norm applies to matrices only");
            }
            norms::vector_norm(&parse_vector(v)?, p.unwrap_or(2.0)).context("norm failed")?
        }
        (None, None) => bail!("either --matrix or --vector is required"),
    };
    out.scalar(value)
}

pub fn zigzag(n: usize, corner: &str, axis: &str, out: &Output) -> Result<()> {
    let m = reorder::zigzag_from_str(n, corner, axis).context("zigzag failed")?;
    if out.json {
        return out.json(&m);
    }
    // Entries are integers; skip the decimal places.
    println!("{:.0}", m);
    Ok(())
}

use anyhow::{Context, Result};

use super::Output;
use crate::core::titan::Complex;

pub fn roots(re: f64, im: f64, n: usize, out: &Output) -> Result<()> {
    let z = Complex::new(re, im);
    let roots = z.roots(n).with_context(|| format!("roots of {z} failed"))?;
    if out.json {
        return out.json(&roots);
    }
    for r in &roots {
        println!("{:.*}", out.precision, out.snap_complex(r));
    }
    Ok(())
}

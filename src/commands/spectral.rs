use anyhow::{Context, Result};

use super::Output;
use crate::core::titan::fourier;

/// One line per bin: index, real, imaginary, magnitude.
pub fn fft(samples: &[f64], out: &Output) -> Result<()> {
    let spectrum = fourier::fft(samples).context("fft failed")?;
    if out.json {
        return out.json(&spectrum);
    }
    let p = out.precision;
    for (k, bin) in spectrum.iter().map(|z| out.snap_complex(z)).enumerate() {
        println!(
            "{k}\t{:.*}\t{:.*}\t{:.*}",
            p,
            bin.re(),
            p,
            bin.im(),
            p,
            bin.magnitude()
        );
    }
    Ok(())
}
